// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Utterances that ask for the full list of places instead of one location.
/// Compared against the trimmed, lowercased candidate text.
static LIST_TRIGGERS: phf::Set<&'static str> = phf::phf_set! {
    "байршлууд",
    "байршил",
    "жагсаалт",
    "locations",
    "list",
};

/// What the user asked the send-location action to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Enumerate every loaded place title.
    ListPlaces,
    /// Resolve the given text to a single place.
    Locate(String),
}

impl Command {
    /// Classify candidate text. Anything that is not an exact list trigger
    /// (ignoring case and surrounding whitespace) is a location request,
    /// including empty text.
    pub fn parse(input: &str) -> Command {
        if is_list_trigger(input) {
            Command::ListPlaces
        } else {
            Command::Locate(input.to_string())
        }
    }
}

pub fn is_list_trigger(input: &str) -> bool {
    LIST_TRIGGERS.contains(input.trim().to_lowercase().as_str())
}
