//! User-facing reply text.

use numloc_core::Place;

/// Sent when nothing could be resolved from the user's text.
pub const HELP: &str =
    "Ямар байршил хэрэгтэй вэ?\nЖишээ: “МУИС, 2-р байр”, “4-р дотуур байр”, эсвэл “байршлууд”.";

/// Sent for a list request when the place table is empty.
pub const NO_PLACES: &str = "locations.yml хоосон байна (эсвэл олдсонгүй).";

const LIST_HEADER: &str = "📍 Байршлын жагсаалт:";

/// Bulleted list of place titles.
pub fn place_list<S: AsRef<str>>(titles: &[S]) -> String {
    let mut out = String::from(LIST_HEADER);
    for title in titles {
        out.push_str("\n- ");
        out.push_str(title.as_ref());
    }
    out
}

/// Title and map link for a resolved place.
pub fn place_found(place: &Place, url: &str) -> String {
    format!("📍 {}\n🗺️ {}", place.title, url)
}
