use clap::{Parser, Subcommand};
use numloc::campus::{config::Settings, PlaceStore, Resolver};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "numloc", about = "NUM campus location resolver and action server")]
struct Cli {
    /// Settings file (TOML). Defaults to ./numloc.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Places file (YAML). Overrides `places.path` from the settings.
    #[arg(long, global = true)]
    places: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the action server for the dialogue runtime.
    Serve {
        /// Listen address. Overrides `server.bind` from the settings.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Resolve text to a place and print the map link.
    Resolve {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print every loaded place.
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "info" })
            }),
        )
        .init();

    let settings = Settings::load(cli.config.as_deref())?;
    let places_path = cli.places.unwrap_or_else(|| settings.places.path.clone());
    let store = Arc::new(PlaceStore::load(&places_path));

    match cli.command {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.server.bind.clone());
            let registry = Arc::new(numloc::build_registry(store, &settings.action));
            numloc::server::serve(&bind, registry).await
        }
        Command::Resolve { text } => {
            let text = text.join(" ");
            match Resolver::new(&store).explain(&text) {
                Some(r) => match r.place {
                    Some(place) => println!(
                        "{}\t{}\t{}\t{}",
                        r.strategy,
                        place.key,
                        place.title,
                        numloc::action::maps::place_url(place)
                    ),
                    None => println!("{}\t{}\t(not configured)", r.strategy, r.key),
                },
                None => println!("no match"),
            }
            Ok(())
        }
        Command::List => {
            if store.is_empty() {
                eprintln!("no places loaded from {}", places_path.display());
            }
            for place in store.places() {
                println!("{}\t{}", place.key, place.title);
            }
            Ok(())
        }
    }
}
