use std::path::PathBuf;
use std::process::ExitCode;

use cardroom_history::history::GameType;
use cardroom_history::winamax::WinamaxParser;
use clap::{Parser, ValueEnum};
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Variant {
    Tournament,
    Cash,
}

impl From<Variant> for GameType {
    fn from(value: Variant) -> Self {
        match value {
            Variant::Tournament => GameType::Tournament,
            Variant::Cash => GameType::Cash,
        }
    }
}

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "decode_history")]
#[command(about = "Decode Winamax hand history files into JSON")]
struct Cli {
    /// Decode every file with these rules instead of guessing from the
    /// file name
    #[arg(short, long, value_enum)]
    game_type: Option<Variant>,

    /// Decode the hands of a file one after the other
    #[arg(short, long)]
    sequential: bool,

    /// Hand history files
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut builder = WinamaxParser::builder().parallel(!cli.sequential);
    if let Some(variant) = cli.game_type {
        builder = builder.game_type(variant.into());
    }
    let parser = builder.build();

    let mut status = ExitCode::SUCCESS;
    for path in &cli.files {
        let parsed = match parser.parse_file(path) {
            Ok(parsed) => parsed,
            Err(e) => {
                event!(Level::ERROR, path = %path.display(), error = %e, "Unable to read file");
                status = ExitCode::FAILURE;
                continue;
            }
        };
        for error in &parsed.unidentified {
            event!(Level::WARN, path = %path.display(), %error, "Skipped a fragment");
        }
        event!(
            Level::INFO,
            path = %path.display(),
            hands = parsed.hands.len(),
            failures = parsed.failures.len(),
            duplicates = parsed.duplicates.len(),
            "Decoded file"
        );

        let hands: Vec<_> = parsed.hands.values().collect();
        match serde_json::to_string_pretty(&hands) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                event!(Level::ERROR, path = %path.display(), error = %e, "Unable to serialize hands");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
