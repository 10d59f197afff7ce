use std::process;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use codetrail::cli;
use codetrail::config::Config;
use codetrail::storage::Storage;

fn main() {
    // Logs go to stderr so command output on stdout stays parseable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let root = config
        .data_dir
        .clone()
        .or_else(Storage::default_root)
        .unwrap_or_else(|| {
            eprintln!("Could not determine home directory.");
            process::exit(1);
        });

    let storage = match Storage::new(root) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&config, &storage) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
