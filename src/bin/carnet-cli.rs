#![forbid(unsafe_code)]
use anyhow::Result;
use carnet::{repl, JsonStorage, Session, DEFAULT_BOOK_FILE};
use clap::Parser;
use std::io;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Assistant de contacts en ligne de commande
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs sur stderr (feature `logging`)
    #[arg(long)]
    log: bool,

    /// Fichier JSON du carnet
    #[arg(long, default_value = DEFAULT_BOOK_FILE)]
    book: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .try_init();
    }
    #[cfg(not(feature = "logging"))]
    let _ = cli.log;

    let mut session = Session::open(JsonStorage::open(&cli.book))?;
    repl::run(
        session.book_mut(),
        io::stdin().lock(),
        io::stdout().lock(),
        || chrono::Local::now().naive_local(),
    )?;
    session.close()
}
