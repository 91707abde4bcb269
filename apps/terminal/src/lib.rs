pub mod config;
pub mod source;
pub mod terminal;

use glosor_core::{Mode, SessionController};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::source::DeckSource;
use crate::terminal::Terminal;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Quiet by default so log lines do not interleave with the quiz
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting in {} mode with data from {:?}", config.mode, config.data);

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let controller = SessionController::new(config.mode, rng);

    // Both decks load concurrently and report back in completion order
    let source = DeckSource::new(&config);
    let (tx, rx) = mpsc::unbounded_channel();
    for mode in [Mode::Words, Mode::Verbs] {
        let source = source.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = source.load(mode).await;
            let _ = tx.send((mode, result));
        });
    }
    drop(tx);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut terminal = Terminal::new(controller, std::io::stdout());
    terminal.run(stdin, rx).await?;

    Ok(())
}
