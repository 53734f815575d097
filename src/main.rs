use camelcards::shared::{read_input, render_report};
use camelcards::{AppConfig, AppError};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing on stderr so stdout only carries the answer
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "camelcards=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        error!(error = %e, "Camel Cards run failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    info!(input = %config.input_path.display(), output = ?config.output, "Scoring hands");

    let input = read_input(&config.input_path)?;
    let report = render_report(&input, config.output)?;
    println!("{}", report);
    Ok(())
}
