pub mod config;
pub mod models;
pub mod interview; // adaptive diagnostic interview: prompts, parsers, session state machine
pub mod matching; // condition → specialty resolution + practitioner matching
pub mod scheduling; // slot availability + booking commit

use tracing_subscriber::EnvFilter;

/// Initialize tracing for hosts embedding the engine.
///
/// Honors RUST_LOG when set, otherwise falls back to the engine default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Symptia engine v{}", config::APP_VERSION);
}
