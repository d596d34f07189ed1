/// Application-level constants
pub const APP_NAME: &str = "Symptia";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default generative service endpoint (local Ollama instance).
pub const DEFAULT_GENERATIVE_URL: &str = "http://localhost:11434";

/// Default timeout for one generative call, in seconds.
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 300;

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info,symptia=debug"
}
