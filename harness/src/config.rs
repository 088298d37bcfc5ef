use once_cell::sync::Lazy;
use std::env;

/// Text field limits of the interactive form, including one byte reserved
/// for a terminator.
pub const TITLE_CAPACITY: usize = 64;
pub const BODY_CAPACITY: usize = 128;
pub const SUMMARY_CAPACITY: usize = 256;

pub struct Config {
    pub app_name: String,
    pub offline: bool,
    pub use_index: bool,
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env::var("HERALD_APP_NAME").unwrap_or_else(|_| "herald-harness".to_string()),
            offline: env_flag("HERALD_OFFLINE"),
            use_index: env_flag("HERALD_USE_INDEX"),
            poll_interval_ms: env::var("HERALD_POLL_INTERVAL_MS")
                .unwrap_or_else(|_| "250".to_string())
                .parse()
                .unwrap_or(250),
        }
    }
}

fn env_flag(name: &str) -> bool {
    matches!(
        env::var(name).as_deref().map(str::trim),
        Ok("1") | Ok("true") | Ok("yes")
    )
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);
