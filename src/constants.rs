//! Application constants and configuration

pub const APP_NAME: &str = "FactScope";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend used when neither settings.json nor the environment names one
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const API_URL_ENV: &str = "FACTSCOPE_API_URL";

/// Minimum trimmed input length (in characters) before a request is sent
pub const MIN_INPUT_CHARS: usize = 10;

// Result rendering limits
pub const MAX_SENTIMENT_WORDS: usize = 4;
pub const MAX_KEYWORDS: usize = 5;
pub const MAX_TRUSTED_SOURCES: usize = 3;
pub const MAX_FACT_CHECKS: usize = 2;

// Toast durations (ms)
pub const TOAST_DEFAULT_MS: u64 = 2500;
pub const TOAST_LONG_MS: u64 = 4000;
pub const TOAST_CONNECTED_MS: u64 = 2000;

pub const SHARE_TITLE: &str = "FactScope News Verification";
