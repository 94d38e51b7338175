//! Shared constants and invariants

/// `exp - iat` of every minted assertion.
pub const TOKEN_VALIDITY_SECONDS: u64 = 3600;
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

pub const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";
pub const SHEETS_DEFAULT_RANGE: &str = "RSVP Responses";
pub const SHEETS_VALUE_INPUT_OPTION: &str = "RAW";

pub const DEFAULT_RSVP_PATH: &str = "/rsvp";
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
