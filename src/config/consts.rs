// src/config/consts.rs

// Net config
pub const API_BASE: &str = "https://api.openalex.org";
pub const USER_AGENT: &str = concat!("grant_finder/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;
// A full page of works can run well past ureq's 10 MiB default.
pub const MAX_BODY_BYTES: u64 = 256 * 1024 * 1024;

// Pagination
pub const PER_PAGE: u32 = 100;
pub const START_CURSOR: &str = "*";
// Only the grants are read off each work.
pub const WORKS_SELECT: &str = "grants";
pub const REQUEST_PAUSE_MS: u64 = 100; // be polite

// Local files
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "grant_ids";
pub const GRANT_ID_HEADER: &str = "Grant ID";
