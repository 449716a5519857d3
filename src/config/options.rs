// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use std::time::Duration;
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub export: ExportOptions,
}

/// Where and how to talk to OpenAlex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    pub base_url: String,
    /// Sent as `mailto=` so requests land in the OpenAlex polite pool.
    pub mailto: Option<String>,
    pub timeout_secs: u64,
    /// Fixed pause between page requests.
    pub pause_ms: u64,
    /// Honour HTTP(S)_PROXY from the environment. Off unless asked for.
    pub env_proxy: bool,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: API_BASE.to_string(),
            mailto: None,
            timeout_secs: TIMEOUT_SECS,
            pause_ms: REQUEST_PAUSE_MS,
            env_proxy: false,
        }
    }
}

impl ApiOptions {
    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, extension driven by the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(format!("{}.{}", stem, self.format.ext()))
    }

    /// Parse GUI/CLI text into dir + stem. Ignores a typed extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
