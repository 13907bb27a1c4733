use std::path::PathBuf;

/// Default per-line limit for checked instances (1 MiB).
pub const DEFAULT_MAX_LINE_BYTES: usize = 1024 * 1024;

/// Checker configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Alternative schema file; the embedded output schema is used when unset.
    pub schema_path: Option<PathBuf>,
    pub max_line_bytes: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            schema_path: None,
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
        }
    }
}

impl CheckerConfig {
    /// Load configuration from environment.
    ///
    /// - `RESPONSE_SCHEMA_PATH` (optional) — schema file to check against
    /// - `RESPONSE_MAX_LINE_BYTES` (optional, default 1 MiB) — max bytes per input line
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let schema_path = lookup("RESPONSE_SCHEMA_PATH")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let max_line_bytes = match lookup("RESPONSE_MAX_LINE_BYTES") {
            Some(val) => match val.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err("RESPONSE_MAX_LINE_BYTES must be a positive integer".to_string()),
            },
            None => DEFAULT_MAX_LINE_BYTES,
        };

        Ok(Self {
            schema_path,
            max_line_bytes,
        })
    }
}
