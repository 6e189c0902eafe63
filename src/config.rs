//! Run configuration, resolved once at startup.
//!
//! Values come from the environment (after `.env` is loaded by `main`) and are
//! never mutated afterwards. Each pipeline stage receives a `&Config`.

use crate::error::BlocklistError;
use std::path::PathBuf;

/// AbuseIPDB confidence threshold used by the upstream list names.
pub const THRESHOLD: u32 = 100;
pub const DEFAULT_TIMEOUT: &str = "1";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_BUILD_DIR: &str = "build";
/// List fetched and rendered directly in http mode.
pub const HTTP_LIST_NAME: &str = "abuseipdb-s100-30d";
pub const DOWNLOAD_BASE_URL: &str =
    "https://raw.githubusercontent.com/borestad/blocklist-abuseipdb/refs/heads/main";

/// Which acquisition path a run takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read `<list>-collapsed.ipv4` from the data dir, entries expire after TIMEOUT days.
    File,
    /// Fetch the list over HTTP and render it without expiry.
    Http,
    /// Download the raw list and write the collapsed file consumed by `File`.
    Collapse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub list_name: String,
    pub timeout_days: Option<u32>,
    pub data_dir: PathBuf,
    pub build_dir: PathBuf,
    pub source_url: String,
}

impl Config {
    pub fn from_env(mode: Mode) -> Result<Config, BlocklistError> {
        Config::from_lookup(mode, |key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(mode: Mode, lookup: F) -> Result<Config, BlocklistError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (list_name, timeout_days) = match mode {
            Mode::Http => (HTTP_LIST_NAME.to_string(), None),
            Mode::File | Mode::Collapse => {
                let raw = lookup("TIMEOUT").unwrap_or_else(|| DEFAULT_TIMEOUT.to_string());
                let days = parse_timeout(&raw)?;
                (list_name(raw.trim()), Some(days))
            }
        };

        let source_url = lookup("SOURCE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| format!("{DOWNLOAD_BASE_URL}/{list_name}.ipv4"));

        let config = Config {
            mode,
            list_name,
            timeout_days,
            data_dir: PathBuf::from(
                lookup("DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
            ),
            build_dir: PathBuf::from(
                lookup("BUILD_DIR").unwrap_or_else(|| DEFAULT_BUILD_DIR.to_string()),
            ),
            source_url,
        };
        log::debug!("Resolved config: {:?}", config);
        Ok(config)
    }

    /// Raw download as published upstream.
    pub fn raw_file(&self) -> PathBuf {
        self.data_dir.join(format!("{}.ipv4", self.list_name))
    }

    /// Collapsed list; output of `collapse`, input of `file`.
    pub fn collapsed_file(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}-collapsed.ipv4", self.list_name))
    }

    pub fn output_file(&self) -> PathBuf {
        self.build_dir.join(format!("{}.rsc", self.list_name))
    }
}

/// `abuseipdb-s<threshold>-<days>d`, `days` as written in TIMEOUT (`07` stays `07`).
pub fn list_name(timeout_days: &str) -> String {
    format!("abuseipdb-s{THRESHOLD}-{timeout_days}d")
}

fn parse_timeout(raw: &str) -> Result<u32, BlocklistError> {
    match raw.trim().parse::<u32>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(BlocklistError::Validation(format!(
            "TIMEOUT must be a positive number of days, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::collections::HashMap;
    use std::path::Path;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_file_mode_defaults() {
        let config = Config::from_lookup(Mode::File, lookup_from(&[])).unwrap();
        assert_eq!(config.list_name, "abuseipdb-s100-1d");
        assert_eq!(config.timeout_days, Some(1));
        assert_eq!(
            config.collapsed_file(),
            Path::new("data").join("abuseipdb-s100-1d-collapsed.ipv4")
        );
        assert_eq!(
            config.output_file(),
            Path::new("build").join("abuseipdb-s100-1d.rsc")
        );
    }

    #[test]
    fn test_timeout_drives_list_name() {
        let config = Config::from_lookup(Mode::File, lookup_from(&[("TIMEOUT", "7")])).unwrap();
        assert_eq!(config.list_name, "abuseipdb-s100-7d");
        assert_eq!(config.timeout_days, Some(7));
        assert_eq!(
            config.source_url,
            format!("{DOWNLOAD_BASE_URL}/abuseipdb-s100-7d.ipv4")
        );
    }

    #[test]
    fn test_timeout_spelling_kept_in_list_name() {
        let config = Config::from_lookup(Mode::File, lookup_from(&[("TIMEOUT", " 07 ")])).unwrap();
        assert_eq!(config.list_name, "abuseipdb-s100-07d");
        assert_eq!(config.timeout_days, Some(7));
        assert_eq!(
            config.collapsed_file(),
            Path::new("data").join("abuseipdb-s100-07d-collapsed.ipv4")
        );
    }

    #[test]
    fn test_http_mode_ignores_timeout() {
        let config = Config::from_lookup(Mode::Http, lookup_from(&[("TIMEOUT", "7")])).unwrap();
        assert_eq!(config.list_name, HTTP_LIST_NAME);
        assert_eq!(config.timeout_days, None);
        assert!(config.source_url.ends_with("/abuseipdb-s100-30d.ipv4"));
    }

    #[test]
    fn test_bad_timeout_is_validation_error() {
        for bad in ["0", "-1", "abc", ""] {
            let err = Config::from_lookup(Mode::File, lookup_from(&[("TIMEOUT", bad)]))
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "TIMEOUT={bad}");
        }
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(
            Mode::Collapse,
            lookup_from(&[
                ("DATA_DIR", "/tmp/in"),
                ("BUILD_DIR", "/tmp/out"),
                ("SOURCE_URL", "http://127.0.0.1:8080/list.ipv4"),
            ]),
        )
        .unwrap();
        assert_eq!(config.raw_file(), Path::new("/tmp/in/abuseipdb-s100-1d.ipv4"));
        assert_eq!(config.output_file(), Path::new("/tmp/out/abuseipdb-s100-1d.rsc"));
        assert_eq!(config.source_url, "http://127.0.0.1:8080/list.ipv4");
    }
}
