use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides the location of the config file.
pub const CONFIG_ENV: &str = "YOPMAIL_CLIENT_CONFIG";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub language: String,
    pub page_delay_ms: u64,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Route every request through this proxy, e.g. `http://127.0.0.1:8080`.
    pub proxy: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://yopmail.com".to_string(),
            language: "en".to_string(),
            page_delay_ms: 1000,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
                .to_string(),
            timeout_secs: 30,
            proxy: None,
        }
    }
}

impl Config {
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}

fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("no config dir available"))?
        .join("yopmail_client"))
}

pub fn config_path() -> Result<PathBuf> {
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(p));
    }
    let mut p = config_dir()?;
    p.push("config.toml");
    Ok(p)
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Read the config at `path`, writing a template with the defaults first if
/// there is none yet.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        let cfg = Config::default();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(&cfg)?)?;
        info!("created config template at {}", path.display());
        return Ok(cfg);
    }
    let s = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&s)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "yopmail_client-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str("language = \"fr\"\npage_delay_ms = 0\n").unwrap();
        assert_eq!(cfg.language, "fr");
        assert_eq!(cfg.page_delay(), Duration::ZERO);
        assert_eq!(cfg.base_url, "https://yopmail.com");
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn test_missing_file_writes_template() {
        let dir = scratch_dir("template");
        let path = dir.join("nested").join("config.toml");

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        let reread = load_config_from(&path).unwrap();
        assert_eq!(reread, cfg);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = scratch_dir("invalid");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "page_delay_ms = \"soon\"").unwrap();

        assert!(load_config_from(&path).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
