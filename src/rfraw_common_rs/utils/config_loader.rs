use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::rfraw_common_rs::frame::types::b0_frame::DEFAULT_REPEAT_VAL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig { pub default_repeats: u32 }
impl Default for ConversionConfig { fn default() -> Self { Self { default_repeats: DEFAULT_REPEAT_VAL } } }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig { pub level: String }
impl Default for LogConfig { fn default() -> Self { Self { level: "info".into() } } }

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RfRawConfig {
    #[serde(default)]
    pub conversion: ConversionConfig,
    #[serde(default)]
    pub logging: LogConfig,
}

/// 設定ファイル・環境変数から RfRawConfig を読み込むローダー
pub struct ConfigLoader { config_paths: Vec<PathBuf>, env_prefix: String }
impl ConfigLoader {
    pub fn new() -> Self { Self { config_paths: vec![PathBuf::from("rfraw.config.toml"), PathBuf::from("rfraw.config.json"), PathBuf::from("config.toml"), PathBuf::from("config.json")], env_prefix: "RFRAW_".into() } }
    pub fn with_paths(paths: Vec<PathBuf>) -> Self { Self { config_paths: paths, env_prefix: "RFRAW_".into() } }
    pub fn with_env_prefix(mut self, prefix: String) -> Self { self.env_prefix = prefix; self }

    pub fn load(&self) -> Result<RfRawConfig, String> {
        let mut config = RfRawConfig::default();
        for path in &self.config_paths {
            if path.exists() {
                match self.load_from_file(path) {
                    Ok(fc) => { config = fc; break; }
                    Err(e) => { eprintln!("Warning: Failed to load config from {:?}: {}", path, e); }
                }
            }
        }
        config = self.apply_env_overrides(config)?;
        self.validate_config(&config)?;
        Ok(config)
    }

    fn load_from_file(&self, path: &Path) -> Result<RfRawConfig, String> {
        let content = fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| format!("Failed to parse JSON config: {}", e)),
            Some("toml") => toml::from_str(&content).map_err(|e| format!("Failed to parse TOML config: {}", e)),
            _ => Err("Unsupported config file format".into()),
        }
    }

    fn apply_env_overrides(&self, mut config: RfRawConfig) -> Result<RfRawConfig, String> {
        if let Ok(repeats_str) = env::var(format!("{}DEFAULT_REPEATS", self.env_prefix)) { config.conversion.default_repeats = repeats_str.parse().map_err(|_| "Invalid repeat count in environment variable")?; }
        if let Ok(level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) { config.logging.level = level; }
        Ok(config)
    }

    fn validate_config(&self, config: &RfRawConfig) -> Result<(), String> {
        match config.logging.level.to_lowercase().as_str() { "trace"|"debug"|"info"|"warn"|"error" => {}, _ => return Err("Invalid log level. Must be one of: trace, debug, info, warn, error".into()) }
        Ok(())
    }
}

impl Default for ConfigLoader { fn default() -> Self { Self::new() } }
