use crate::error::{FoodCliError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub default_page_size: u32,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FoodCliError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("food-cli").join("config.json"))
    }

    /// APIキーを解決する
    ///
    /// 優先順位: 環境変数USDA_API_KEY → 設定ファイル → ~/pa/usda
    pub fn get_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var("USDA_API_KEY") {
            if !key.is_empty() {
                return Ok(key);
            }
        }

        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }

        if let Some(home) = dirs::home_dir() {
            let key_file = home.join("pa").join("usda");
            if key_file.exists() {
                let key = std::fs::read_to_string(&key_file)?.trim().to_string();
                if !key.is_empty() {
                    return Ok(key);
                }
            }
        }

        Err(FoodCliError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
            default_page_size: 10,
            timeout_seconds: 30,
        }
    }
}
