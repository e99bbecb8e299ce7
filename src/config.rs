use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::QaError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LlmConfig {
    pub api_url: String,
    pub model_name: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: consts::DEFAULT_API_URL.to_string(),
            model_name: consts::DEFAULT_MODEL_NAME.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, QaError>;
}

pub struct FileConfigLoader;

impl FileConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<Config, QaError> {
        let config_file = std::env::var("RQA_CONFIG_FILE").unwrap_or("./config.json".to_string());
        if !std::path::Path::new(&config_file).exists() {
            return Ok(Config::default());
        }
        let config_str = std::fs::read_to_string(&config_file)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }
}

pub fn load_config() -> Result<Config, QaError> {
    let loader = FileConfigLoader::new();
    loader.load_config()
}
