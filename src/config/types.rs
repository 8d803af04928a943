use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
    pub model: ModelSettings,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    /// May be empty; the planner then uses its offline generator.
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub name: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

// File configuration shapes
#[derive(Debug, Deserialize)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub llm: Option<FileLlmSettings>,
    #[serde(default)]
    pub model: Option<FileModelSettings>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileLlmSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileModelSettings {
    pub name: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

// Serialization helpers
#[derive(Serialize)]
pub(super) struct PersistedConfig<'a> {
    pub llm: PersistedLlm<'a>,
    pub model: PersistedModel<'a>,
}

#[derive(Serialize)]
pub(super) struct PersistedLlm<'a> {
    pub api_key: &'a str,
    pub base_url: &'a str,
    pub timeout_secs: u64,
    pub user_agent: &'a str,
}

#[derive(Serialize)]
pub(super) struct PersistedModel<'a> {
    pub name: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl<'a> From<&'a Config> for PersistedConfig<'a> {
    fn from(config: &'a Config) -> Self {
        PersistedConfig {
            llm: PersistedLlm {
                api_key: &config.llm.api_key,
                base_url: &config.llm.base_url,
                timeout_secs: config.llm.timeout_secs,
                user_agent: &config.llm.user_agent,
            },
            model: PersistedModel {
                name: &config.model.name,
                max_tokens: config.model.max_tokens,
                temperature: config.model.temperature,
            },
        }
    }
}
