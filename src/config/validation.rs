use anyhow::{Result, anyhow};

use super::types::Config;

/// An empty API key is allowed; the planner falls back to its offline
/// generator in that case.
pub fn validate(config: &Config) -> Result<()> {
    if config.llm.base_url.trim().is_empty() {
        return Err(anyhow!("LLM base URL cannot be empty"));
    }

    if config.model.name.trim().is_empty() {
        return Err(anyhow!("Model name cannot be empty"));
    }

    if config.model.max_tokens == 0 {
        return Err(anyhow!("max_tokens must be greater than zero"));
    }

    if !(0.0..=2.0).contains(&config.model.temperature) {
        return Err(anyhow!(
            "temperature must be between 0.0 and 2.0, got {}",
            config.model.temperature
        ));
    }

    Ok(())
}
