//! Turns a trip request into a fully-populated travel plan.
//!
//! The resolver tries the hosted model first and projects its reply into the
//! plan contract field by field. Every failure mode (no credential, transport
//! fault, unusable reply) funnels into the deterministic offline generator,
//! so callers always receive a complete plan.

mod fallback;
mod parsing;
mod prompt;
mod transport;
mod types;

pub use types::{BudgetBreakdown, DayPlan, GeneratedTravelPlan, TripRequest};

use anyhow::anyhow;
use colored::Colorize;
use serde_json::Value;

use crate::client::OpenAiClient;
use crate::config::Config;

/// Service object holding the remote-call settings. Built once at startup;
/// no client is constructed when no API key is configured.
#[derive(Debug, Clone)]
pub struct TravelPlanner {
    client: Option<OpenAiClient>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

/// Closed set of reasons the remote path can fail. Each is logged once and
/// resolved by the same offline-fallback call site.
enum RemoteFailure {
    MissingCredential,
    Transport(anyhow::Error),
    UnusableReply(anyhow::Error),
}

impl RemoteFailure {
    fn log(&self) {
        match self {
            RemoteFailure::MissingCredential => {
                eprintln!(
                    "{}",
                    "No API key configured; using the offline itinerary generator.".dimmed()
                );
            }
            RemoteFailure::Transport(err) => {
                eprintln!(
                    "{}",
                    format!("⚠️  Travel model call failed: {err:#}. Falling back to the offline itinerary.")
                        .yellow()
                );
            }
            RemoteFailure::UnusableReply(err) => {
                eprintln!(
                    "{}",
                    format!("⚠️  Could not use the model reply: {err:#}. Falling back to the offline itinerary.")
                        .yellow()
                );
            }
        }
    }
}

impl TravelPlanner {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = if config.llm.api_key.trim().is_empty() {
            None
        } else {
            Some(OpenAiClient::new(config)?)
        };
        Ok(Self::from_parts(client, config))
    }

    /// Test seam: same wiring as `new`, against an arbitrary endpoint.
    pub fn with_base_url(config: &Config, base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = if config.llm.api_key.trim().is_empty() {
            None
        } else {
            Some(OpenAiClient::with_base_url(config, base_url)?)
        };
        Ok(Self::from_parts(client, config))
    }

    fn from_parts(client: Option<OpenAiClient>, config: &Config) -> Self {
        Self {
            client,
            model: config.model.name.clone(),
            max_tokens: config.model.max_tokens,
            temperature: config.model.temperature,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.client.is_some()
    }

    /// Resolves a trip request to a complete plan. Infallible by contract:
    /// any remote failure is absorbed and answered with the offline plan.
    pub async fn generate_travel_plan(&self, request: &TripRequest) -> GeneratedTravelPlan {
        match self.remote_plan(request).await {
            Ok(plan) => plan,
            Err(failure) => {
                failure.log();
                fallback::generate_offline_plan(request)
            }
        }
    }

    async fn remote_plan(&self, request: &TripRequest) -> Result<GeneratedTravelPlan, RemoteFailure> {
        let client = self.client.as_ref().ok_or(RemoteFailure::MissingCredential)?;

        let prompt = prompt::build_prompt(request);
        let content = transport::request_itinerary(
            client,
            prompt,
            &self.model,
            self.max_tokens,
            self.temperature,
        )
        .await
        .map_err(RemoteFailure::Transport)?;

        let fragment = parsing::extract_json_object(&content)
            .ok_or_else(|| RemoteFailure::UnusableReply(anyhow!("reply contained no JSON object")))?;

        let parsed: Value = serde_json::from_str(&fragment)
            .map_err(|err| RemoteFailure::UnusableReply(err.into()))?;

        Ok(parsing::project_plan(parsed, request))
    }
}
