//! Configuration for the tripsmith CLI.
//!
//! Settings are layered: built-in defaults, then the JSON config file at
//! `~/.tripsmith/config`, then environment variable overrides. A missing
//! API key is a valid state — the planner degrades to its offline
//! generator rather than failing.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use types::{Config, LlmSettings, ModelSettings};

pub use constants::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
