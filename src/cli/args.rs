use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt;

use super::commands;

/// Entry point for the `tripsmith` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "tripsmith",
    about = "AI travel itinerary planner",
    version,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Where the trip goes
    #[arg(short = 'd', long = "destination")]
    pub destination: Option<String>,

    /// First day of the trip (YYYY-MM-DD)
    #[arg(long = "start")]
    pub start_date: Option<NaiveDate>,

    /// Last day of the trip (YYYY-MM-DD)
    #[arg(long = "end")]
    pub end_date: Option<NaiveDate>,

    /// Number of travelers
    #[arg(short = 't', long = "travelers", default_value_t = 1)]
    pub travelers: u32,

    /// Total budget for the trip
    #[arg(short = 'b', long = "budget")]
    pub budget: Option<f64>,

    /// Interests to plan around (comma separated)
    #[arg(short = 'i', long = "interests", value_delimiter = ',')]
    pub interests: Vec<Interest>,

    /// How the trip should be paced and priced
    #[arg(short = 's', long = "style", value_enum, default_value_t = TravelStyle::Balanced)]
    pub style: TravelStyle,

    /// Print the plan as JSON instead of formatted text
    #[arg(long = "json")]
    pub json: bool,

    /// Log LLM requests and responses to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show or update tripsmith settings.
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Set the API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Set the model used for itinerary generation
    #[arg(long)]
    pub model: Option<String>,

    /// Set the maximum reply length in tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Set the request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Interest {
    Culture,
    Nature,
    Food,
    Shopping,
    Nightlife,
    Relaxation,
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Interest::Culture => "culture",
            Interest::Nature => "nature",
            Interest::Food => "food",
            Interest::Shopping => "shopping",
            Interest::Nightlife => "nightlife",
            Interest::Relaxation => "relaxation",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TravelStyle {
    Budget,
    Balanced,
    Luxury,
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TravelStyle::Budget => "budget",
            TravelStyle::Balanced => "balanced",
            TravelStyle::Luxury => "luxury",
        };
        write!(f, "{name}")
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        commands::run(self)
    }
}
