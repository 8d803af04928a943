use anyhow::{Result, bail};
use colored::Colorize;

use crate::client::set_verbose_logging;
use crate::config::Config;
use crate::planner::{TravelPlanner, TripRequest};

use super::args::{Cli, Command, ConfigArgs};
use super::render;

pub(crate) fn run(cli: Cli) -> Result<()> {
    set_verbose_logging(cli.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_async(cli))
}

async fn run_async(mut cli: Cli) -> Result<()> {
    if let Some(command) = cli.command.take() {
        return match command {
            Command::Config(args) => run_config(args),
        };
    }

    let request = trip_request_from_args(&cli)?;
    let config = Config::load()?;
    let planner = TravelPlanner::new(&config)?;

    if !planner.has_credential() {
        eprintln!(
            "{}",
            "No API key configured. Set OPENAI_API_KEY or run `tripsmith config --api-key <key>` for AI-generated itineraries."
                .yellow()
        );
    }

    let plan = planner.generate_travel_plan(&request).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        render::print_plan(&plan);
    }

    Ok(())
}

fn trip_request_from_args(cli: &Cli) -> Result<TripRequest> {
    let Some(destination) = cli.destination.clone() else {
        bail!("Missing --destination. Try: tripsmith -d Lisbon --start 2024-06-01 --end 2024-06-05 -b 8000");
    };
    if destination.trim().is_empty() {
        bail!("Destination cannot be empty");
    }
    let Some(start_date) = cli.start_date else {
        bail!("Missing --start date (YYYY-MM-DD)");
    };
    let Some(end_date) = cli.end_date else {
        bail!("Missing --end date (YYYY-MM-DD)");
    };
    if end_date < start_date {
        bail!("--end must not be before --start");
    }
    let Some(budget) = cli.budget else {
        bail!("Missing --budget");
    };
    if budget <= 0.0 {
        bail!("--budget must be positive");
    }
    if cli.travelers == 0 {
        bail!("--travelers must be at least 1");
    }

    Ok(TripRequest {
        destination,
        start_date,
        end_date,
        travelers: cli.travelers,
        budget,
        interests: cli.interests.iter().map(|i| i.to_string()).collect(),
        travel_style: cli.style.to_string(),
    })
}

fn run_config(args: ConfigArgs) -> Result<()> {
    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(api_key) = args.api_key {
        config.llm.api_key = api_key;
        changed = true;
    }
    if let Some(model) = args.model {
        config.model.name = model;
        changed = true;
    }
    if let Some(max_tokens) = args.max_tokens {
        config.model.max_tokens = max_tokens;
        changed = true;
    }
    if let Some(timeout) = args.timeout {
        config.llm.timeout_secs = timeout;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("{}", "✅ Configuration saved".green());
    }

    println!("\n{}", "Current settings:".bold());
    let key_display = if config.llm.api_key.is_empty() {
        "(not set — offline itineraries only)".to_string()
    } else {
        format!("{}…", &config.llm.api_key[..config.llm.api_key.len().min(6)])
    };
    println!("  API key:    {}", key_display);
    println!("  Base URL:   {}", config.llm.base_url);
    println!("  Model:      {}", config.model.name);
    println!("  Max tokens: {}", config.model.max_tokens);
    println!("  Timeout:    {}s", config.llm.timeout_secs);

    Ok(())
}
