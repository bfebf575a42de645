use clap::Parser;
use vendor_growth::adapters::files::{read_listing, read_listings, read_profile};
use vendor_growth::config::{Command, LogFormat};
use vendor_growth::utils::error::{ErrorSeverity, GrowthError};
use vendor_growth::utils::{logger, validation::Validate};
use vendor_growth::{CliConfig, EngineConfig, RecommendationEngine, Request};

fn load_config(cli: &CliConfig) -> Result<EngineConfig, GrowthError> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn build_request(command: &Command) -> Result<Request, GrowthError> {
    let request = match command {
        Command::Plan { profile } => Request::GrowthPlan(read_profile(profile)?),
        Command::Content { profile } => Request::Content(read_profile(profile)?),
        Command::Match { profile, other } => {
            Request::MatchScore(read_profile(profile)?, read_profile(other)?)
        }
        Command::Expansion {
            profile,
            collaborations,
        } => Request::Expansion {
            vendor: read_profile(profile)?,
            collaborations_count: *collaborations,
        },
        Command::Dashboard { listing } => Request::Dashboard(read_listing(listing)?.profile),
        Command::Matches {
            listing,
            candidates,
        } => Request::FindMatches {
            target: read_listing(listing)?,
            candidates: read_listings(candidates)?,
        },
    };
    Ok(request)
}

fn run(cli: &CliConfig, config: EngineConfig) -> Result<String, GrowthError> {
    let request = build_request(&cli.command)?;
    let engine = RecommendationEngine::new(config);
    let response = engine.handle(&request)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    Ok(output)
}

fn report_and_exit(e: &GrowthError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn main() {
    let cli = CliConfig::parse();

    // 配置要先讀，日誌等級可能來自配置檔
    let config = load_config(&cli);
    let level = config.as_ref().ok().and_then(|c| c.log_level().map(str::to_string));
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose, level.as_deref()),
        LogFormat::Json => logger::init_json_logger(level.as_deref()),
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => report_and_exit(&e),
    };
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(&cli, config) {
        Ok(output) => println!("{}", output),
        Err(e) => report_and_exit(&e),
    }
}
