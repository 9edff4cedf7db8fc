use clap::Parser;
use listing_scraper::utils::{logger, validation::Validate};
use listing_scraper::{CliArgs, ScrapeEngine, ScrapePipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting listing-scraper");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match args.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let item_policy = config.on_item_error;
    let preview_limit = config.preview_limit;
    let pipeline = ScrapePipeline::new(config)?;
    let engine = ScrapeEngine::new(pipeline)
        .with_item_policy(item_policy)
        .with_preview_limit(preview_limit);

    // Fetch and write failures were already reported by the engine and end the
    // run normally; only unhandled faults change the exit status.
    match engine.run().await {
        Ok(outcome) => {
            if outcome.is_success() {
                tracing::info!("Scrape completed");
            } else {
                tracing::warn!("Scrape ended early: {}", outcome);
            }
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
