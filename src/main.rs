use clap::Parser;
use fivem_convert::core::rewrite;
use fivem_convert::utils::{error::ErrorSeverity, logger, validation};
use fivem_convert::{Cli, Command, ConvertEngine, ConvertPipeline, LocalStorage, RunSummary};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting fivem-convert");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    let result = run(&cli);

    match result {
        Ok(summary) => {
            match &summary.destination {
                Some(destination) => {
                    tracing::info!("✅ Conversion completed successfully!");
                    println!("✅ Converted {} entries", summary.converted);
                    if summary.skipped > 0 {
                        println!("   ({} entries skipped)", summary.skipped);
                    }
                    println!("📁 Output saved to: {}", destination);
                }
                None => {
                    println!("No entries found in the selected source; nothing was written.");
                }
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

fn run(cli: &Cli) -> fivem_convert::Result<RunSummary> {
    let config = cli.run_config()?;

    if let Command::Rewrite { script } = &cli.command {
        validation::validate_file_extension("script", &script.to_string_lossy(), &["lua"])?;
        let destination = rewrite::rewrite_file(script)?;
        return Ok(RunSummary {
            destination: Some(destination.display().to_string()),
            converted: 1,
            skipped: 0,
        });
    }

    let source = cli
        .record_source()?
        .ok_or(fivem_convert::ConvertError::NoInputSelected)?;

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ConvertPipeline::new(storage, config, source);
    let engine = ConvertEngine::new_with_monitoring(pipeline, cli.monitor);

    engine.run()
}
