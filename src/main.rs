use clap::Parser;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};
use anyhow::Context;

use passforge::api::{self, AppState};
use passforge::cli::{handlers, menu, Args, CliCommand};
use passforge::core::{Config, GeneratorSession};
use passforge::crypto::RandomSource;
use passforge::generators::PasswordGenerator;
use passforge::models::GenerationConfig;
use passforge::system::SystemClipboard;
use passforge::{logging, utils};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    let env_files = utils::load_env_files();

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(seed) = args.seed {
        config.random_source = RandomSource::Seeded(seed);
    }

    logging::init(&config).context("failed to initialise logging")?;
    for file in &env_files {
        log::debug!("Loaded environment from {}", file.display());
    }
    log::debug!("Loaded config: {:?}", config);

    let generator = PasswordGenerator::new(config.random_source);

    match args.command.unwrap_or(CliCommand::Interactive) {
        CliCommand::Generate { length, no_uppercase, no_numbers, no_symbols, count } => {
            let defaults = config.generation_defaults();
            let generation = GenerationConfig {
                length: length.unwrap_or(defaults.length),
                include_uppercase: defaults.include_uppercase && !no_uppercase,
                include_numbers: defaults.include_numbers && !no_numbers,
                include_symbols: defaults.include_symbols && !no_symbols,
            };
            let passwords = handlers::handle_generate(&generator, &generation, count)?;
            println!("{}", handlers::render_generated(&passwords, args.json)?);
        }
        CliCommand::Score { password } => {
            let report = handlers::handle_score(&password);
            println!("{}", handlers::render_report(&report, args.json)?);
        }
        CliCommand::Serve { address, port } => {
            let address = address.unwrap_or_else(|| config.web_address.clone());
            let port = port.unwrap_or(config.web_port);
            println!("🚀 API server starting on http://{}:{}", address, port);
            println!("   Swagger UI: http://{}:{}/swagger-ui/", address, port);

            let state = AppState::new(generator, config.generation_defaults());
            api::start_server(state, &address, port)
                .await
                .with_context(|| format!("API server on {}:{} failed", address, port))?;
            log::info!("API server shut down gracefully");
        }
        CliCommand::Interactive => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received, shutting down");
                    should_exit.store(true, Ordering::SeqCst);
                    println!("\n👋 Goodbye!");
                    std::process::exit(0);
                })
                .context("failed to set Ctrl+C handler")?;
            }

            let session = GeneratorSession::new(
                generator,
                config.generation_defaults(),
                config.copy_notice_duration,
            )?;
            let clipboard = SystemClipboard::new();
            menu::run_cli_menu(session, &clipboard, should_exit).await?;
        }
    }

    Ok(())
}
