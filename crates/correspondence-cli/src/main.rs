//! Correspondence assistant executable
//!
//! Generates one document per invocation and prints it to stdout.

mod cli;

use correspondence_core::{
    AssistantConfig,
    CorrespondenceDispatcher,
    GenerationResult,
    GenerationSettings,
    OpenAIClient,
};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_VALIDATION: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let matches = cli::build_cli().get_matches();

    if matches.get_flag("list-types") {
        print!("{}", cli::render_catalog());
        return ExitCode::SUCCESS;
    }

    match run(&matches).await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(matches: &clap::ArgMatches) -> anyhow::Result<ExitCode> {
    // Credentials are checked before any input is read or request sent
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            let config = AssistantConfig::from_file(path)?;
            log::info!("Loaded configuration from {}", path.display());
            config
        }
        None => {
            if let Err(e) = dotenvy::dotenv() {
                if !e.not_found() {
                    log::warn!("Ignoring unreadable .env file: {}", e);
                }
            }
            AssistantConfig::from_env()?
        }
    };

    let request = cli::request_from_matches(matches)?;

    let settings = GenerationSettings::from_config(&config.openai);
    let client = OpenAIClient::new(config.openai)?;
    let dispatcher = CorrespondenceDispatcher::new(client, settings);

    if let Err(warning) = request.validate() {
        eprintln!("{}", warning);
        return Ok(ExitCode::from(EXIT_VALIDATION));
    }

    eprintln!("Generating document...");
    match dispatcher.dispatch(&request).await {
        Err(warning) => {
            eprintln!("{}", warning);
            Ok(ExitCode::from(EXIT_VALIDATION))
        }
        Ok(GenerationResult::Generated { text }) => {
            eprintln!("Document generated!");
            println!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
        Ok(GenerationResult::Failed { error_message }) => {
            eprintln!("Error generating document: {}", error_message);
            Ok(ExitCode::FAILURE)
        }
    }
}
