//! Replay a scripted input sequence against the annotation engine and print
//! the resulting state as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use planmark::config::EngineConfig;
use planmark::error::ReplayError;
use planmark::replay::ReplayScript;

#[derive(Parser, Debug)]
#[command(
    name = "planmark-replay",
    about = "Replay a pointer session against the annotation engine and print the result"
)]
struct Cli {
    /// JSON replay script
    script: PathBuf,

    /// Engine configuration overriding the script's own
    #[arg(env = "PLANMARK_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(EngineConfig::load).transpose() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let script = match ReplayScript::load(&cli.script) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let level = config
        .as_ref()
        .or(script.config.as_ref())
        .map(|c| c.log_level)
        .unwrap_or_default();
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .init();

    match run(&script, config) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Replay failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(script: &ReplayScript, config: Option<EngineConfig>) -> Result<String, ReplayError> {
    let summary = script.run(config)?;
    Ok(serde_json::to_string_pretty(&summary)?)
}
