// src/main.rs

use std::io;
use std::process;
use log::{error, warn};
use env_logger::Env;
use numutil::cli;
use numutil::config::NumUtilConfig;

fn main() {
    let (config, config_error) = match NumUtilConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (NumUtilConfig::default(), Some(e)),
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("NUMUTIL_LOG", config.log_level.as_str())
        .write_style_or("NUMUTIL_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    if let Some(e) = config_error {
        warn!("Failed to load configuration, using defaults: {}", e);
    }

    let args: Vec<String> = std::env::args().collect();
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = cli::run(&args, &config, stdin.lock(), &mut stdout.lock()) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
