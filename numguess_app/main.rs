use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;

use numguess_cli::CliConfig;
use numguess_core::StreamConsole;

mod error;
mod log_init;
mod session;
use error::NumguessError;
use session::Session;

const INTERRUPTED_EXIT_CODE: i32 = 130;

fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        warn!("Interrupted, leaving the game");
        process::exit(INTERRUPTED_EXIT_CODE);
    });
    if let Err(e) = result {
        warn!("Could not install Ctrl-C handler: {}", e);
    }
}

fn run(config: CliConfig) -> Result<(), NumguessError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut console = StreamConsole::stdio();
    let mut session = Session::new(&config);
    let result = session.run(&mut rng, &mut console);
    info!("Final tally: {}", session.tally());
    result
}

fn main() {
    let config = CliConfig::new().unwrap_or_else(|e| {
        eprintln!("Error reading configuration: {}", e);
        process::exit(NumguessError::from(e).exit_code());
    });

    if let Err(e) = log_init::init(config.log_level()) {
        eprintln!("Error initializing logger: {}", e);
    }
    info!("Starting Numguess...");
    config.log();
    install_interrupt_handler();

    if let Err(e) = run(config) {
        match &e {
            NumguessError::Core(numguess_core::Error::EndOfInput) => warn!("{}", e),
            _ => error!("{}", e),
        }
        process::exit(e.exit_code());
    }
}
