use clap::Parser;
use realty_estimator::utils::{logger, validation::Validate};
use realty_estimator::{CliConfig, Console, PredictionSession, RealtyError, Validator};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting realty-estimator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(e);
    }

    let bounds = match config.load_bounds() {
        Ok(bounds) => bounds,
        Err(e) => exit_with(e),
    };
    tracing::debug!("Field bounds: {:?}", bounds);

    let validator = Validator::new(bounds);
    let stdin = std::io::stdin();
    let console = Console::new(
        stdin.lock(),
        std::io::stdout(),
        validator.clone(),
        config.precision,
    );
    let mut session = PredictionSession::new(console, validator);

    match session.run() {
        Ok(estimates) => {
            tracing::info!("Produced {} estimates", estimates);
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: RealtyError) -> ! {
    tracing::error!("{} (Severity: {:?})", e, e.severity());
    tracing::error!("Suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
