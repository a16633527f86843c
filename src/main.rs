use fortios_net_validators::check_reports;
use fortios_net_validators::config::Config;
use fortios_net_validators::output::print_report;
use fortios_net_validators::validate_file;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Keep main.rs thin, it can't hold tests
    dotenv::dotenv().ok();
    let config = Config::from_env(std::env::args().nth(1))?;
    log4rs::init_file(&config.log_config, Default::default())
        .map_err(|e| format!("Error initializing log4rs from {}: {e}", config.log_config))?;
    //
    log::info!("#Start main() input={}", config.input_file);

    let reports = validate_file(&config.input_file)?;
    print_report(&reports);

    if let Err(e) = check_reports(&reports) {
        log::warn!("{e}");
        std::process::exit(1);
    }
    Ok(())
}
