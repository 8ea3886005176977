mod app_state;
mod cli;
mod logging;

use std::process::ExitCode;

use termfolio_config::schema::TermfolioConfig;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Leave the alternate screen first or the message is lost with it.
        app_state::restore_terminal();
        default_hook(info);
    }));
}

fn main() -> ExitCode {
    install_panic_hook();

    // Parse CLI arguments
    let args = cli::parse();

    // Load config; logging is not up yet, so report failures after init
    let (config, config_error) = match termfolio_config::load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (TermfolioConfig::default(), Some(e)),
    };

    if args.print_config {
        if let Some(e) = &config_error {
            eprintln!("termfolio: config load failed, showing defaults: {e}");
        }
        println!("{}", termfolio_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    // Initialize logging
    match logging::init(&config.logging, args.log_level.as_deref()) {
        Ok(Some(path)) => tracing::info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("termfolio: logging disabled: {e}"),
    }

    tracing::info!("Termfolio v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let start_tab = app_state::resolve_start_tab(args.tab.as_deref(), &config.startup.tab);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start runtime: {e}");
            eprintln!("termfolio: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(app_state::run(config, start_tab)) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Event loop error: {e}");
            eprintln!("termfolio: {e}");
            ExitCode::FAILURE
        }
    }
}
