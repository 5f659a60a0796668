use clap::Parser;
use log::LevelFilter;

use uvc_scan::camera::UvcBackend;
use uvc_scan::cli::{self, Args, Command};
use uvc_scan::config::{self, Config};

fn init_logging(level: LevelFilter) {
    // RUST_LOG, when set, overrides the level chosen from flags and config
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();

    let config_path = config::resolve_path(args.config.as_deref());
    let config = match Config::load(Some(config_path.as_path())) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Config::load has already validated the level
    let configured_level = config.log_level().ok().flatten();
    init_logging(args.log_level(configured_level));

    if config_path.exists() {
        log::debug!("Loaded config from {}", config_path.display());
    } else {
        log::debug!("No config file at {}, using defaults", config_path.display());
    }

    match args.command.clone().unwrap_or(Command::Scan) {
        Command::Scan => {
            let indices = match args.indices.clone() {
                Some(indices) => indices,
                None => match config.indices() {
                    Ok(indices) => indices,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                },
            };
            let format = args.format.unwrap_or(config.probe.format);
            log::debug!("Probing camera indices {} ({:?} output)", indices, format);

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            match cli::scan(UvcBackend::new(), &indices, format, &mut out) {
                Ok(records) => {
                    let found = records.iter().filter(|r| r.outcome.is_reported()).count();
                    log::info!("Probed {} indices, {} camera(s) reported", records.len(), found);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::List => cli::list_cameras(&UvcBackend::new()),
        Command::Config { action } => cli::handle_config_action(action, &config_path, &config),
    }
}
