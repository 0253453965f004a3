use chrono::Local;
use fern::Dispatch;
use log::{info, LevelFilter};
use crate::config::Config;

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info, // Valeur par défaut si invalide
    }
}

pub fn init_logging(config: &Config) -> Result<(), fern::InitError> {
    Dispatch::new()
        .level(parse_level(&config.log_level))
        .chain(std::io::stdout())
        .chain(fern::log_file(&config.log_file)?)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.target(),
                record.level(),
                message
            ))
        })
        .apply()?;

    info!("Logging initialized with level: {}", config.log_level);
    Ok(())
}
