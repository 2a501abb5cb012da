use crate::{errors::Error, Result};
use council_configuration::{LogConfig, LogLevel, LogStyle};
use tracing_subscriber::filter::LevelFilter;

/// Convert configuration LogLevel to tracing LevelFilter
pub(crate) fn log_level_to_level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Info => LevelFilter::INFO,
    }
}

/// Install a fmt subscriber on stderr. Stdout is reserved for the report.
pub(crate) fn init_tracing(config: LogConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(log_level_to_level_filter(config.level))
        .with_writer(std::io::stderr);

    let installed = match config.fmt {
        LogStyle::Full => builder.try_init(),
        LogStyle::Pretty => builder.pretty().try_init(),
        LogStyle::Compact => builder.compact().try_init(),
        LogStyle::Json => builder.json().try_init(),
    };

    installed.map_err(|e| Error::Tracing(e.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_maps_every_level() {
        assert_eq!(log_level_to_level_filter(LogLevel::Off), LevelFilter::OFF);
        assert_eq!(log_level_to_level_filter(LogLevel::Warn), LevelFilter::WARN);
        assert_eq!(
            log_level_to_level_filter(LogLevel::default()),
            LevelFilter::WARN
        );
        assert_eq!(log_level_to_level_filter(LogLevel::Trace), LevelFilter::TRACE);
    }
}
