use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::{
    configuration::{LogFormat, LoggerSettings},
    errors::Error,
    Result,
};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level. When a file sink is configured
/// the returned guard must be kept alive for the lifetime of the process,
/// dropping it stops the background writer.
pub fn init(config: &LoggerSettings) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| Error::Message(format!("invalid log level `{}`: {}", config.level, e)))?;

    // console layer for tracing-subscriber
    let (json, pretty, compact) = match config.format {
        LogFormat::Json => (
            Some(fmt::Layer::new().with_span_events(FmtSpan::CLOSE).json()),
            None,
            None,
        ),
        LogFormat::Pretty => (None, Some(fmt::Layer::new().pretty()), None),
        LogFormat::Compact => (None, None, Some(fmt::Layer::new().compact())),
    };

    // file appender layer for tracing-subscriber
    let (file, guard) = match &config.file {
        Some(file) => {
            let file_appender = tracing_appender::rolling::daily(&file.directory, &file.prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .json();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .with(compact)
        .with(file)
        .try_init()
        .map_err(|e| Error::Message(format!("failed to install tracing subscriber: {}", e)))?;

    Ok(guard)
}
