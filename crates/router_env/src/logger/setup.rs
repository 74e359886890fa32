//!
//! Setup logging subsystem.
//!

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use super::config;
use crate::Level;

/// Holds the non-blocking writer guards; logs are flushed until it is dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

///
/// Setup logging sub-system specifying.
/// Expects config and list of names of crates to watch.
///
/// `RUST_LOG`, when set, overrides the console filter built from the config.
///
pub fn setup<Str: AsRef<str>>(
    conf: &config::Log,
    service_name: &str,
    crates_to_watch: Vec<Str>,
) -> Result<TelemetryGuard, tracing_subscriber::util::TryInitError> {
    let mut guards = Vec::new();
    let mut layers: Vec<BoxedLayer> = Vec::new();
    let crates_to_watch = crates_to_watch
        .iter()
        .map(|krate| krate.as_ref().to_owned())
        .collect::<Vec<_>>();

    if conf.file.enabled {
        let mut path = crate::env::workspace_path();
        path.push(&conf.file.path);

        let file_appender = tracing_appender::rolling::hourly(&path, &conf.file.file_name);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
        guards.push(guard);

        let file_filter = get_envfilter(
            conf.file.filtering_directive.as_deref(),
            conf.file.level.into_level(),
            &crates_to_watch,
        );
        layers.push(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(file_writer)
                .with_filter(file_filter)
                .boxed(),
        );
    }

    if conf.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            get_envfilter(
                conf.console.filtering_directive.as_deref(),
                conf.console.level.into_level(),
                &crates_to_watch,
            )
        });

        let logging_layer = match conf.console.log_format {
            config::LogFormat::Default => fmt::layer()
                .with_span_events(fmt::format::FmtSpan::ACTIVE)
                .pretty()
                .with_writer(console_writer)
                .with_filter(console_filter)
                .boxed(),
            config::LogFormat::Json => fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(console_writer)
                .with_filter(console_filter)
                .boxed(),
        };
        layers.push(logging_layer);
    }

    tracing_subscriber::registry().with(layers).try_init()?;

    tracing::debug!(service = service_name, "logger initialised");

    // Returning the WorkerGuard for logs to be printed until it is dropped
    Ok(TelemetryGuard {
        _log_guards: guards,
    })
}

#[allow(clippy::print_stderr)]
fn get_envfilter(
    filtering_directive: Option<&str>,
    default_log_level: Level,
    crates_to_filter: &[String],
) -> EnvFilter {
    filtering_directive
        .and_then(|directive| {
            EnvFilter::try_new(directive)
                .map_err(|error| eprintln!("Invalid filtering directive {directive:?}: {error}"))
                .ok()
        })
        .unwrap_or_else(|| {
            let level = default_log_level.as_str().to_ascii_lowercase();

            crates_to_filter
                .iter()
                .filter_map(|krate| format!("{krate}={level}").parse().ok())
                .fold(
                    EnvFilter::default().add_directive(Level::WARN.into()),
                    |filter, directive| filter.add_directive(directive),
                )
        })
}
