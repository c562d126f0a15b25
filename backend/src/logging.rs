use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g. "debug" or
/// "backend=debug,hello_window=info", and takes precedence over `RUST_LOG`.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

pub const DEFAULT_FILTER: &str = "info";

static INIT: Once = Once::new();

fn builder(config: LoggingConfig) -> env_logger::Builder {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(filter) = &config.env_filter {
        builder.parse_filters(filter);
    }
    builder.write_style(config.write_style);
    builder
}

/// Installs the global logger; later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        builder(config).init();
        log::debug!("logger ready");
    });
}
