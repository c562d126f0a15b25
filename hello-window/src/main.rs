use backend::bootstrap;
use backend::config::WindowConfig;
use backend::error::BootstrapError;
use backend::logging::{init_logging, LoggingConfig};
use backend::system::SdlBackend;

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        eprintln!("{e}");
        log::debug!("bootstrap failed: {e:?}");
        std::process::exit(e.exit_code());
    }
}

// Everything SDL owns is dropped before `main` decides the exit status.
fn run() -> Result<(), BootstrapError> {
    let config = WindowConfig::default();
    let backend = SdlBackend::init()?;
    bootstrap::run(backend, &config)?;
    Ok(())
}
