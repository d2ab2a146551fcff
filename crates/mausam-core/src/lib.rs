pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, RetrySettings, ValidationResult, WeatherConfig};
pub use error::{AppError, NetworkError, ReqwestErrorExt, WeatherError};
pub use logging::Verbosity;

use anyhow::Result;

/// Initialize logging for the process
pub fn init(verbosity: Verbosity) -> Result<()> {
    logging::init_logging(verbosity)?;
    tracing::debug!("Mausam core initialized");
    Ok(())
}
