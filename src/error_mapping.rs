use mausam_core::{AppError, NetworkError, ReqwestErrorExt, WeatherError};
use mausam_weather::WeatherError as LookupError;

/// Lift a lookup failure into the application error hierarchy.
pub fn app_error(e: LookupError) -> AppError {
    match e {
        LookupError::EmptyCity => AppError::Weather(WeatherError::EmptyCity),
        LookupError::CityNotFound(city) => AppError::Weather(WeatherError::CityNotFound(city)),
        LookupError::Network(e) => AppError::Network(e.into_network_error()),
        LookupError::Status { endpoint, status } => AppError::Network(NetworkError::ServerError {
            status,
            message: format!("{} request failed", endpoint),
        }),
        LookupError::Parse(msg) => AppError::Network(NetworkError::InvalidResponse(msg)),
    }
}
