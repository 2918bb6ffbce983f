pub mod amadeus;
pub mod app_config;
pub mod error;

pub use amadeus::AmadeusClient;
pub use app_config::{AmadeusConfig, Config};
pub use error::ClientError;
