use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub amadeus: AmadeusConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Upstream endpoints and credentials. The currency code is fixed per
/// deployment; every offer search is priced in it.
#[derive(Debug, Deserialize, Clone)]
pub struct AmadeusConfig {
    pub auth_url: String,
    pub flight_offers_url: String,
    pub create_order_url: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_currency")]
    pub currency_code: String,
}

fn default_currency() -> String {
    "AUD".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file (optional)
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file for credentials;
            // this file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of SKYBOOK)
            // Eg.. `SKYBOOK_AMADEUS__CLIENT_ID=...` would set `amadeus.client_id`
            .add_source(config::Environment::with_prefix("SKYBOOK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
