use std::{env, path::PathBuf, str::FromStr};

use rust_decimal::Decimal;

pub const DEFAULT_CATALOG_URL: &str = "https://api.rawg.io/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub catalog_base_url: String,
    pub catalog_api_key: Option<String>,
    pub local_storage_dir: PathBuf,
    pub tax_rate: Decimal,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let catalog_base_url =
            env::var("CATALOG_BASE_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        let catalog_api_key = env::var("RAWG_API_KEY").ok().filter(|key| !key.is_empty());
        let local_storage_dir = env::var("LOCAL_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data/local"));
        let tax_rate = match env::var("TAX_RATE") {
            Ok(raw) => Decimal::from_str(raw.trim())
                .map_err(|e| anyhow::anyhow!("invalid TAX_RATE {raw:?}: {e}"))?,
            Err(_) => default_tax_rate(),
        };

        Ok(Self {
            database_url,
            host,
            port,
            catalog_base_url,
            catalog_api_key,
            local_storage_dir,
            tax_rate,
        })
    }
}

/// 21% VAT, as charged on the checkout summary.
pub fn default_tax_rate() -> Decimal {
    Decimal::new(21, 2)
}
