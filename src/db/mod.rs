use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Handle on the PostgREST data API. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct Database {
    client: Client,
    rest_url: String,
    api_key: SecretString,
}

impl Database {
    /// Builds the HTTP client. Nothing is sent until the first query.
    pub fn connect(config: &Config) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.data_store_timeout_secs);
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| AppError::ConfigError(format!("failed to build data store client: {}", e)))?;

        let rest_url = format!("{}/rest/v1", config.supabase_url.trim_end_matches('/'));
        log::info!("Data store client configured for {}", rest_url);

        Ok(Self {
            client,
            rest_url,
            api_key: config.supabase_key.clone(),
        })
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    /// Starts an authenticated `GET` against a table.
    pub fn select(&self, table: &str) -> RequestBuilder {
        let key = self.api_key.expose_secret();
        self.client
            .get(self.table_url(table))
            .header("apikey", key)
            .bearer_auth(key)
    }
}
