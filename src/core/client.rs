use crate::core::address_feed::AddressFeed;
use crate::core::errors::{Error, Result};
use log::{debug, info, warn};
use std::env;
use std::time;

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ retrieves and decodes the Zscaler address feed using the
/// default client configuration.
///
/// ```no_run
/// let feed = zscaler_address_tool::get_feed().unwrap();
///
/// for block in &feed.entries {
///     println!("{} ({} IPs)", block.date_added, block.ips.len());
/// }
/// ```
pub fn get_feed() -> Result<AddressFeed> {
    Client::new().get_feed()
}

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct that allows you to customize the client configuration.
///
/// ```
/// let client = zscaler_address_tool::ClientBuilder::new()
///     .url("https://api.config.zscaler.com/zscaler.net/zpa/json")
///     .timeout(10_000) // 10 seconds
///     .build();
/// ```
///
/// The [ClientBuilder::new] method attempts to source configuration values from environment
/// variables when set and uses default values when the environment variables are not set.
///
/// If you want to use the default configuration values, ignoring any environment variables, use
/// the [ClientBuilder::default] method to create a new [ClientBuilder] instance.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    url: String,
    timeout: u64,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ClientBuilder {
    /// Create a new [ClientBuilder] with default configuration values.
    ///
    /// ```
    /// let client = zscaler_address_tool::ClientBuilder::default().build();
    ///
    /// assert_eq!(client.url(), "https://api.config.zscaler.com/zscaler.net/zpa/json");
    /// assert_eq!(client.timeout(), 30000);
    /// ```
    fn default() -> Self {
        Self {
            url: "https://api.config.zscaler.com/zscaler.net/zpa/json".to_string(),
            timeout: 30_000, // 30 seconds
        }
    }
}

impl ClientBuilder {
    /// Create a new [ClientBuilder] reading initial configuration values from
    /// environment variables when set and default values when the environment
    /// variables are not set.
    ///
    /// The environment variables used to set the initial configuration values
    /// are:
    /// - `ZSCALER_ADDRESS_TOOL_URL`
    /// - `ZSCALER_ADDRESS_TOOL_TIMEOUT`
    pub fn new() -> Self {
        let default = ClientBuilder::default();

        Self {
            url: get_env_var("ZSCALER_ADDRESS_TOOL_URL", default.url),
            timeout: get_env_var("ZSCALER_ADDRESS_TOOL_TIMEOUT", default.timeout),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the URL of the Zscaler address feed; defaults to
    /// `https://api.config.zscaler.com/zscaler.net/zpa/json`.
    pub fn url<'s>(&'s mut self, url: &str) -> &'s mut Self {
        self.url = url.to_string();
        self
    }

    /// Set the maximum time (in milliseconds) to wait for the address feed
    /// request to complete; defaults to `30000` milliseconds (30 seconds).
    pub fn timeout(&mut self, timeout: u64) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Client {
        Client {
            url: self.url.clone(),
            timeout: self.timeout,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A client for retrieving the Zscaler address feed with a single, time-bounded GET request.
///
/// ```no_run
/// let client = zscaler_address_tool::Client::new();
/// let feed = client.get_feed().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    timeout: u64,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Default for Client {
    /// Create a new [Client] with default configuration values.
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// Get the URL of the Zscaler address feed.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the request timeout in milliseconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /*-------------------------------------------------------------------------
      Get Feed
    -------------------------------------------------------------------------*/

    /// Retrieve and decode the address feed.
    pub fn get_feed(&self) -> Result<AddressFeed> {
        let json = self.get_json()?;
        AddressFeed::from_json(&json)
    }

    /// Retrieve the raw address feed bytes from the URL. Connection failures,
    /// timeouts, and non-success HTTP statuses are returned as
    /// [Error::Network].
    pub fn get_json(&self) -> Result<Vec<u8>> {
        info!("Get Zscaler address feed: GET {}", self.url);
        let start_time = time::Instant::now();

        reqwest::blocking::Client::builder()
            .timeout(time::Duration::from_millis(self.timeout))
            .build()
            .and_then(|client| client.get(&self.url).send())
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes())
            .map(|bytes| bytes.to_vec())
            .map_err(Error::from)
            .inspect(|json| {
                info!(
                    "Get Zscaler address feed: Ok; {} bytes in {} ms",
                    json.len(),
                    start_time.elapsed().as_millis()
                )
            })
            .inspect_err(|error| debug!("Get Zscaler address feed: FAILED: {}", error))
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::log_error;
    use env::VarError;
    use test_log::test;

    /*-------------------------------------------------------------------------
      Test Environment Variable Configuration
    -------------------------------------------------------------------------*/

    /// ENV_VAR: ZSCALER_ADDRESS_TOOL_URL
    /// ENV_VAR: ZSCALER_ADDRESS_TOOL_TIMEOUT
    #[test]
    fn test_environment_variable_configuration() {
        let test_env_vars = [
            ("ZSCALER_ADDRESS_TOOL_URL", "https://my-zscaler-feed.com/zpa/json"),
            ("ZSCALER_ADDRESS_TOOL_TIMEOUT", "1500"),
        ];

        let default = Client::default();

        // Store environment variable values
        let stored_env_vars: Vec<(String, std::result::Result<std::string::String, VarError>)> =
            test_env_vars
                .iter()
                .map(|(env_var, _)| (env_var.to_string(), env::var(env_var)))
                .collect();

        // Unset all environment variables
        test_env_vars.iter().for_each(|(env_var, _)| unsafe {
            std::env::remove_var(env_var);
        });

        // Test default cases
        let new = Client::new();
        assert_eq!(new.url(), default.url());
        assert_eq!(new.timeout(), default.timeout());

        // Set all environment variables
        for (env_var, value) in test_env_vars.iter() {
            unsafe { std::env::set_var(env_var, value) };
        }

        // Test environment variable configuration
        let env_config = Client::new();
        assert_eq!(env_config.url(), "https://my-zscaler-feed.com/zpa/json");
        assert_eq!(env_config.timeout(), 1500);

        // Invalid values fall back to the default
        unsafe { std::env::set_var("ZSCALER_ADDRESS_TOOL_TIMEOUT", "soon") };
        assert_eq!(Client::new().timeout(), default.timeout());

        // Reset environment variables
        for (env_var, value) in stored_env_vars {
            match value {
                Ok(value) => unsafe { std::env::set_var(env_var, value) },
                Err(VarError::NotPresent) => unsafe { std::env::remove_var(env_var) },
                Err(VarError::NotUnicode(value)) => unsafe { std::env::set_var(env_var, value) },
            }
        }
    }

    /*-------------------------------------------------------------------------
      Test Getter and Setter Methods
    -------------------------------------------------------------------------*/

    #[test]
    fn test_getter_and_setter_methods() {
        let client = ClientBuilder::default()
            .url("https://my-zscaler-feed.com/zpa/json")
            .timeout(1000)
            .build();

        assert_eq!(client.url(), "https://my-zscaler-feed.com/zpa/json");
        assert_eq!(client.timeout(), 1000);
    }

    /*-------------------------------------------------------------------------
      Test Network Failure
    -------------------------------------------------------------------------*/

    /// Nothing listens on the discard port of the loopback interface.
    #[test]
    fn test_get_json_connection_refused() {
        let client = ClientBuilder::default()
            .url("http://127.0.0.1:9/zpa/json")
            .timeout(2000)
            .build();

        let result = client.get_feed().inspect_err(log_error);
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[test]
    fn test_get_json_invalid_url() {
        let client = ClientBuilder::default().url("not a url").build();

        let result = client.get_json();
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
