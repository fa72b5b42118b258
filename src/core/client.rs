use crate::core::errors::{Error, Result};
use crate::core::inventory::Inventory;
use log::{info, warn};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::{thread, time};

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ quickly retrieves and parses the fabric inventory using
/// the default client configuration. Returns a boxed [Inventory] object that allows you to
/// quickly query (filter, count, etc.) the fabric resource collections.
///
/// ```no_run
/// # fn main() -> netfabric::Result<()> {
/// // Get the fabric inventory
/// let inventory = netfabric::get_inventory()?;
///
/// // Filter the connections
/// let criteria = vec![netfabric::FilterCriterion::new(
///     "Location.Title",
///     ["Raleigh", "Seattle"],
/// )];
/// let connections = inventory.filter_connections(&criteria)?;
/// # Ok(())
/// # }
/// ```
pub fn get_inventory() -> Result<Box<Inventory>> {
    Client::new().get_inventory()
}

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct that allows you to customize the client configuration.
/// The [ClientBuilder] struct provides setters for each configuration value and a
/// [ClientBuilder::build] method to create a [Client] instance.
///
/// ```
/// let client = netfabric::ClientBuilder::new()
///     .url("https://api.netfabric.io/inventory.json")
///     .cache_file("/tmp/inventory.json")
///     .cache_time(60 * 60) // 1 hour
///     .retry_count(4)
///     .retry_initial_delay(200) // 200 ms
///     .retry_backoff_factor(2)
///     .retry_timeout(5000) // 5 seconds
///     .build();
/// ```
///
/// The [ClientBuilder::new] method attempts to source configuration values from environment
/// variables when set and uses default values when the environment variables are not set.
///
/// If you want to use the default configuration values, ignoring any environment variables,
/// use the [ClientBuilder::default] method to create a new [ClientBuilder] instance.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    url: String,
    cache_file: PathBuf,
    cache_time: u64,
    retry_count: u32,
    retry_initial_delay: u64,
    retry_backoff_factor: u64,
    retry_timeout: u64,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ClientBuilder {
    /// Create a new [ClientBuilder] with default configuration values.
    ///
    /// ```
    /// let client = netfabric::ClientBuilder::default().build();
    ///
    /// assert_eq!(client.url(), "https://api.netfabric.io/inventory.json");
    /// assert_eq!(client.cache_file(), dirs::home_dir().unwrap().join(".netfabric").join("inventory.json"));
    /// assert_eq!(client.cache_time(), 86400);
    /// assert_eq!(client.retry_count(), 4);
    /// assert_eq!(client.retry_initial_delay(), 200);
    /// assert_eq!(client.retry_backoff_factor(), 2);
    /// assert_eq!(client.retry_timeout(), 5000);
    /// ```
    fn default() -> Self {
        Self {
            url: "https://api.netfabric.io/inventory.json".to_string(),
            cache_file: dirs::home_dir()
                .unwrap()
                .join(".netfabric")
                .join("inventory.json"), // ${HOME}/.netfabric/inventory.json
            cache_time: 24 * 60 * 60, // 24 hours
            retry_count: 4,
            retry_initial_delay: 200, // 200 ms
            retry_backoff_factor: 2,
            retry_timeout: 5000, // 5 seconds
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
    /// - `NETFABRIC_URL`
    /// - `NETFABRIC_CACHE_FILE`
    /// - `NETFABRIC_CACHE_TIME`
    /// - `NETFABRIC_RETRY_COUNT`
    /// - `NETFABRIC_RETRY_INITIAL_DELAY`
    /// - `NETFABRIC_RETRY_BACKOFF_FACTOR`
    /// - `NETFABRIC_RETRY_TIMEOUT`
    pub fn new() -> Self {
        let default = ClientBuilder::default();

        Self {
            url: get_env_var("NETFABRIC_URL", default.url),
            cache_file: get_env_var("NETFABRIC_CACHE_FILE", default.cache_file),
            cache_time: get_env_var("NETFABRIC_CACHE_TIME", default.cache_time),
            retry_count: get_env_var("NETFABRIC_RETRY_COUNT", default.retry_count),
            retry_initial_delay: get_env_var(
                "NETFABRIC_RETRY_INITIAL_DELAY",
                default.retry_initial_delay,
            ),
            retry_backoff_factor: get_env_var(
                "NETFABRIC_RETRY_BACKOFF_FACTOR",
                default.retry_backoff_factor,
            ),
            retry_timeout: get_env_var("NETFABRIC_RETRY_TIMEOUT", default.retry_timeout),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the URL used to retrieve the fabric inventory snapshot; defaults to
    /// `https://api.netfabric.io/inventory.json`.
    pub fn url<'s>(&'s mut self, url: &str) -> &'s mut Self {
        self.url = url.to_string();
        self
    }

    /// Set the file path used to cache the inventory JSON data; defaults to
    /// `${HOME}/.netfabric/inventory.json`.
    pub fn cache_file<P: AsRef<Path>>(&mut self, cache_file: P) -> &mut Self {
        self.cache_file = cache_file.as_ref().to_path_buf();
        self
    }

    /// Set the cache-time duration - the amount of time (in seconds) the
    /// locally cached inventory JSON is considered fresh; defaults to 24 hours
    /// (`86400` seconds). When the elapsed time (the difference between the
    /// current system time and cache file's modified timestamp) is greater
    /// than the configured `cache_time`, calls to `get_inventory()` will
    /// attempt to refresh the cached JSON from the inventory URL.
    pub fn cache_time(&mut self, cache_time: u64) -> &mut Self {
        self.cache_time = cache_time;
        self
    }

    /// Set the number of retry attempts to retrieve the inventory JSON data
    /// from the URL; defaults to `4` attempts.
    pub fn retry_count(&mut self, retry_count: u32) -> &mut Self {
        self.retry_count = retry_count;
        self
    }

    /// Set the initial delay (in milliseconds) between retry attempts to
    /// retrieve the inventory JSON from the URL; defaults to `200`
    /// milliseconds.
    ///
    /// The delay between retry attempts is calculated as:
    /// `retry_initial_delay * (retry_backoff_factor ^ attempt)`.
    pub fn retry_initial_delay(&mut self, retry_initial_delay: u64) -> &mut Self {
        self.retry_initial_delay = retry_initial_delay;
        self
    }

    /// Set the backoff factor used to increase the delay between retry
    /// attempts to retrieve the inventory JSON from the URL; defaults to `2`.
    ///
    /// The delay between retry attempts is calculated as:
    /// `retry_initial_delay * (retry_backoff_factor ^ attempt)`.
    pub fn retry_backoff_factor(&mut self, retry_backoff_factor: u64) -> &mut Self {
        self.retry_backoff_factor = retry_backoff_factor;
        self
    }

    /// Set the maximum time (in milliseconds) to wait for the inventory JSON
    /// to be retrieved from the URL; defaults to `5000` milliseconds
    /// (5 seconds).
    pub fn retry_timeout(&mut self, retry_timeout: u64) -> &mut Self {
        self.retry_timeout = retry_timeout;
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Client {
        Client {
            url: self.url.clone(),
            cache_file: self.cache_file.clone(),
            cache_time: self.cache_time,
            retry_count: self.retry_count,
            retry_initial_delay: self.retry_initial_delay,
            retry_backoff_factor: self.retry_backoff_factor,
            retry_timeout: self.retry_timeout,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A client for retrieving the fabric inventory from the cached JSON file, when available
/// and fresh, or from the URL when the cache is stale or unavailable. Client implements a
/// simple exponential-backoff retry mechanism to retrieve the JSON from the URL.
///
/// The [Client::new] method attempts to source configuration values from environment
/// variables when set and uses default values when the environment variables are not set.
///
/// If you want to use the default configuration values, ignoring any environment
/// variables, use the [Client::default] method to create a new [Client] instance.
///
/// ```no_run
/// # fn main() -> netfabric::Result<()> {
/// let client = netfabric::Client::new();
/// let inventory = client.get_inventory()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    cache_file: PathBuf,
    cache_time: u64,
    retry_count: u32,
    retry_initial_delay: u64,
    retry_backoff_factor: u64,
    retry_timeout: u64,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Default for Client {
    /// Create a new [Client] with default configuration values.
    ///
    /// ```
    /// let client = netfabric::Client::default();
    ///
    /// assert_eq!(client.url(), "https://api.netfabric.io/inventory.json");
    /// assert_eq!(client.cache_file(), dirs::home_dir().unwrap().join(".netfabric").join("inventory.json"));
    /// assert_eq!(client.cache_time(), 86400);
    /// ```
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

    /// Get the URL used to retrieve the fabric inventory snapshot.
    /// Defaults to `https://api.netfabric.io/inventory.json`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the file path used to cache the inventory JSON.
    /// Defaults to `${HOME}/.netfabric/inventory.json`.
    pub fn cache_file(&self) -> &Path {
        &self.cache_file
    }

    /// Get the cache-time duration - the amount of time (in seconds) the
    /// locally cached inventory JSON is considered fresh.
    /// Defaults to 24 hours (86400 seconds).
    pub fn cache_time(&self) -> u64 {
        self.cache_time
    }

    /// Get the number of retry attempts to retrieve the inventory JSON data
    /// from the URL. Defaults to 4 attempts.
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// Get the initial delay (in milliseconds) between retry attempts to
    /// retrieve the inventory JSON from the URL. Defaults to 200 milliseconds.
    pub fn retry_initial_delay(&self) -> u64 {
        self.retry_initial_delay
    }

    /// Get the backoff factor used to increase the delay between retry
    /// attempts to retrieve the inventory JSON from the URL. Defaults to 2.
    pub fn retry_backoff_factor(&self) -> u64 {
        self.retry_backoff_factor
    }

    /// Get the maximum time (in milliseconds) to wait for the inventory JSON
    /// to be retrieved from the URL. Defaults to 5000 milliseconds (5 seconds).
    pub fn retry_timeout(&self) -> u64 {
        self.retry_timeout
    }

    /*-------------------------------------------------------------------------
      Get Inventory
    -------------------------------------------------------------------------*/

    /// Retrieves, parses, and returns a boxed [Inventory] object. Uses locally
    /// cached JSON, when available and fresh. Requests the inventory JSON from
    /// the URL when the local cache is stale or unavailable.
    pub fn get_inventory(&self) -> Result<Box<Inventory>> {
        let json = self.get_json()?;
        Inventory::from_json(&json)
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    /// Get the inventory JSON from the cache file or URL.
    fn get_json(&self) -> Result<String> {
        info!("Cache time {} seconds", self.cache_time);
        info!("Cache file path: {:?}", &self.cache_file);

        // Check if cache file exists
        let cache_exists = fs::metadata(&self.cache_file).is_ok();
        if cache_exists {
            info!("Cache file exists");
        } else {
            info!("Cache file not found");
        };

        // Check if cache file is fresh
        let cache_is_fresh = cache_exists
            && fs::metadata(&self.cache_file)?
                .modified()?
                .elapsed()?
                .as_secs()
                <= self.cache_time;
        if cache_is_fresh {
            info!("Cache file is fresh");
        } else {
            info!("Cache file is stale; refresh cache");
        };

        // Fresh cached JSON
        if cache_is_fresh {
            let fresh_cached_json = self.get_json_from_file();
            if fresh_cached_json.is_ok() {
                return fresh_cached_json;
            }
        };

        // Fresh URL JSON
        let fresh_url_json = self.get_json_from_url();
        if let Ok(fresh_url_json) = fresh_url_json {
            let _ = self.cache_json_to_file(&fresh_url_json);
            return Ok(fresh_url_json);
        };
        let url_result = fresh_url_json;

        // Stale cached JSON
        if cache_exists && !cache_is_fresh {
            let stale_cache_json = self.get_json_from_file();
            if stale_cache_json.is_ok() {
                return stale_cache_json;
            }
        };

        // Return result (Err) retrieving inventory JSON from URL
        url_result
    }

    /// Get the inventory JSON from the URL.
    fn get_json_from_url(&self) -> Result<String> {
        let start_time = time::Instant::now();
        let max_elapsed_time = time::Duration::from_millis(self.retry_timeout);

        let mut attempt: u32 = 0;
        loop {
            info!(
                "Get fabric inventory from URL; Attempt {}: GET {}",
                attempt, self.url
            );
            let json: Result<String> = reqwest::blocking::get(&self.url)
                .map_err(Error::from)
                .and_then(|response| response.text().map_err(Error::from))
                .and_then(validate_json);

            match json {
                Ok(json) => {
                    info!("Get fabric inventory from URL; Attempt {}: Ok", attempt);
                    break Ok(json);
                }
                Err(error) => {
                    log::error!(
                        "Get fabric inventory from URL; Attempt {}: FAILED: {}",
                        attempt,
                        error
                    );

                    let delay = time::Duration::from_millis(
                        self.retry_initial_delay * (self.retry_backoff_factor.pow(attempt)),
                    );

                    attempt += 1;

                    if (start_time.elapsed() + delay < max_elapsed_time)
                        && (attempt < self.retry_count)
                    {
                        thread::sleep(delay);
                        continue;
                    } else {
                        break Err(error);
                    }
                }
            }
        }
    }

    /// Write the inventory JSON to the cache file.
    fn cache_json_to_file(&self, json: &str) -> Result<()> {
        // Ensure parent directories exist
        self.cache_file.parent().map(fs::create_dir_all);

        fs::write(&self.cache_file, json)
            .inspect(|_| {
                info!(
                    "Successfully cached fabric inventory to: {:?}",
                    &self.cache_file
                )
            })
            .map_err(Error::from)
            .inspect_err(|error| {
                log::error!(
                    "Failed to cache fabric inventory to `{:?}`: {}",
                    &self.cache_file,
                    error
                )
            })
    }

    /// Get the inventory JSON from the cache file.
    fn get_json_from_file(&self) -> Result<String> {
        fs::read_to_string(&self.cache_file)
            .map_err(Error::from)
            .and_then(validate_json)
            .inspect(|_| {
                info!(
                    "Successfully read fabric inventory JSON from: {:?}",
                    &self.cache_file
                )
            })
            .inspect_err(|error| {
                log::error!(
                    "Failed to read fabric inventory JSON from `{:?}`: {}",
                    &self.cache_file,
                    error
                )
            })
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

/// Validate a string contains parsable JSON.
fn validate_json(json: String) -> Result<String> {
    serde_json::from_str::<serde::de::IgnoredAny>(&json)
        .and(Ok(json))
        .or(Err("Invalid JSON".into()))
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
