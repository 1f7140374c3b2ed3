use std::{
    collections::HashMap,
    env,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_ENVIRONMENT: &str = "test";
pub const DEFAULT_CONFIG_FILE: &str = "config.properties";
pub const CONFIG_PATH_VARIABLE: &str = "RESTCHECK_CONFIG";

const BASE_URL_KEY: &str = "base.url";
const TIMEOUT_KEY: &str = "default.timeout";
const ENVIRONMENT_KEY: &str = "environment";
const LOG_REQUESTS_KEY: &str = "log.requests";
const LOG_RESPONSES_KEY: &str = "log.responses";

/// Settings shared by every request a context sends.
///
/// A configuration never fails to load: a missing or malformed properties source
/// leaves every value at its default.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    properties: HashMap<String, String>,
    base_url: String,
    timeout_ms: u64,
    environment: String,
    log_requests: bool,
    log_responses: bool,
}

impl Configuration {
    /// Loads the file named by `RESTCHECK_CONFIG`, or `config.properties` in the working
    /// directory.
    pub fn load() -> Self {
        let path = env::var_os(CONFIG_PATH_VARIABLE)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Self::from_path(path)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.is_file() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Self::default();
        }

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "couldn't read configuration, using defaults");
                return Self::default();
            }
        };

        match java_properties::read(BufReader::new(file)) {
            Ok(properties) => {
                debug!(path = %path.display(), entries = properties.len(), "configuration loaded");
                Self::from_properties(properties)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed configuration, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_properties<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let properties = properties
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<HashMap<String, String>>();

        let base_url = lookup(&properties, BASE_URL_KEY, DEFAULT_BASE_URL).to_owned();
        let environment = lookup(&properties, ENVIRONMENT_KEY, DEFAULT_ENVIRONMENT).to_owned();
        let timeout_ms = parse_or(&properties, TIMEOUT_KEY, DEFAULT_TIMEOUT_MS, |v| {
            v.parse::<u64>().ok()
        });
        let log_requests = parse_or(&properties, LOG_REQUESTS_KEY, true, parse_flag);
        let log_responses = parse_or(&properties, LOG_RESPONSES_KEY, true, parse_flag);

        Self {
            properties,
            base_url,
            timeout_ms,
            environment,
            log_requests,
            log_responses,
        }
    }

    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new(Self::default())
    }

    /// Raw property lookup.
    pub fn get<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        lookup(&self.properties, key, default)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request timeout in milliseconds.
    pub fn default_timeout(&self) -> u64 {
        self.timeout_ms
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn should_log_requests(&self) -> bool {
        self.log_requests
    }

    pub fn should_log_responses(&self) -> bool {
        self.log_responses
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::from_properties(Vec::<(String, String)>::new())
    }
}

/// Builder used to override individual values of a Configuration.
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    configuration: Configuration,
}

impl ConfigurationBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.configuration.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.configuration.timeout_ms = timeout_ms;
        self
    }

    pub fn with_environment<S: Into<String>>(mut self, environment: S) -> Self {
        self.configuration.environment = environment.into();
        self
    }

    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.configuration.log_requests = enabled;
        self
    }

    pub fn with_response_logging(mut self, enabled: bool) -> Self {
        self.configuration.log_responses = enabled;
        self
    }

    pub fn build(self) -> Configuration {
        self.configuration
    }
}

fn lookup<'a>(properties: &'a HashMap<String, String>, key: &str, default: &'a str) -> &'a str {
    properties.get(key).map(String::as_str).unwrap_or(default)
}

fn parse_or<T, F>(properties: &HashMap<String, String>, key: &str, default: T, parse: F) -> T
where
    F: FnOnce(&str) -> Option<T>,
{
    match properties.get(key) {
        Some(raw) => parse(raw.trim()).unwrap_or_else(|| {
            warn!(key, value = %raw, "unparseable configuration value, using default");
            default
        }),
        None => default,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
