//! Snapshot of environment variables read by the resolver.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

/// Selects the preset (`NODE_ENV` wins over `APP_ENV`).
pub const NODE_ENV: &str = "NODE_ENV";
pub const APP_ENV: &str = "APP_ENV";

pub const PORT: &str = "PORT";
pub const HOST: &str = "HOST";

pub const STOCK_API_KEY: &str = "STOCK_API_KEY";
/// Legacy name for the stock key, consulted when `STOCK_API_KEY` is unset.
pub const POLYGON_API_KEY: &str = "POLYGON_API_KEY";
pub const STOCK_API_URL: &str = "STOCK_API_URL";
pub const API_TIMEOUT: &str = "API_TIMEOUT";

pub const LOG_LEVEL: &str = "LOG_LEVEL";

pub const CACHE_ENABLED: &str = "CACHE_ENABLED";
pub const ENABLE_CACHE: &str = "ENABLE_CACHE";
pub const CACHE_TTL: &str = "CACHE_TTL";

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_TIMEOUT: &str = "OPENAI_TIMEOUT";
pub const OPENAI_MAX_RETRIES: &str = "OPENAI_MAX_RETRIES";

/// Owned name/value map of environment variables.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Capture the current process environment.
    ///
    /// Entries whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Build a snapshot from arbitrary name/value pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Add pairs for names not already present. Existing values are kept.
    pub fn merge_missing<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in vars {
            self.vars.entry(k.into()).or_insert_with(|| v.into());
        }
    }

    /// Returns the value of `name` if it is set and not blank.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Returns the first non-blank value among `names`, in order.
    pub fn first_of(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.get(name))
    }

    /// String override: the variable's value, or `default`.
    pub(crate) fn string_or(&self, names: &[&str], default: String) -> String {
        self.first_of(names).map(str::to_string).unwrap_or(default)
    }

    /// Flag override: `true` only for the exact string "true".
    pub(crate) fn flag_or(&self, names: &[&str], default: bool) -> bool {
        self.first_of(names).map(|v| v == "true").unwrap_or(default)
    }

    /// Numeric override. Malformed or out-of-range input keeps `default` and
    /// appends a notice to `fallbacks`.
    pub(crate) fn number_or<T>(&self, name: &str, default: T, fallbacks: &mut Vec<String>) -> T
    where
        T: FromStr + Copy + fmt::Display,
    {
        let Some(raw) = self.get(name) else {
            return default;
        };

        match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                debug!(var = name, value = raw, fallback = %default, "invalid number, using default");
                fallbacks.push(format!(
                    "{} has invalid value {:?}, using default {}",
                    name, raw, default
                ));
                default
            }
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Lists variable names only; values may hold credentials.
impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.vars.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Env").field("vars", &names).finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_vars(iter)
    }
}
