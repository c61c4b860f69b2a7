//! Store configuration.
//!
//! Loaded from environment variables with sensible defaults, or built
//! explicitly with the `with_*` methods.

use std::env;

/// Default capacity of the action broadcast channel
pub const DEFAULT_BROADCAST_CAPACITY: usize = 16;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use slicekit_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_broadcast_capacity(64)
///     .with_action_logging(false);
///
/// assert_eq!(config.broadcast_capacity, 64);
/// assert!(!config.action_logging);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of applied actions buffered for slow subscribers
    pub broadcast_capacity: usize,
    /// Install the action logger middleware (disabled in production)
    pub action_logging: bool,
}

impl StoreConfig {
    /// Loads configuration from the process environment
    ///
    /// - `APP_ENV`: `production` turns action logging off
    /// - `STORE_BROADCAST_CAPACITY`: positive integer, defaults to 16
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    ///
    /// Unparseable or zero capacities fall back to the default.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let production = lookup("APP_ENV")
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("production"));

        Self {
            broadcast_capacity: lookup("STORE_BROADCAST_CAPACITY")
                .and_then(|s| s.trim().parse().ok())
                .filter(|capacity: &usize| *capacity > 0)
                .unwrap_or(DEFAULT_BROADCAST_CAPACITY),
            action_logging: !production,
        }
    }

    /// Set the broadcast capacity (clamped to at least 1)
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Enable or disable the action logger
    #[must_use]
    pub const fn with_action_logging(mut self, enabled: bool) -> Self {
        self.action_logging = enabled;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
            action_logging: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(StoreConfig::from_lookup(lookup(&[])), StoreConfig::default());
    }

    #[test]
    fn production_disables_action_logging() {
        let config = StoreConfig::from_lookup(lookup(&[("APP_ENV", "Production")]));
        assert!(!config.action_logging);

        let config = StoreConfig::from_lookup(lookup(&[("APP_ENV", "development")]));
        assert!(config.action_logging);
    }

    #[test]
    fn invalid_capacity_falls_back() {
        for raw in ["0", "-3", "lots", ""] {
            let config = StoreConfig::from_lookup(lookup(&[("STORE_BROADCAST_CAPACITY", raw)]));
            assert_eq!(config.broadcast_capacity, DEFAULT_BROADCAST_CAPACITY, "{raw}");
        }

        let config = StoreConfig::from_lookup(lookup(&[("STORE_BROADCAST_CAPACITY", " 128 ")]));
        assert_eq!(config.broadcast_capacity, 128);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        assert_eq!(StoreConfig::default().with_broadcast_capacity(0).broadcast_capacity, 1);
    }
}
