use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads `name`, treating an unset, empty or whitespace-only variable as absent
pub fn env_var_nonempty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parses `name` into `T`, falling back to `default` when absent or unparsable
///
/// An unparsable value is logged so a typo in `.env` does not go unnoticed.
pub fn get_env_or_default<T: FromStr>(name: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env_var_nonempty(name) {
        Some(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            warn!("Ignoring {}={}: {:?}", name, raw, e);
            default
        }),
        None => default,
    }
}

/// Parses `name` into `T`; `None` when absent or unparsable
pub fn get_env_or_none<T: FromStr>(name: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let raw = env_var_nonempty(name)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={}: {:?}", name, raw, e);
            None
        }
    }
}
