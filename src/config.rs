use std::collections::HashMap;

use crate::error::{Error, Result};

/// Named options consumed by input enumerators. The engine and the worker
/// abstraction never look inside; unrecognized keys are ignored.
pub type Config = HashMap<String, String>;

/// Key naming the directory that file-backed inputs are enumerated from.
pub const DATA_DIR: &str = "data_dir";

/// Fetch a mandatory key or fail with a configuration error.
pub fn require<'a>(config: &'a Config, key: &str) -> Result<&'a str> {
    config
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingConfig {
            key: key.to_string(),
        })
}
