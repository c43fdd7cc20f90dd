//! Named renderer configurations and canvas sizes shared by the test suites.
//!
//! `fixtures/manifest.json` maps config names to JSON files under
//! `fixtures/` and viewport names to inline sizes.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    configs: BTreeMap<String, String>,
    viewports: BTreeMap<String, ViewportSize>,
}

/// Canvas size used by a named test scenario.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

pub mod configs {
    use super::*;

    /// Config names in sorted order.
    pub fn keys() -> Vec<String> {
        MANIFEST.configs.keys().cloned().collect()
    }

    /// Raw JSON text of the named config.
    pub fn json(name: &str) -> Result<String> {
        let file = MANIFEST
            .configs
            .get(name)
            .with_context(|| format!("unknown config fixture '{name}'"))?;
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(file);
        std::fs::read_to_string(&path)
            .with_context(|| format!("reading config fixture {}", path.display()))
    }

    /// The named config deserialized into `T`.
    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let text = json(name)?;
        serde_json::from_str(&text).with_context(|| format!("parsing config fixture '{name}'"))
    }
}

pub mod viewports {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.viewports.keys().cloned().collect()
    }

    pub fn get(name: &str) -> Result<ViewportSize> {
        MANIFEST
            .viewports
            .get(name)
            .copied()
            .with_context(|| format!("unknown viewport fixture '{name}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_config_fixture_is_a_json_object() {
        let keys = configs::keys();
        assert_eq!(keys, ["compact", "default", "slow"]);
        for key in keys {
            let value: serde_json::Value = configs::load(&key).unwrap();
            assert!(value.is_object(), "{key} should be a JSON object");
        }
    }

    #[test]
    fn unknown_names_are_errors() {
        assert!(configs::json("missing").is_err());
        assert!(viewports::get("missing").is_err());
        assert_eq!(
            viewports::get("square").unwrap(),
            ViewportSize {
                width: 800.0,
                height: 800.0
            }
        );
    }
}
