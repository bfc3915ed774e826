use crate::checks::{check_len, check_num, check_prop_vec};
use crate::model::{ClientType, PlantType};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Scenario configuration parameters.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct Config {
    /// Base seed of the random streams.
    pub seed: u64,

    /// Power plant fleet parameters.
    pub fleet: FleetConfig,

    /// Client population parameters.
    pub clients: ClientsConfig,
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct FleetConfig {
    /// Number of plants of each type (A, B, C).
    pub n_plants: Vec<usize>,
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct ClientsConfig {
    /// Number of clients.
    pub n_clients: usize,

    /// Proportion of each client type (XG, MG, G), summing to 1.0.
    pub prop_types: Vec<f64>,

    /// Proportion of clients with guaranteed service.
    pub prop_guaranteed: f64,
}

impl Config {
    /// Load a [`Config`] from a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        Self::from_toml_str(&contents).with_context(|| format!("failed to load {file:?}"))
    }

    /// Parse and validate a [`Config`] from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_len(&self.fleet.n_plants, PlantType::ALL.len())
            .context("invalid number of plants per type")?;
        for (plant_type, &n_type) in PlantType::ALL.iter().zip(&self.fleet.n_plants) {
            check_num(n_type, 0..=100_000)
                .with_context(|| format!("invalid number of type {plant_type:?} plants"))?;
        }

        check_num(self.clients.n_clients, 0..=1_000_000).context("invalid number of clients")?;
        check_prop_vec(&self.clients.prop_types, ClientType::ALL.len())
            .context("invalid client type proportions")?;
        check_num(self.clients.prop_guaranteed, 0.0..=1.0)
            .context("invalid guaranteed proportion")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
seed = 42

[fleet]
n_plants = [5, 10, 25]

[clients]
n_clients = 1000
prop_types = [0.2, 0.3, 0.5]
prop_guaranteed = 0.5
"#;

    #[test]
    fn parse_valid() {
        let config = Config::from_toml_str(VALID).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.fleet.n_plants, vec![5, 10, 25]);
        assert_eq!(config.clients.n_clients, 1000);
        assert_eq!(config.clients.prop_types, vec![0.2, 0.3, 0.5]);
        assert_eq!(config.clients.prop_guaranteed, 0.5);
    }

    #[test]
    fn reject_invalid() {
        let cases = [
            VALID.replace("[5, 10, 25]", "[5, 10]"),
            VALID.replace("[0.2, 0.3, 0.5]", "[0.2, 0.3, 0.4]"),
            VALID.replace("[0.2, 0.3, 0.5]", "[0.2, 0.3, 0.500000005]"),
            VALID.replace("prop_guaranteed = 0.5", "prop_guaranteed = 1.5"),
            VALID.replace("n_clients = 1000", "n_clients = 2000000"),
            VALID.replace("seed = 42", ""),
        ];
        for contents in &cases {
            assert!(Config::from_toml_str(contents).is_err(), "{contents}");
        }
    }

    #[test]
    fn missing_file() {
        assert!(Config::from_file("/nonexistent/config.toml").is_err());
    }
}
