use crate::config::Config;
use crate::error::Result;
use crate::generator::{FleetGenerator, PopulationGenerator};
use crate::model::{Client, PowerPlant};
use crate::stats::Summary;

/// A plant fleet and a client population generated from one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    plants: Vec<PowerPlant>,
    clients: Vec<Client>,
}

impl Scenario {
    /// Generate the fleet and the population.
    ///
    /// Both use `cfg.seed`; the population stream applies its own offset.
    pub fn generate(cfg: &Config) -> Result<Self> {
        let plants = FleetGenerator::new(cfg.seed).generate(&cfg.fleet.n_plants)?;

        let clients = PopulationGenerator::new(cfg.seed).generate(
            cfg.clients.n_clients,
            &cfg.clients.prop_types,
            cfg.clients.prop_guaranteed,
        )?;

        log::info!(
            "generated scenario with {} plants and {} clients",
            plants.len(),
            clients.len()
        );

        Ok(Self { plants, clients })
    }

    pub fn plants(&self) -> &[PowerPlant] {
        &self.plants
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn summary(&self) -> Summary {
        Summary::new(&self.plants, &self.clients)
    }
}
