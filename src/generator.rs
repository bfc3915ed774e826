//! Seeded generation of plant fleets and client populations.
//!
//! Each generator owns a single `ChaCha12Rng` stream and consumes it in a
//! fixed order, so the same inputs and seed always give the same entities.

use crate::checks::{check_len, check_num, check_prop_vec};
use crate::error::{Error, Result};
use crate::model::{Client, ClientType, Contract, PlantType, PowerPlant};
use crate::tables::{CONSUMPTION, COORD_MAX, PRODUCTION};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::Uniform;

/// Offset added to the seed of a population stream, decorrelating it from
/// a fleet built with the same seed.
pub const CLIENT_SEED_OFFSET: u64 = 1;

fn coord_dist() -> Result<Uniform<u32>> {
    Uniform::new_inclusive(0, COORD_MAX)
        .map_err(|error| Error::InvalidParameters(format!("invalid coordinate range: {error}")))
}

/// Generator of power plant fleets.
pub struct FleetGenerator {
    rng: ChaCha12Rng,
}

impl FleetGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    /// Generate `n_plants[i]` plants of the `i`-th type, grouped by type.
    ///
    /// Per plant the stream is drawn for production, then `x`, then `y`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] if `n_plants` does not have
    /// exactly one count per plant type.
    pub fn generate(&mut self, n_plants: &[usize]) -> Result<Vec<PowerPlant>> {
        check_len(n_plants, PlantType::ALL.len())?;
        let coord_dist = coord_dist()?;

        let mut plant_vec = Vec::with_capacity(n_plants.iter().sum());
        for (plant_type, &n_type) in PlantType::ALL.into_iter().zip(n_plants) {
            let range = &PRODUCTION[plant_type.index()];
            for _ in 0..n_type {
                let production = range.truncated(self.rng.random::<f64>());
                let x = coord_dist.sample(&mut self.rng);
                let y = coord_dist.sample(&mut self.rng);
                plant_vec.push(PowerPlant::new(plant_type, production, x, y));
            }
        }

        log::debug!("generated {} plants ({n_plants:?})", plant_vec.len());

        Ok(plant_vec)
    }
}

/// Generator of client populations.
pub struct PopulationGenerator {
    rng: ChaCha12Rng,
}

impl PopulationGenerator {
    /// The stream is seeded with `seed + CLIENT_SEED_OFFSET`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha12Rng::seed_from_u64(seed.wrapping_add(CLIENT_SEED_OFFSET)),
        }
    }

    /// Generate `n_clients` clients.
    ///
    /// `prop_types` gives the share of each client type and must sum to 1.0;
    /// `prop_guaranteed` is the share of clients with a guaranteed contract.
    /// Per client the stream is drawn for the type, the contract, the
    /// consumption, `x` and `y`, in that order.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] if `prop_types` is not a valid
    /// proportion vector of length 3 or `prop_guaranteed` is outside `[0, 1]`.
    pub fn generate(
        &mut self,
        n_clients: usize,
        prop_types: &[f64],
        prop_guaranteed: f64,
    ) -> Result<Vec<Client>> {
        check_prop_vec(prop_types, ClientType::ALL.len())?;
        check_num(prop_guaranteed, 0.0..=1.0)?;
        let coord_dist = coord_dist()?;

        let cum_xg = prop_types[0];
        let cum_mg = prop_types[0] + prop_types[1];

        let mut client_vec = Vec::with_capacity(n_clients);
        for _ in 0..n_clients {
            let dice = self.rng.random::<f64>();
            let client_type = if dice < cum_xg {
                ClientType::XG
            } else if dice < cum_mg {
                ClientType::MG
            } else {
                ClientType::G
            };

            let dice = self.rng.random::<f64>();
            let contract = if dice < prop_guaranteed {
                Contract::Guaranteed
            } else {
                Contract::NonGuaranteed
            };

            let range = &CONSUMPTION[client_type.index()];
            let consumption = range.truncated(self.rng.random::<f64>());
            let x = coord_dist.sample(&mut self.rng);
            let y = coord_dist.sample(&mut self.rng);

            client_vec.push(Client::new(client_type, consumption, contract, x, y));
        }

        log::debug!("generated {} clients", client_vec.len());

        Ok(client_vec)
    }
}

/// Generate a fleet from a fresh stream seeded with `seed`.
pub fn generate_fleet(n_plants: &[usize], seed: u64) -> Result<Vec<PowerPlant>> {
    FleetGenerator::new(seed).generate(n_plants)
}

/// Generate a population from a fresh stream seeded with `seed + CLIENT_SEED_OFFSET`.
pub fn generate_population(
    n_clients: usize,
    prop_types: &[f64],
    prop_guaranteed: f64,
    seed: u64,
) -> Result<Vec<Client>> {
    PopulationGenerator::new(seed).generate(n_clients, prop_types, prop_guaranteed)
}
