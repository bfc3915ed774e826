//! Reproducible power plant and client scenarios for energy-distribution
//! assignment problems, with the economic model used to score assignments.

mod checks;
pub mod config;
pub mod economy;
pub mod error;
pub mod generator;
pub mod model;
pub mod scenario;
pub mod stats;
pub mod tables;

pub use config::Config;
pub use economy::EconomicModel;
pub use error::{Error, Result};
pub use generator::{FleetGenerator, PopulationGenerator, generate_fleet, generate_population};
pub use model::{Client, ClientType, Contract, PlantType, PowerPlant, distance};
pub use scenario::Scenario;
