//! Scenario entities.

use crate::error::{Error, Result};
use std::fmt;

/// Power plant category. Determines production range and costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlantType {
    A,
    B,
    C,
}

/// Client category. Determines consumption range and prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientType {
    XG,
    MG,
    G,
}

/// Service contract of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contract {
    Guaranteed,
    NonGuaranteed,
}

impl PlantType {
    pub const ALL: [PlantType; 3] = [PlantType::A, PlantType::B, PlantType::C];

    /// Row of this type in the plant tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl ClientType {
    pub const ALL: [ClientType; 3] = [ClientType::XG, ClientType::MG, ClientType::G];

    /// Row of this type in the client tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for PlantType {
    type Error = Error;

    fn try_from(idx: usize) -> Result<Self> {
        PlantType::ALL
            .get(idx)
            .copied()
            .ok_or_else(|| Error::OutOfRange(format!("plant type must be in 0..3, but is {idx}")))
    }
}

impl TryFrom<usize> for ClientType {
    type Error = Error;

    fn try_from(idx: usize) -> Result<Self> {
        ClientType::ALL
            .get(idx)
            .copied()
            .ok_or_else(|| Error::OutOfRange(format!("client type must be in 0..3, but is {idx}")))
    }
}

impl TryFrom<usize> for Contract {
    type Error = Error;

    fn try_from(idx: usize) -> Result<Self> {
        match idx {
            0 => Ok(Contract::Guaranteed),
            1 => Ok(Contract::NonGuaranteed),
            _ => Err(Error::OutOfRange(format!("contract must be in 0..2, but is {idx}"))),
        }
    }
}

/// A generated power plant.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerPlant {
    plant_type: PlantType,
    production: u32,
    x: u32,
    y: u32,
}

impl PowerPlant {
    pub fn new(plant_type: PlantType, production: u32, x: u32, y: u32) -> Self {
        Self {
            plant_type,
            production,
            x,
            y,
        }
    }

    pub fn plant_type(&self) -> PlantType {
        self.plant_type
    }

    /// Production capacity in MW.
    pub fn production(&self) -> u32 {
        self.production
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }
}

/// A generated client.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    client_type: ClientType,
    consumption: u32,
    contract: Contract,
    x: u32,
    y: u32,
}

impl Client {
    pub fn new(
        client_type: ClientType,
        consumption: u32,
        contract: Contract,
        x: u32,
        y: u32,
    ) -> Self {
        Self {
            client_type,
            consumption,
            contract,
            x,
            y,
        }
    }

    pub fn client_type(&self) -> ClientType {
        self.client_type
    }

    /// Demanded energy in MW.
    pub fn consumption(&self) -> u32 {
        self.consumption
    }

    pub fn contract(&self) -> Contract {
        self.contract
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }
}

impl fmt::Display for PowerPlant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "plant(type={:?} production={} x={} y={})",
            self.plant_type, self.production, self.x, self.y
        )
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "client(type={:?} consumption={} contract={:?} x={} y={})",
            self.client_type, self.consumption, self.contract, self.x, self.y
        )
    }
}

/// Euclidean distance between a plant and a client.
pub fn distance(plant: &PowerPlant, client: &Client) -> f64 {
    let dx = plant.x as f64 - client.x as f64;
    let dy = plant.y as f64 - client.y as f64;
    dx.hypot(dy)
}
