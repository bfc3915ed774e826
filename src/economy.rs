use crate::checks::check_num;
use crate::error::{Error, Result};
use crate::model::{ClientType, Contract, PlantType};
use crate::tables::{COSTS, CostRow, LOSSES, LossStep, PRICES, PriceRow};

/// Tariffs, costs and transmission losses used to score an assignment.
///
/// The tables are fixed at construction and never change, so repeated
/// queries with the same key always return the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct EconomicModel {
    prices: [PriceRow; 3],
    costs: [CostRow; 3],
    losses: Vec<LossStep>,
}

impl Default for EconomicModel {
    fn default() -> Self {
        Self::standard()
    }
}

impl EconomicModel {
    /// Model backed by the constant tables.
    pub fn standard() -> Self {
        Self {
            prices: PRICES,
            costs: COSTS,
            losses: LOSSES.to_vec(),
        }
    }

    /// Model backed by custom tables.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] if the loss table is empty, its
    /// distance bounds are not strictly ascending, or a loss fraction is
    /// outside `[0, 1]`.
    pub fn new(prices: [PriceRow; 3], costs: [CostRow; 3], losses: Vec<LossStep>) -> Result<Self> {
        if losses.is_empty() {
            return Err(Error::InvalidParameters(
                "loss table must not be empty".to_string(),
            ));
        }
        if losses
            .windows(2)
            .any(|pair| !(pair[0].max_distance < pair[1].max_distance))
        {
            return Err(Error::InvalidParameters(
                "loss table distances must be strictly ascending".to_string(),
            ));
        }
        for step in &losses {
            check_num(step.fraction, 0.0..=1.0)?;
        }
        Ok(Self {
            prices,
            costs,
            losses,
        })
    }

    pub fn guaranteed_tariff(&self, client_type: ClientType) -> f64 {
        self.prices[client_type.index()].guaranteed
    }

    pub fn non_guaranteed_tariff(&self, client_type: ClientType) -> f64 {
        self.prices[client_type.index()].non_guaranteed
    }

    /// Penalty owed for failing to serve a client.
    pub fn penalty(&self, client_type: ClientType) -> f64 {
        self.prices[client_type.index()].penalty
    }

    /// Tariff that applies to a client with the given contract.
    pub fn tariff(&self, client_type: ClientType, contract: Contract) -> f64 {
        match contract {
            Contract::Guaranteed => self.guaranteed_tariff(client_type),
            Contract::NonGuaranteed => self.non_guaranteed_tariff(client_type),
        }
    }

    pub fn production_cost_per_mw(&self, plant_type: PlantType) -> f64 {
        self.costs[plant_type.index()].per_mw
    }

    /// Cost of keeping a plant running for a day.
    pub fn daily_running_cost(&self, plant_type: PlantType) -> f64 {
        self.costs[plant_type.index()].daily
    }

    /// Cost of keeping a plant stopped.
    pub fn stop_cost(&self, plant_type: PlantType) -> f64 {
        self.costs[plant_type.index()].stop
    }

    /// Fraction of energy lost over `distance`.
    ///
    /// Piecewise constant: the fraction of the first step whose bound is
    /// greater than or equal to `distance`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `distance` is negative, NaN, or
    /// beyond the last step.
    pub fn transmission_loss(&self, distance: f64) -> Result<f64> {
        if distance.is_nan() || distance < 0.0 {
            return Err(Error::OutOfRange(format!(
                "distance must be non-negative, but is {distance}"
            )));
        }
        self.losses
            .iter()
            .find(|step| distance <= step.max_distance)
            .map(|step| step.fraction)
            .ok_or_else(|| {
                let max = self.max_distance();
                Error::OutOfRange(format!("distance must be at most {max}, but is {distance}"))
            })
    }

    /// Largest distance covered by the loss table.
    pub fn max_distance(&self) -> f64 {
        self.losses
            .last()
            .map_or(f64::NEG_INFINITY, |step| step.max_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_lookups() {
        let eco = EconomicModel::standard();
        assert_eq!(eco.guaranteed_tariff(ClientType::MG), 50.0);
        assert_eq!(eco.non_guaranteed_tariff(ClientType::XG), 30.0);
        assert_eq!(eco.penalty(ClientType::G), 5.0);
        assert_eq!(eco.tariff(ClientType::G, Contract::Guaranteed), 60.0);
        assert_eq!(eco.tariff(ClientType::G, Contract::NonGuaranteed), 50.0);
    }

    #[test]
    fn cost_lookups() {
        let eco = EconomicModel::default();
        assert_eq!(eco.production_cost_per_mw(PlantType::C), 15.0);
        assert_eq!(eco.daily_running_cost(PlantType::A), 2000.0);
        assert_eq!(eco.stop_cost(PlantType::B), 500.0);
    }

    #[test]
    fn raw_key_out_of_range() {
        assert!(matches!(ClientType::try_from(3), Err(Error::OutOfRange(_))));
        assert!(matches!(PlantType::try_from(3), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn loss_steps() {
        let eco = EconomicModel::standard();
        assert_eq!(eco.transmission_loss(0.0), Ok(0.0));
        assert_eq!(eco.transmission_loss(1.0), Ok(0.0));
        assert_eq!(eco.transmission_loss(5.0), Ok(0.0));
        assert_eq!(eco.transmission_loss(10.0), Ok(0.0));
        assert_eq!(eco.transmission_loss(10.5), Ok(0.1));
        assert_eq!(eco.transmission_loss(25.0), Ok(0.1));
        assert_eq!(eco.transmission_loss(30.0), Ok(0.2));
        assert_eq!(eco.transmission_loss(75.0), Ok(0.4));
        assert_eq!(eco.transmission_loss(141.5), Ok(0.6));
        assert_eq!(eco.transmission_loss(1000.0), Ok(0.6));
    }

    #[test]
    fn loss_outside_domain() {
        let eco = EconomicModel::standard();
        assert!(matches!(
            eco.transmission_loss(1000.5),
            Err(Error::OutOfRange(_))
        ));
        assert!(matches!(
            eco.transmission_loss(-1.0),
            Err(Error::OutOfRange(_))
        ));
        assert!(matches!(
            eco.transmission_loss(f64::NAN),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn repeated_queries_agree() {
        let eco = EconomicModel::standard();
        let first = eco.transmission_loss(42.0);
        for _ in 0..10 {
            assert_eq!(eco.transmission_loss(42.0), first);
            assert_eq!(eco.guaranteed_tariff(ClientType::XG), 40.0);
        }
    }

    #[test]
    fn custom_tables() {
        let losses = vec![
            LossStep {
                max_distance: 50.0,
                fraction: 0.05,
            },
            LossStep {
                max_distance: 200.0,
                fraction: 0.3,
            },
        ];
        let eco = EconomicModel::new(PRICES, COSTS, losses).expect("valid tables");
        assert_eq!(eco.transmission_loss(60.0), Ok(0.3));
        assert_eq!(eco.max_distance(), 200.0);
        assert!(eco.transmission_loss(201.0).is_err());
    }

    #[test]
    fn custom_tables_rejected() {
        assert!(matches!(
            EconomicModel::new(PRICES, COSTS, Vec::new()),
            Err(Error::InvalidParameters(_))
        ));
        let unsorted = vec![LOSSES[2], LOSSES[1]];
        assert!(matches!(
            EconomicModel::new(PRICES, COSTS, unsorted),
            Err(Error::InvalidParameters(_))
        ));
        let bad_fraction = vec![LossStep {
            max_distance: 10.0,
            fraction: 1.5,
        }];
        assert!(EconomicModel::new(PRICES, COSTS, bad_fraction).is_err());
    }
}
