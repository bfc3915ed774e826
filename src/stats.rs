use crate::model::{Client, ClientType, Contract, PlantType, PowerPlant};

#[derive(Debug, Clone)]
pub struct Accumulator {
    n_vals: usize,
    mean: f64,
    diff_2_sum: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccumulatorReport {
    pub n_vals: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            n_vals: 0,
            mean: 0.0,
            diff_2_sum: 0.0,
        }
    }

    pub fn add(&mut self, val: f64) {
        self.n_vals += 1;

        let diff_a = val - self.mean;
        self.mean += diff_a / self.n_vals as f64;

        let diff_b = val - self.mean;
        self.diff_2_sum += diff_a * diff_b;
    }

    pub fn report(&self) -> AccumulatorReport {
        AccumulatorReport {
            n_vals: self.n_vals,
            mean: if self.n_vals > 0 { self.mean } else { f64::NAN },
            std_dev: if self.n_vals > 1 {
                (self.diff_2_sum / (self.n_vals as f64 - 1.0)).sqrt()
            } else {
                f64::NAN
            },
        }
    }
}

/// Aggregate figures of a generated scenario.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Production per plant type, in [`PlantType::ALL`] order.
    pub production: [AccumulatorReport; 3],
    /// Consumption per client type, in [`ClientType::ALL`] order.
    pub consumption: [AccumulatorReport; 3],
    pub total_production: u64,
    pub total_demand: u64,
    pub n_guaranteed: usize,
}

impl Summary {
    pub fn new(plants: &[PowerPlant], clients: &[Client]) -> Self {
        let mut prod_acc: [Accumulator; 3] = Default::default();
        for plant in plants {
            prod_acc[plant.plant_type().index()].add(plant.production() as f64);
        }

        let mut cons_acc: [Accumulator; 3] = Default::default();
        for client in clients {
            cons_acc[client.client_type().index()].add(client.consumption() as f64);
        }

        Self {
            production: prod_acc.map(|acc| acc.report()),
            consumption: cons_acc.map(|acc| acc.report()),
            total_production: plants.iter().map(|plant| plant.production() as u64).sum(),
            total_demand: clients.iter().map(|client| client.consumption() as u64).sum(),
            n_guaranteed: clients
                .iter()
                .filter(|client| client.contract() == Contract::Guaranteed)
                .count(),
        }
    }

    /// Production report of one plant type.
    pub fn plants(&self, plant_type: PlantType) -> &AccumulatorReport {
        &self.production[plant_type.index()]
    }

    /// Consumption report of one client type.
    pub fn clients(&self, client_type: ClientType) -> &AccumulatorReport {
        &self.consumption[client_type.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_mean_and_std_dev() {
        let mut acc = Accumulator::new();
        for val in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            acc.add(val);
        }
        let report = acc.report();
        assert_eq!(report.n_vals, 8);
        assert!((report.mean - 5.0).abs() < 1e-12);
        assert!((report.std_dev - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn accumulator_few_values() {
        let report = Accumulator::new().report();
        assert!(report.mean.is_nan() && report.std_dev.is_nan());

        let mut acc = Accumulator::new();
        acc.add(3.0);
        let report = acc.report();
        assert_eq!(report.mean, 3.0);
        assert!(report.std_dev.is_nan());
    }

    #[test]
    fn summary_totals() {
        let plants = vec![
            PowerPlant::new(PlantType::A, 300, 0, 0),
            PowerPlant::new(PlantType::A, 500, 1, 1),
            PowerPlant::new(PlantType::C, 20, 2, 2),
        ];
        let clients = vec![
            Client::new(ClientType::XG, 10, Contract::Guaranteed, 0, 0),
            Client::new(ClientType::G, 2, Contract::NonGuaranteed, 5, 5),
        ];
        let summary = Summary::new(&plants, &clients);
        assert_eq!(summary.total_production, 820);
        assert_eq!(summary.total_demand, 12);
        assert_eq!(summary.n_guaranteed, 1);
        assert_eq!(summary.plants(PlantType::A).n_vals, 2);
        assert_eq!(summary.plants(PlantType::B).n_vals, 0);
        assert_eq!(summary.clients(ClientType::G).n_vals, 1);
        assert_eq!(summary.plants(PlantType::A).mean, 400.0);
    }
}
