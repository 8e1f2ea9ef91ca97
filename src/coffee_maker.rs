//! Cafetera: arma la maquina a partir de la configuracion y le pasa los pedidos al dispenser
use std::collections::VecDeque;

use log::info;

use crate::{
    dispenser::Dispenser,
    errors::Result,
    espresso_machine::EspressoMachine,
    machine_config::MachineConfig,
    order::Order,
    replenisher::Replenisher,
    statistics::Statistics,
};

pub struct CoffeeMaker {
    machine: EspressoMachine,
    dispenser: Dispenser,
}

impl CoffeeMaker {
    pub fn new(config: &MachineConfig) -> CoffeeMaker {
        CoffeeMaker {
            machine: config.build_machine(),
            dispenser: Dispenser::new(0, Replenisher::new()),
        }
    }

    pub fn machine(&self) -> &EspressoMachine {
        &self.machine
    }

    pub fn manage_orders(&mut self, orders: VecDeque<Order>) -> Result<Statistics> {
        let mut statistics = Statistics::new();
        info!("[COFFEE MAKER] Processing {} orders", orders.len());
        self.dispenser
            .handle_orders(orders, &mut self.machine, &mut statistics)?;
        info!("[COFFEE MAKER] Finished, status: {}", self.machine.status());
        Ok(statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders_reader::generate_random_orders;

    #[test]
    fn should_process_every_random_order() {
        let mut coffee_maker = CoffeeMaker::new(&MachineConfig::default());
        let statistics = coffee_maker.manage_orders(generate_random_orders(100)).unwrap();
        assert_eq!(100, statistics.orders_processed);
        assert_eq!(0, statistics.orders_skipped);
    }

    #[test]
    fn should_process_orders_on_mains() {
        let config = MachineConfig {
            mains_supply: true,
            ..MachineConfig::default()
        };
        let mut coffee_maker = CoffeeMaker::new(&config);
        let statistics = coffee_maker.manage_orders(generate_random_orders(30)).unwrap();
        assert_eq!(30, statistics.orders_processed);
        assert_eq!(0, statistics.water_refills);
        assert_eq!(true, coffee_maker.machine().is_on_mains());
    }
}
