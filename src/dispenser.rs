//! Dispenser de la cafetera. Procesa los pedidos.
use std::collections::VecDeque;

use log::{debug, info};
use rust_decimal::Decimal;

use crate::{
    errors::Result,
    espresso_machine::EspressoMachine,
    order::{Drink, Order},
    replenisher::Replenisher,
    statistics::Statistics,
};

/// Representa a un dispenser de la cafetera.
/// Prepara los pedidos de a uno y, si a la maquina le falta algo, le pide al reponedor que la arregle
/// y vuelve a intentar una sola vez.
pub struct Dispenser {
    id: usize,
    replenisher: Replenisher,
}

impl Dispenser {
    pub fn new(id: usize, replenisher: Replenisher) -> Dispenser {
        Dispenser { id, replenisher }
    }

    pub fn handle_orders(
        &self,
        mut orders: VecDeque<Order>,
        machine: &mut EspressoMachine,
        statistics: &mut Statistics,
    ) -> Result<()> {
        while let Some(order) = orders.pop_front() {
            debug!("[DISPENSER {}] Takes order {}", self.id, order.id);
            self.process_order(order, machine, statistics)?;
            debug!("[DISPENSER {}] Machine status: {}", self.id, machine.status());
        }
        Ok(())
    }

    fn process_order(
        &self,
        order: Order,
        machine: &mut EspressoMachine,
        statistics: &mut Statistics,
    ) -> Result<()> {
        let error = match self.brew(order.drink, machine) {
            Ok(litres) => {
                statistics.record_brew(order.drink, litres);
                return Ok(());
            }
            Err(err) if err.is_recoverable() => err,
            Err(err) => return Err(err),
        };

        info!(
            "[DISPENSER {}] Can't make order {} yet ({}), waking up replenisher",
            self.id, order.id, error
        );
        self.replenisher
            .replenish(machine, order.drink.espressos(), statistics)?;

        match self.brew(order.drink, machine) {
            Ok(litres) => {
                statistics.record_brew(order.drink, litres);
                Ok(())
            }
            Err(err) if err.is_recoverable() => {
                info!("[DISPENSER {}] Skipped order {}, {}", self.id, order.id, err);
                statistics.record_skip();
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn brew(&self, drink: Drink, machine: &mut EspressoMachine) -> Result<Decimal> {
        let litres = match drink {
            Drink::Espresso => machine.make_espresso()?,
            Drink::DoubleEspresso => machine.make_double_espresso()?,
        };
        debug!("[DISPENSER {}] Made {:?}, {} litres", self.id, drink, litres);
        Ok(litres)
    }
}
