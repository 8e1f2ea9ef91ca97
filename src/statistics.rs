use rust_decimal::Decimal;

use crate::{container::ResourceContainer, espresso_machine::EspressoMachine, order::Drink};

/// Contadores de lo que fue haciendo la cafetera
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Statistics {
    pub orders_processed: u64,
    pub orders_skipped: u64,
    pub espressos_made: u64,
    pub litres_made: Decimal,
    pub bean_refills: u64,
    pub water_refills: u64,
    pub descales: u64,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    pub fn record_brew(&mut self, drink: Drink, litres: Decimal) {
        self.orders_processed += 1;
        self.espressos_made += drink.espressos();
        self.litres_made += litres;
    }

    pub fn record_skip(&mut self) {
        self.orders_skipped += 1;
    }

    pub fn record_bean_refill(&mut self) {
        self.bean_refills += 1;
    }

    pub fn record_water_refill(&mut self) {
        self.water_refills += 1;
    }

    pub fn record_descale(&mut self) {
        self.descales += 1;
    }

    pub fn summary(&self, machine: &EspressoMachine) -> String {
        let mut statistics = format!(
            "[STATISTICS] Orders processed={} skipped={} | Espressos={} Litres={} | Refills=(beans {}, water {}) Descales={} | Container=(remaining, consumed) |",
            self.orders_processed,
            self.orders_skipped,
            self.espressos_made,
            self.litres_made,
            self.bean_refills,
            self.water_refills,
            self.descales
        );
        if let Some(container) = machine.beans_container() {
            statistics.push_str(&format!(" Beans=({},{}) ", container.query(), container.consumed()));
        }
        if machine.is_on_mains() {
            statistics.push_str(" Water=mains ");
        } else if let Some(container) = machine.water_container() {
            statistics.push_str(&format!(" Water=({},{}) ", container.query(), container.consumed()));
        }
        statistics.push_str(&format!("| Status={}", machine.status()));
        statistics
    }
}
