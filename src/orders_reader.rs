//! Lectura de los pedidos a preparar
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::{collections::VecDeque, error::Error};

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::Deserialize;

use crate::errors::{EspressoMachineError, Result};
use crate::order::{Drink, Order};

#[derive(Deserialize, Debug)]
struct JsonOrder {
    drink: Drink,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

fn read_orders_from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Vec<JsonOrder>, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

fn add_orders_to_queue(json_orders: Vec<JsonOrder>) -> VecDeque<Order> {
    let mut orders = VecDeque::new();
    for (id, order) in json_orders.into_iter().enumerate() {
        debug!("[READER] Added order {} ({:?})", id, order.drink);
        orders.push_back(Order::new(id, order.drink));
    }
    info!("[READER] No more orders left, read {}", orders.len());
    orders
}

/// Lee los pedidos de un archivo con el formato `{"orders": [{"drink": "espresso"}, ...]}`
pub fn read_orders<P: AsRef<Path>>(path: P) -> Result<VecDeque<Order>> {
    match read_orders_from_file(path) {
        Ok(json_orders) => Ok(add_orders_to_queue(json_orders)),
        Err(err) => Err(EspressoMachineError::FileReaderError(err.to_string())),
    }
}

/// Genera `n` pedidos eligiendo la bebida al azar
pub fn generate_random_orders(n: usize) -> VecDeque<Order> {
    let drinks = [Drink::Espresso, Drink::DoubleEspresso];
    let mut rng = thread_rng();
    let orders: VecDeque<Order> = (0..n)
        .filter_map(|id| drinks.choose(&mut rng).map(|drink| Order::new(id, *drink)))
        .collect();
    info!("[READER] Generated {} random orders", orders.len());
    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn should_read_orders_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "orders": [ {{ "drink": "espresso" }}, {{ "drink": "double_espresso" }} ] }}"#
        )
        .unwrap();

        let mut orders = read_orders(file.path()).unwrap();
        assert_eq!(2, orders.len());
        assert_eq!(Some(Order::new(0, Drink::Espresso)), orders.pop_front());
        assert_eq!(Some(Order::new(1, Drink::DoubleEspresso)), orders.pop_front());
    }

    #[test]
    fn should_fail_with_unknown_drinks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "orders": [ {{ "drink": "latte" }} ] }}"#).unwrap();

        let result = read_orders(file.path());
        assert_eq!(true, matches!(result, Err(EspressoMachineError::FileReaderError(_))));
    }

    #[test]
    fn should_fail_when_the_file_does_not_exist() {
        let result = read_orders("this-file-does-not-exist.json");
        assert_eq!(true, matches!(result, Err(EspressoMachineError::FileReaderError(_))));
    }

    #[test]
    fn should_generate_the_requested_amount_of_orders() {
        let orders = generate_random_orders(20);
        assert_eq!(20, orders.len());
        for (id, order) in orders.iter().enumerate() {
            assert_eq!(id, order.id);
        }
    }
}
