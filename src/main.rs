use log::{error, warn, LevelFilter};
use simple_logger::SimpleLogger;

use espresso_machine::{
    coffee_maker::CoffeeMaker,
    constants::{MACHINE_CONFIG_PATH, ORDERS_PATH, RANDOM_ORDERS},
    machine_config::MachineConfig,
    orders_reader::{generate_random_orders, read_orders},
};

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Error initializing the logger: {}", err);
    }

    let config = MachineConfig::load(MACHINE_CONFIG_PATH).unwrap_or_else(|err| {
        warn!("{}, using the default configuration", err);
        MachineConfig::default()
    });
    let orders = read_orders(ORDERS_PATH).unwrap_or_else(|err| {
        warn!("{}, generating {} random orders", err, RANDOM_ORDERS);
        generate_random_orders(RANDOM_ORDERS)
    });

    let mut coffee_maker = CoffeeMaker::new(&config);
    match coffee_maker.manage_orders(orders) {
        Ok(statistics) => println!("{}", statistics.summary(coffee_maker.machine())),
        Err(err) => error!("The coffee maker stopped: {}", err),
    }
}
