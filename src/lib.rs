//! Modelo de una maquina de espresso: contenedores de granos y agua, preparacion de espressos,
//! descalcificado y el estado que muestra la pantalla.

pub mod coffee_maker;
pub mod constants;
pub mod container;
pub mod dispenser;
pub mod errors;
pub mod espresso_machine;
pub mod machine_config;
pub mod order;
pub mod orders_reader;
pub mod replenisher;
pub mod statistics;
pub mod status;

pub use container::{BeansContainer, Container, ResourceContainer, WaterContainer};
pub use errors::{EspressoMachineError, Result};
pub use espresso_machine::EspressoMachine;
pub use machine_config::{MachineConfig, MachineRates};
pub use status::MachineStatus;
