use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EspressoMachineError {
    #[error("Trying to add {requested} {unit} to {available} {unit} space. Not enough capacity")]
    ContainerFull {
        requested: Decimal,
        available: Decimal,
        unit: &'static str,
    },

    #[error("Not enough {resource} in the container: requested {requested}, available {available}")]
    InsufficientResource {
        resource: &'static str,
        requested: Decimal,
        available: Decimal,
    },

    #[error("Invalid amount {0}, amounts can't be negative")]
    InvalidAmount(Decimal),

    #[error("Machine configuration error: {0}")]
    MachineConfiguration(String),

    #[error("The machine is on mains supply")]
    MachineOnMains,

    #[error("Not enough beans to make an espresso. {remaining} spoons remaining")]
    NoBeans { remaining: Decimal },

    #[error("{reason}. {remaining} litres remaining")]
    NoWater { reason: String, remaining: Decimal },

    #[error("The machine needs descaling. {litres} litres since last descale")]
    DescaleNeeded { litres: Decimal },

    #[error("Error while reading the orders file: {0}")]
    FileReaderError(String),

    #[error("Error while reading the machine configuration: {0}")]
    ConfigurationFile(String),
}

pub type Result<T> = std::result::Result<T, EspressoMachineError>;

impl EspressoMachineError {
    /// Indica si el error se puede resolver reponiendo ingredientes o descalcificando la maquina
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EspressoMachineError::NoBeans { .. }
                | EspressoMachineError::NoWater { .. }
                | EspressoMachineError::DescaleNeeded { .. }
        )
    }
}
