//! Estado que muestra la pantalla de la maquina
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineStatus {
    AddWater,
    DescaleNeeded,
    AddBeansAndWater,
    AddBeans,
    EspressosLeft(u64),
}

impl Display for MachineStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MachineStatus::AddWater => write!(f, "Add water"),
            MachineStatus::DescaleNeeded => write!(f, "Descale needed"),
            MachineStatus::AddBeansAndWater => write!(f, "Add beans and water"),
            MachineStatus::AddBeans => write!(f, "Add beans"),
            MachineStatus::EspressosLeft(espressos) => write!(f, "{} Espressos Left", espressos),
        }
    }
}
