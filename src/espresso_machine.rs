//! Maquina de espresso. Combina el contenedor de granos con el de agua (o el agua de red)
//! y lleva la cuenta de los litros preparados desde el ultimo descalcificado.
use log::{debug, info};
use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::{
    container::{ensure_not_negative, truncate, BeansContainer, ResourceContainer, WaterContainer},
    errors::{EspressoMachineError, Result},
    machine_config::MachineRates,
    status::MachineStatus,
};

/// Representa a la maquina de espresso.
/// Los contenedores se conectan despues de crearla. Si la maquina esta conectada a la red de agua
/// (`mains_supply`) el agua es infinita y el contenedor de agua nunca se usa.
#[derive(Debug, Clone)]
pub struct EspressoMachine {
    beans_container: Option<BeansContainer>,
    water_container: Option<WaterContainer>,
    mains_supply: bool,
    litres_since_last_descale: Decimal,
    rates: MachineRates,
}

impl EspressoMachine {
    pub fn new(mains_supply: bool) -> EspressoMachine {
        EspressoMachine::with_rates(mains_supply, MachineRates::default())
    }

    pub fn with_rates(mains_supply: bool, rates: MachineRates) -> EspressoMachine {
        EspressoMachine {
            beans_container: None,
            water_container: None,
            mains_supply,
            litres_since_last_descale: Decimal::ZERO,
            rates,
        }
    }

    pub fn set_beans_container(&mut self, container: BeansContainer) {
        self.beans_container = Some(container);
    }

    pub fn set_water_container(&mut self, container: WaterContainer) {
        self.water_container = Some(container);
    }

    pub fn has_beans_container(&self) -> bool {
        self.beans_container.is_some()
    }

    pub fn has_water_container(&self) -> bool {
        self.water_container.is_some()
    }

    pub fn beans_container(&self) -> Option<&BeansContainer> {
        self.beans_container.as_ref()
    }

    pub fn water_container(&self) -> Option<&WaterContainer> {
        self.water_container.as_ref()
    }

    pub fn is_on_mains(&self) -> bool {
        self.mains_supply
    }

    pub fn rates(&self) -> &MachineRates {
        &self.rates
    }

    /// Litros de cafe preparados desde el ultimo descalcificado
    pub fn descale_debt(&self) -> Decimal {
        self.litres_since_last_descale
    }

    pub fn add_beans(&mut self, spoons: Decimal) -> Result<()> {
        self.beans_container_mut()?.add(spoons)
    }

    pub fn use_beans(&mut self, spoons: Decimal) -> Result<Decimal> {
        self.beans_container_mut()?.consume(spoons)
    }

    pub fn get_beans(&self) -> Result<Decimal> {
        self.beans_container
            .as_ref()
            .map(|container| container.query())
            .ok_or_else(no_beans_container)
    }

    pub fn add_water(&mut self, litres: Decimal) -> Result<()> {
        if self.mains_supply {
            return Err(EspressoMachineError::MachineConfiguration(String::from(
                "Water cannot be added as the machine is on mains supply",
            )));
        }
        self.water_container_mut()?.add(litres)
    }

    /// Usa `litres` de agua. Conectada a la red siempre hay agua y no se modifica nada.
    pub fn use_water(&mut self, litres: Decimal) -> Result<Decimal> {
        if self.mains_supply {
            ensure_not_negative(litres)?;
            return Ok(litres);
        }
        self.water_container_mut()?.consume(litres)
    }

    pub fn get_water(&self) -> Result<Decimal> {
        if self.mains_supply {
            return Err(EspressoMachineError::MachineOnMains);
        }
        self.water_container
            .as_ref()
            .map(|container| container.query())
            .ok_or_else(no_water_container)
    }

    /// Descalcifica la maquina usando el agua configurada y reinicia la cuenta de litros
    pub fn descale(&mut self) -> Result<()> {
        let litres = self.rates.litres_used_per_descale;
        self.use_water(litres).map_err(|err| match err {
            EspressoMachineError::InsufficientResource { available, .. } => {
                EspressoMachineError::NoWater {
                    reason: String::from("Not enough water to descale"),
                    remaining: available,
                }
            }
            other => other,
        })?;
        info!(
            "[MACHINE] Descaled after {} litres, used {} litres of water",
            self.litres_since_last_descale, litres
        );
        self.litres_since_last_descale = Decimal::ZERO;
        Ok(())
    }

    pub fn make_espresso(&mut self) -> Result<Decimal> {
        self.make_espressos(1)
    }

    pub fn make_double_espresso(&mut self) -> Result<Decimal> {
        self.make_espressos(2)
    }

    /// Prepara `quantity` espressos y devuelve los litros de cafe preparados.
    /// Primero se usan los granos y despues el agua: si falta agua los granos ya usados no se devuelven.
    fn make_espressos(&mut self, quantity: u32) -> Result<Decimal> {
        if self.needs_descale() {
            return Err(EspressoMachineError::DescaleNeeded {
                litres: self.litres_since_last_descale,
            });
        }

        let quantity = Decimal::from(quantity);
        let spoons = scaled_rate(self.rates.beans_per_espresso, quantity)?;
        let litres = scaled_rate(self.rates.litres_per_espresso, quantity)?;
        self.use_beans(spoons).map_err(|err| match err {
            EspressoMachineError::InsufficientResource { available, .. } => {
                EspressoMachineError::NoBeans { remaining: available }
            }
            other => other,
        })?;

        self.use_water(litres).map_err(|err| match err {
            EspressoMachineError::InsufficientResource { available, .. } => {
                EspressoMachineError::NoWater {
                    reason: String::from("Not enough water to make an espresso"),
                    remaining: available,
                }
            }
            other => other,
        })?;

        let litres_of_coffee = truncate(litres, self.rates.decimal_precision);
        self.litres_since_last_descale = truncate(
            self.litres_since_last_descale.saturating_add(litres_of_coffee),
            self.rates.decimal_precision,
        );
        debug!(
            "[MACHINE] Made {} espresso(s), {} litres since last descale",
            quantity, self.litres_since_last_descale
        );
        Ok(litres_of_coffee)
    }

    /// Estado a mostrar en la pantalla, en orden de prioridad
    pub fn status(&self) -> MachineStatus {
        let beans = self.beans_available();
        let water = self.water_available();
        let lacks_water = |needed: Decimal| water.map_or(false, |litres| litres < needed);

        if self.needs_descale() {
            if lacks_water(self.rates.litres_used_per_descale) {
                return MachineStatus::AddWater;
            }
            return MachineStatus::DescaleNeeded;
        }

        let lacks_beans = beans < self.rates.beans_per_espresso;
        match (lacks_beans, lacks_water(self.rates.litres_per_espresso)) {
            (true, true) => MachineStatus::AddBeansAndWater,
            (true, false) => MachineStatus::AddBeans,
            (false, true) => MachineStatus::AddWater,
            (false, false) => {
                let from_beans = espressos_worth(beans, self.rates.beans_per_espresso);
                let espressos_left = match water {
                    Some(litres) => {
                        from_beans.min(espressos_worth(litres, self.rates.litres_per_espresso))
                    }
                    None => from_beans,
                };
                MachineStatus::EspressosLeft(espressos_left)
            }
        }
    }

    fn needs_descale(&self) -> bool {
        self.litres_since_last_descale >= self.rates.litres_per_descale
    }

    fn beans_available(&self) -> Decimal {
        self.get_beans().unwrap_or(Decimal::ZERO)
    }

    /// `None` cuando la maquina esta conectada a la red (agua sin limite)
    fn water_available(&self) -> Option<Decimal> {
        if self.mains_supply {
            return None;
        }
        Some(self.get_water().unwrap_or(Decimal::ZERO))
    }

    fn beans_container_mut(&mut self) -> Result<&mut BeansContainer> {
        self.beans_container.as_mut().ok_or_else(no_beans_container)
    }

    fn water_container_mut(&mut self) -> Result<&mut WaterContainer> {
        self.water_container.as_mut().ok_or_else(no_water_container)
    }
}

fn no_beans_container() -> EspressoMachineError {
    EspressoMachineError::MachineConfiguration(String::from(
        "The machine hasn't got a beans container",
    ))
}

fn no_water_container() -> EspressoMachineError {
    EspressoMachineError::MachineConfiguration(String::from(
        "The machine hasn't got a water container",
    ))
}

fn scaled_rate(rate: Decimal, quantity: Decimal) -> Result<Decimal> {
    rate.checked_mul(quantity).ok_or_else(|| {
        EspressoMachineError::MachineConfiguration(format!(
            "Rate {} is too big to make {} espressos",
            rate, quantity
        ))
    })
}

fn espressos_worth(available: Decimal, per_espresso: Decimal) -> u64 {
    available
        .checked_div(per_espresso)
        .and_then(|espressos| espressos.floor().to_u64())
        .unwrap_or(u64::MAX)
}
