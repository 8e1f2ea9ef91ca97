//! Configuracion de la maquina: capacidades, tipo de suministro de agua y tasas de consumo
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    constants::{
        BEANS_CONTAINER_CAPACITY, BEANS_USED_PER_ESPRESSO, DECIMAL_PRECISION, LITRES_PER_DESCALE,
        LITRES_USED_PER_DESCALE, LITRES_USED_PER_ESPRESSO, MAX_DECIMAL_PRECISION, MAX_RATE,
        WATER_CONTAINER_CAPACITY,
    },
    container::{BeansContainer, WaterContainer},
    errors::{EspressoMachineError, Result},
    espresso_machine::EspressoMachine,
};

/// Tasas de consumo de la maquina
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MachineRates {
    pub litres_per_espresso: Decimal,
    /// Litros de cafe a partir de los cuales hay que descalcificar
    pub litres_per_descale: Decimal,
    /// Litros de agua que usa un descalcificado
    pub litres_used_per_descale: Decimal,
    pub beans_per_espresso: Decimal,
    pub decimal_precision: u32,
}

impl Default for MachineRates {
    fn default() -> Self {
        MachineRates {
            litres_per_espresso: LITRES_USED_PER_ESPRESSO,
            litres_per_descale: LITRES_PER_DESCALE,
            litres_used_per_descale: LITRES_USED_PER_DESCALE,
            beans_per_espresso: BEANS_USED_PER_ESPRESSO,
            decimal_precision: DECIMAL_PRECISION,
        }
    }
}

impl MachineRates {
    /// Las tasas por espresso y el limite de descalcificado tienen que ser positivos,
    /// el agua del descalcificado puede ser cero. Ninguna puede superar `MAX_RATE`.
    pub fn validate(&self) -> Result<()> {
        check_rate("litres_per_espresso", self.litres_per_espresso, false)?;
        check_rate("litres_per_descale", self.litres_per_descale, false)?;
        check_rate("litres_used_per_descale", self.litres_used_per_descale, true)?;
        check_rate("beans_per_espresso", self.beans_per_espresso, false)?;
        if self.decimal_precision > MAX_DECIMAL_PRECISION {
            return Err(EspressoMachineError::ConfigurationFile(format!(
                "decimal_precision must be at most {}, got {}",
                MAX_DECIMAL_PRECISION, self.decimal_precision
            )));
        }
        Ok(())
    }
}

fn check_rate(name: &str, value: Decimal, zero_allowed: bool) -> Result<()> {
    let too_small = if zero_allowed {
        value.is_sign_negative() && !value.is_zero()
    } else {
        value <= Decimal::ZERO
    };
    if too_small || value > MAX_RATE {
        return Err(EspressoMachineError::ConfigurationFile(format!(
            "{} must be {} and at most {}, got {}",
            name,
            if zero_allowed { "non negative" } else { "positive" },
            MAX_RATE,
            value
        )));
    }
    Ok(())
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MachineConfig {
    pub mains_supply: bool,
    pub beans_container_capacity: Decimal,
    pub water_container_capacity: Decimal,
    pub rates: MachineRates,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            mains_supply: false,
            beans_container_capacity: BEANS_CONTAINER_CAPACITY,
            water_container_capacity: WATER_CONTAINER_CAPACITY,
            rates: MachineRates::default(),
        }
    }
}

impl MachineConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<MachineConfig> {
        let file = File::open(path)
            .map_err(|err| EspressoMachineError::ConfigurationFile(err.to_string()))?;
        let reader = BufReader::new(file);
        let config: MachineConfig = serde_json::from_reader(reader)
            .map_err(|err| EspressoMachineError::ConfigurationFile(err.to_string()))?;
        config.rates.validate()?;
        debug!("[CONFIG] Loaded {:?}", config);
        Ok(config)
    }

    /// Arma la maquina con los contenedores que necesita segun su suministro de agua
    pub fn build_machine(&self) -> EspressoMachine {
        let precision = self.rates.decimal_precision;
        let mut machine = EspressoMachine::with_rates(self.mains_supply, self.rates.clone());
        machine.set_beans_container(BeansContainer::with_precision(
            self.beans_container_capacity,
            precision,
        ));
        if !self.mains_supply {
            machine.set_water_container(WaterContainer::with_precision(
                self.water_container_capacity,
                precision,
            ));
        }
        machine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn should_use_default_rates() {
        let rates = MachineRates::default();
        assert_eq!(dec!(0.05), rates.litres_per_espresso);
        assert_eq!(dec!(5), rates.litres_per_descale);
        assert_eq!(dec!(1), rates.litres_used_per_descale);
        assert_eq!(dec!(1), rates.beans_per_espresso);
        assert_eq!(2, rates.decimal_precision);
    }

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let config: MachineConfig =
            serde_json::from_str(r#"{ "mains_supply": true, "rates": { "beans_per_espresso": "2" } }"#)
                .unwrap();
        assert_eq!(true, config.mains_supply);
        assert_eq!(dec!(50), config.beans_container_capacity);
        assert_eq!(dec!(2), config.rates.beans_per_espresso);
        assert_eq!(dec!(0.05), config.rates.litres_per_espresso);
    }

    #[test]
    fn should_load_the_configuration_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "beans_container_capacity": "100", "water_container_capacity": "3" }}"#
        )
        .unwrap();

        let config = MachineConfig::load(file.path()).unwrap();
        assert_eq!(dec!(100), config.beans_container_capacity);
        assert_eq!(dec!(3), config.water_container_capacity);
        assert_eq!(false, config.mains_supply);
    }

    #[test]
    fn should_fail_when_the_file_does_not_exist() {
        let result = MachineConfig::load("this-file-does-not-exist.json");
        assert_eq!(
            true,
            matches!(result, Err(EspressoMachineError::ConfigurationFile(_)))
        );
    }

    #[test]
    fn should_accept_the_default_rates() {
        assert_eq!(true, MachineRates::default().validate().is_ok());
    }

    #[test]
    fn should_reject_negative_zero_and_huge_rates() {
        let negative = MachineRates {
            beans_per_espresso: dec!(-1),
            ..MachineRates::default()
        };
        let zero = MachineRates {
            litres_per_espresso: dec!(0),
            ..MachineRates::default()
        };
        let huge = MachineRates {
            beans_per_espresso: Decimal::MAX,
            ..MachineRates::default()
        };
        let no_water_descale = MachineRates {
            litres_used_per_descale: dec!(0),
            ..MachineRates::default()
        };
        assert_eq!(true, negative.validate().is_err());
        assert_eq!(true, zero.validate().is_err());
        assert_eq!(true, huge.validate().is_err());
        assert_eq!(true, no_water_descale.validate().is_ok());
    }

    #[test]
    fn should_not_load_a_configuration_with_invalid_rates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "rates": {{ "beans_per_espresso": "79228162514264337593543950335" }} }}"#
        )
        .unwrap();

        let result = MachineConfig::load(file.path());
        assert_eq!(
            true,
            matches!(result, Err(EspressoMachineError::ConfigurationFile(_)))
        );
    }

    #[test]
    fn should_build_a_machine_with_both_containers() {
        let machine = MachineConfig::default().build_machine();
        assert_eq!(true, machine.has_beans_container());
        assert_eq!(true, machine.has_water_container());
        assert_eq!(false, machine.is_on_mains());
    }

    #[test]
    fn should_build_a_mains_machine_without_water_container() {
        let config = MachineConfig {
            mains_supply: true,
            ..MachineConfig::default()
        };
        let machine = config.build_machine();
        assert_eq!(true, machine.has_beans_container());
        assert_eq!(false, machine.has_water_container());
        assert_eq!(true, machine.is_on_mains());
    }
}
