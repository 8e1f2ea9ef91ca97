//! Reponedor de la cafetera. Corrige el estado de la maquina segun lo que muestra su pantalla.
use log::{debug, info};

use crate::{
    container::ResourceContainer,
    errors::Result,
    espresso_machine::EspressoMachine,
    statistics::Statistics,
    status::MachineStatus,
};

/// Cantidad maxima de acciones seguidas que intenta el reponedor
const MAX_REPLENISH_STEPS: usize = 4;

#[derive(Debug, Default)]
pub struct Replenisher;

impl Replenisher {
    pub fn new() -> Replenisher {
        Replenisher
    }

    /// Deja la maquina lista para preparar `espressos_needed` espressos:
    /// llena los contenedores y descalcifica segun lo pida el estado.
    pub fn replenish(
        &self,
        machine: &mut EspressoMachine,
        espressos_needed: u64,
        statistics: &mut Statistics,
    ) -> Result<()> {
        for _ in 0..MAX_REPLENISH_STEPS {
            let status = machine.status();
            debug!("[REPLENISHER] Machine status: {}", status);
            match status {
                MachineStatus::AddBeansAndWater => {
                    self.fill_beans(machine, statistics)?;
                    self.fill_water(machine, statistics)?;
                }
                MachineStatus::AddBeans => self.fill_beans(machine, statistics)?,
                MachineStatus::AddWater => self.fill_water(machine, statistics)?,
                MachineStatus::DescaleNeeded => {
                    machine.descale()?;
                    statistics.record_descale();
                    info!("[REPLENISHER] Descaled the machine");
                }
                MachineStatus::EspressosLeft(left) if left < espressos_needed => {
                    self.fill_beans(machine, statistics)?;
                    self.fill_water(machine, statistics)?;
                    return Ok(());
                }
                MachineStatus::EspressosLeft(_) => return Ok(()),
            }
        }
        Ok(())
    }

    fn fill_beans(&self, machine: &mut EspressoMachine, statistics: &mut Statistics) -> Result<()> {
        let space_left = match machine.beans_container() {
            Some(container) => container.space_left(),
            None => return Ok(()),
        };
        if space_left.is_zero() {
            return Ok(());
        }
        machine.add_beans(space_left)?;
        statistics.record_bean_refill();
        info!("[REPLENISHER] Replenished beans with {} spoons", space_left);
        Ok(())
    }

    fn fill_water(&self, machine: &mut EspressoMachine, statistics: &mut Statistics) -> Result<()> {
        if machine.is_on_mains() {
            return Ok(());
        }
        let space_left = match machine.water_container() {
            Some(container) => container.space_left(),
            None => return Ok(()),
        };
        if space_left.is_zero() {
            return Ok(());
        }
        machine.add_water(space_left)?;
        statistics.record_water_refill();
        info!("[REPLENISHER] Replenished water with {} litres", space_left);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine_config::MachineConfig;
    use rust_decimal_macros::dec;

    #[test]
    fn should_fill_an_empty_machine() {
        let mut machine = MachineConfig::default().build_machine();
        let mut statistics = Statistics::new();

        Replenisher::new().replenish(&mut machine, 1, &mut statistics).unwrap();

        assert_eq!(dec!(50), machine.get_beans().unwrap());
        assert_eq!(dec!(2), machine.get_water().unwrap());
        assert_eq!(1, statistics.bean_refills);
        assert_eq!(1, statistics.water_refills);
    }

    #[test]
    fn should_top_up_when_there_are_not_enough_espressos_left() {
        let mut machine = MachineConfig::default().build_machine();
        machine.add_beans(dec!(1)).unwrap();
        machine.add_water(dec!(2)).unwrap();
        let mut statistics = Statistics::new();

        Replenisher::new().replenish(&mut machine, 2, &mut statistics).unwrap();

        assert_eq!(dec!(50), machine.get_beans().unwrap());
        assert_eq!(0, statistics.water_refills);
    }

    #[test]
    fn should_do_nothing_when_the_machine_is_ready() {
        let mut machine = MachineConfig::default().build_machine();
        machine.add_beans(dec!(10)).unwrap();
        machine.add_water(dec!(1)).unwrap();
        let mut statistics = Statistics::new();

        Replenisher::new().replenish(&mut machine, 2, &mut statistics).unwrap();

        assert_eq!(dec!(10), machine.get_beans().unwrap());
        assert_eq!(dec!(1), machine.get_water().unwrap());
        assert_eq!(Statistics::new(), statistics);
    }

    #[test]
    fn should_add_water_before_descaling() {
        let mut machine = MachineConfig::default().build_machine();
        let replenisher = Replenisher::new();
        let mut statistics = Statistics::new();
        while machine.descale_debt() < dec!(5) {
            replenisher.replenish(&mut machine, 2, &mut statistics).unwrap();
            machine.make_double_espresso().unwrap();
        }
        machine.use_water(machine.get_water().unwrap()).unwrap();
        assert_eq!(MachineStatus::AddWater, machine.status());

        replenisher.replenish(&mut machine, 1, &mut statistics).unwrap();

        assert_eq!(dec!(0), machine.descale_debt());
        assert_eq!(dec!(1), machine.get_water().unwrap());
        assert_eq!(1, statistics.descales);
    }
}
