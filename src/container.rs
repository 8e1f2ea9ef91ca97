//! Contenedores de ingredientes de la cafetera (granos y agua)
use std::marker::PhantomData;

use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    constants::DECIMAL_PRECISION,
    errors::{EspressoMachineError, Result},
};

/// Tipo de recurso que guarda un contenedor
pub trait Resource {
    const NAME: &'static str;
    const UNIT: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beans;

impl Resource for Beans {
    const NAME: &'static str = "beans";
    const UNIT: &'static str = "spoons";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Water;

impl Resource for Water {
    const NAME: &'static str = "water";
    const UNIT: &'static str = "litres";
}

/// Operaciones comunes a todos los contenedores.
/// El nivel siempre se mantiene entre 0 y la capacidad.
pub trait ResourceContainer {
    /// Agrega `amount` al contenedor. Falla sin modificar nada si no entra completo.
    fn add(&mut self, amount: Decimal) -> Result<()>;

    /// Saca `amount` del contenedor y lo devuelve. Falla sin modificar nada si no alcanza.
    fn consume(&mut self, amount: Decimal) -> Result<Decimal>;

    /// Cantidad que hay actualmente en el contenedor
    fn query(&self) -> Decimal;

    fn capacity(&self) -> Decimal;

    /// Total consumido desde que se creo el contenedor
    fn consumed(&self) -> Decimal;

    fn space_left(&self) -> Decimal {
        self.capacity() - self.query()
    }
}

/// Contenedor de capacidad fija. Las cuentas se truncan a `precision` decimales.
#[derive(Debug, Clone)]
pub struct Container<R: Resource> {
    capacity: Decimal,
    remaining: Decimal,
    consumed: Decimal,
    precision: u32,
    resource: PhantomData<R>,
}

pub type BeansContainer = Container<Beans>;
pub type WaterContainer = Container<Water>;

impl<R: Resource> Container<R> {
    pub fn new(capacity: Decimal) -> Container<R> {
        Container::with_precision(capacity, DECIMAL_PRECISION)
    }

    pub fn with_precision(capacity: Decimal, precision: u32) -> Container<R> {
        Container {
            capacity: truncate(capacity.max(Decimal::ZERO), precision),
            remaining: Decimal::ZERO,
            consumed: Decimal::ZERO,
            precision,
            resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceContainer for Container<R> {
    fn add(&mut self, amount: Decimal) -> Result<()> {
        ensure_not_negative(amount)?;
        let space_left = self.space_left();
        if amount > space_left {
            return Err(EspressoMachineError::ContainerFull {
                requested: amount,
                available: space_left,
                unit: R::UNIT,
            });
        }
        self.remaining = truncate(self.remaining + amount, self.precision);
        debug!("[CONTAINER] Added {} {} of {}, there is {}", amount, R::UNIT, R::NAME, self.remaining);
        Ok(())
    }

    fn consume(&mut self, amount: Decimal) -> Result<Decimal> {
        ensure_not_negative(amount)?;
        if amount > self.remaining {
            return Err(EspressoMachineError::InsufficientResource {
                resource: R::NAME,
                requested: amount,
                available: self.remaining,
            });
        }
        self.remaining = truncate(self.remaining - amount, self.precision);
        self.consumed = truncate(self.consumed.saturating_add(amount), self.precision);
        debug!("[CONTAINER] Used {} {} of {}, remains {}", amount, R::UNIT, R::NAME, self.remaining);
        Ok(amount)
    }

    fn query(&self) -> Decimal {
        self.remaining
    }

    fn capacity(&self) -> Decimal {
        self.capacity
    }

    fn consumed(&self) -> Decimal {
        self.consumed
    }
}

/// Los montos se comparan sin truncar; solo se truncan los niveles guardados
pub fn ensure_not_negative(amount: Decimal) -> Result<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(EspressoMachineError::InvalidAmount(amount));
    }
    Ok(())
}

/// Trunca hacia cero a `precision` decimales
pub fn truncate(value: Decimal, precision: u32) -> Decimal {
    value.round_dp_with_strategy(precision, RoundingStrategy::ToZero)
}
