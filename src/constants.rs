//! Parametros de configuracion por defecto de la cafetera
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Litros de agua que usa un espresso
pub const LITRES_USED_PER_ESPRESSO: Decimal = dec!(0.05);

/// Litros de agua que consume un descalcificado
pub const LITRES_USED_PER_DESCALE: Decimal = dec!(1);

/// Litros de cafe que se pueden preparar antes de necesitar un descalcificado
pub const LITRES_PER_DESCALE: Decimal = dec!(5);

/// Cucharadas de granos que usa un espresso
pub const BEANS_USED_PER_ESPRESSO: Decimal = dec!(1);

/// Cantidad de decimales con la que se hacen todas las cuentas
pub const DECIMAL_PRECISION: u32 = 2;

/// Capacidad por defecto del contenedor de granos, en cucharadas
pub const BEANS_CONTAINER_CAPACITY: Decimal = dec!(50);

/// Capacidad por defecto del contenedor de agua, en litros
pub const WATER_CONTAINER_CAPACITY: Decimal = dec!(2);

/// Archivo de configuracion de la maquina
pub const MACHINE_CONFIG_PATH: &str = "machine.json";

/// Archivo con los pedidos a preparar
pub const ORDERS_PATH: &str = "orders.json";

/// Cantidad de pedidos aleatorios que se generan si no hay archivo de pedidos
pub const RANDOM_ORDERS: usize = 50;

/// Valor maximo aceptado para una tasa de consumo en la configuracion
pub const MAX_RATE: Decimal = dec!(1000000);

/// Maxima cantidad de decimales que puede representar un `Decimal`
pub const MAX_DECIMAL_PRECISION: u32 = 28;
