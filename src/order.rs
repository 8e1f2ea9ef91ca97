use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Drink {
    Espresso,
    DoubleEspresso,
}

impl Drink {
    /// Cantidad de espressos que lleva la bebida
    pub fn espressos(&self) -> u64 {
        match self {
            Drink::Espresso => 1,
            Drink::DoubleEspresso => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: usize,
    pub drink: Drink,
}

impl Order {
    pub fn new(id: usize, drink: Drink) -> Order {
        Order { id, drink }
    }
}
