use crate::genre::Genre;
use crate::platform::Platform;

/// A stored game record.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    /// Row id assigned by the store.
    pub id: i64,
    pub name: String,
    pub genre: Genre,
    pub platform: Platform,
    pub price: f64,
    /// Units in stock.
    pub quantity: i64,
    pub supplier_name: String,
    pub supplier_phone: Option<String>,
}

/// A game that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewGame {
    pub name: String,
    pub genre: Genre,
    pub platform: Platform,
    pub price: f64,
    pub quantity: i64,
    pub supplier_name: String,
    pub supplier_phone: Option<String>,
}

impl NewGame {
    pub fn new(name: impl Into<String>, supplier_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supplier_name: supplier_name.into(),
            ..Self::default()
        }
    }

    pub fn genre(mut self, genre: Genre) -> Self {
        self.genre = genre;
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn supplier_phone(mut self, phone: impl Into<String>) -> Self {
        self.supplier_phone = Some(phone.into());
        self
    }
}

impl Game {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}
