//! Abstract Factory: each factory builds one consistent family of products.

use std::fmt;
use std::str::FromStr;

use crate::error::{PatternError, Result};
use crate::product::{concrete_product, Product};

concrete_product!(
    ConcreteProductA1,
    ConcreteProductA2,
    ConcreteProductB1,
    ConcreteProductB2,
);

pub trait AbstractFactory {
    fn create_product_a(&self) -> Box<dyn Product>;
    fn create_product_b(&self) -> Box<dyn Product>;
}

pub struct ConcreteFactory1;

impl AbstractFactory for ConcreteFactory1 {
    fn create_product_a(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductA1)
    }

    fn create_product_b(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductB1)
    }
}

pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory2 {
    fn create_product_a(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductA2)
    }

    fn create_product_b(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductB2)
    }
}

/// The closed set of product families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    One,
    Two,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::One, Family::Two];

    pub fn factory(self) -> Box<dyn AbstractFactory> {
        match self {
            Family::One => Box::new(ConcreteFactory1),
            Family::Two => Box::new(ConcreteFactory2),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::One => write!(f, "ConcreteFactory1"),
            Family::Two => write!(f, "ConcreteFactory2"),
        }
    }
}

impl FromStr for Family {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "one" => Ok(Family::One),
            "2" | "two" => Ok(Family::Two),
            _ => Err(PatternError::unknown("product family", s)),
        }
    }
}

/// Usage lines for product A then product B of one factory.
pub fn exercise(factory: &dyn AbstractFactory) -> Vec<String> {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();
    vec![product_a.usage(), product_b.usage()]
}
