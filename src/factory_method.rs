//! Factory Method: creators defer the choice of product to an overridable method.

use crate::error::{PatternError, Result};
use crate::product::{concrete_product, Product};

concrete_product!(ConcreteProductA, ConcreteProductB, ConcreteProductC);

pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    /// Work that depends on whatever product the creator decides to build.
    fn operation(&self) -> String {
        self.factory_method().usage()
    }
}

pub struct ConcreteCreatorA;

impl Creator for ConcreteCreatorA {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductA)
    }
}

pub struct ConcreteCreatorB;

impl Creator for ConcreteCreatorB {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductB)
    }
}

pub struct ConcreteCreatorC;

impl Creator for ConcreteCreatorC {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductC)
    }
}

pub fn all_creators() -> Vec<Box<dyn Creator>> {
    vec![
        Box::new(ConcreteCreatorA),
        Box::new(ConcreteCreatorB),
        Box::new(ConcreteCreatorC),
    ]
}

pub fn creator_for(name: &str) -> Result<Box<dyn Creator>> {
    match name.trim().to_ascii_uppercase().as_str() {
        "A" => Ok(Box::new(ConcreteCreatorA)),
        "B" => Ok(Box::new(ConcreteCreatorB)),
        "C" => Ok(Box::new(ConcreteCreatorC)),
        _ => Err(PatternError::unknown("creator", name)),
    }
}
