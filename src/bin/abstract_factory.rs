// Abstract Factory: two factories, two product families.

use creational_patterns::abstract_factory::{
    exercise, AbstractFactory, ConcreteFactory1, ConcreteFactory2, Family,
};
use creational_patterns::console;

/// One factory at a time, spelled out.
fn explicit_transcript() -> Vec<String> {
    let mut lines = Vec::new();

    let factory1 = ConcreteFactory1;
    lines.push(factory1.create_product_a().usage());
    lines.push(factory1.create_product_b().usage());

    let factory2 = ConcreteFactory2;
    lines.push(factory2.create_product_a().usage());
    lines.push(factory2.create_product_b().usage());

    lines
}

/// Same result, driven by a list of factories.
fn looped_transcript() -> Vec<String> {
    let factories: Vec<Box<dyn AbstractFactory>> =
        Family::ALL.iter().map(|family| family.factory()).collect();
    factories
        .iter()
        .flat_map(|factory| exercise(factory.as_ref()))
        .collect()
}

fn main() {
    console::heading("Abstract Factory Pattern: one factory at a time");
    console::lines(explicit_transcript());
    println!();
    console::heading("Abstract Factory Pattern: factory list");
    console::lines(looped_transcript());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_flows_agree() {
        let expected = vec![
            "Using ConcreteProductA1",
            "Using ConcreteProductB1",
            "Using ConcreteProductA2",
            "Using ConcreteProductB2",
        ];
        assert_eq!(explicit_transcript(), expected);
        assert_eq!(looped_transcript(), expected);
    }
}
