// Prototype: objects produced by cloning existing ones.

use creational_patterns::console;
use creational_patterns::prototype::{
    ConcretePrototypeA, ConcretePrototypeB, Prototype, PrototypeRegistry,
};
use creational_patterns::Result;

fn transcript() -> Result<Vec<String>> {
    let mut lines = Vec::new();

    let prototype_a = ConcretePrototypeA::new("Prototype A Data");
    let clone_a = prototype_a.clone_box();
    lines.push(clone_a.show_data());

    let prototype_b = ConcretePrototypeB::new("Prototype B Data");
    let clone_b = prototype_b.clone_box();
    lines.push(clone_b.show_data());

    let mut registry = PrototypeRegistry::new();
    registry.register("sensor", Box::new(ConcretePrototypeA::new("Sensor Defaults")));
    registry.register("actuator", Box::new(ConcretePrototypeB::new("Actuator Defaults")));

    let mut tuned = registry.spawn("sensor")?;
    let tuned_data = format!("{} (tuned)", tuned.data());
    tuned.set_data(tuned_data);
    lines.push(tuned.show_data());

    for name in registry.names() {
        lines.push(registry.spawn(name)?.show_data());
    }

    Ok(lines)
}

fn main() -> Result<()> {
    console::heading("Prototype Pattern");
    console::lines(transcript()?);
    Ok(())
}
