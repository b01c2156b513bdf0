// Factory Method: each creator picks the product it builds.

use creational_patterns::console;
use creational_patterns::factory_method::all_creators;

fn transcript() -> Vec<String> {
    all_creators().iter().map(|creator| creator.operation()).collect()
}

fn main() {
    console::heading("Factory Method Pattern");
    console::lines(transcript());
}
