// Singleton: every `instance()` call aliases the same lazily created record.

use creational_patterns::console;
use creational_patterns::singleton::SingletonInstance;

fn transcript() -> Vec<String> {
    let mut lines = Vec::new();

    let singleton1 = SingletonInstance::instance();
    lines.push(format!("Singleton1 Data: {}", singleton1.data()));

    singleton1.set_data("Updated Singleton Data from singleton1");

    let singleton2 = SingletonInstance::instance();
    lines.push(format!("Singleton2 Data: {}", singleton2.data()));

    singleton2.set_data("Updated Singleton Data from singleton2");

    let singleton3 = SingletonInstance::instance();
    lines.push(format!("Singleton3 Data: {}", singleton3.data()));

    // Earlier handles see the latest write too.
    lines.push(format!("Singleton2 Data: {}", singleton2.data()));
    lines.push(format!("Singleton1 Data: {}", singleton1.data()));

    let same = std::ptr::eq(singleton1, singleton2) && std::ptr::eq(singleton2, singleton3);
    lines.push(format!("Same instance: {same}"));
    lines
}

fn main() {
    console::heading("Singleton Pattern");
    console::lines(transcript());
}
