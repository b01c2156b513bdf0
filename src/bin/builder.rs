// Builder: one director, interchangeable builders, plus profiles from TOML.

use std::process::ExitCode;

use creational_patterns::builder::{
    AdvancedPhoneBuilder, BasicPhoneBuilder, PhoneDirector, ProfileBuilder,
};
use creational_patterns::config::PhoneCatalog;
use creational_patterns::console;
use creational_patterns::Result;

const PHONE_PROFILES: &str = include_str!("../../config/phones.toml");

fn transcript(catalog: &PhoneCatalog) -> Vec<String> {
    let director = PhoneDirector::new();
    let mut lines = Vec::new();

    let basic_phone = director.construct(&mut BasicPhoneBuilder::new());
    lines.push(format!("Basic Phone: {}", basic_phone.about()));

    let advanced_phone = director.construct(&mut AdvancedPhoneBuilder::new());
    lines.push(format!("Advanced Phone: {}", advanced_phone.about()));

    for profile in &catalog.phones {
        let mut builder = ProfileBuilder::new(profile);
        let phone = director.construct(&mut builder);
        lines.push(format!("{} Phone: {}", builder.profile_name(), phone.about()));
    }

    lines
}

fn run() -> Result<()> {
    let catalog = PhoneCatalog::from_toml_str(PHONE_PROFILES)?;
    console::heading("Builder Pattern");
    console::lines(transcript(&catalog));
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_profiles_parse() {
        let catalog = PhoneCatalog::from_toml_str(PHONE_PROFILES).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_transcript() {
        let catalog = PhoneCatalog::from_toml_str(PHONE_PROFILES).unwrap();
        let lines = transcript(&catalog);

        assert_eq!(
            lines[0],
            "Basic Phone: Generic Phone Data | Basic Screen | Basic Battery | Basic Camera"
        );
        assert_eq!(
            lines[1],
            "Advanced Phone: Generic Phone Data | Advanced Screen with High Resolution \
             | Long-lasting Advanced Battery | High Megapixel Advanced Camera"
        );
        assert_eq!(lines.len(), 2 + catalog.len());
        assert!(lines[2].starts_with("Rugged Phone: Generic Phone Data | "));
    }
}
