//! Builder: a director runs the same assembly steps against any `PhoneBuilder`.

use std::mem;

use crate::config::PhoneProfile;

pub const GENERIC_PHONE_DATA: &str = "Generic Phone Data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    data: String,
}

impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}

impl Phone {
    pub fn new() -> Self {
        Self {
            data: GENERIC_PHONE_DATA.to_string(),
        }
    }

    pub fn about(&self) -> &str {
        &self.data
    }

    pub fn append(&mut self, part: &str) {
        self.data.push_str(" | ");
        self.data.push_str(part);
    }
}

pub trait PhoneBuilder {
    fn build_screen(&mut self);
    fn build_battery(&mut self);
    fn build_camera(&mut self);

    /// Hands over the assembled phone and starts the next one from scratch.
    fn take_phone(&mut self) -> Phone;
}

#[derive(Debug, Default)]
pub struct BasicPhoneBuilder {
    phone: Phone,
}

impl BasicPhoneBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhoneBuilder for BasicPhoneBuilder {
    fn build_screen(&mut self) {
        self.phone.append("Basic Screen");
    }

    fn build_battery(&mut self) {
        self.phone.append("Basic Battery");
    }

    fn build_camera(&mut self) {
        self.phone.append("Basic Camera");
    }

    fn take_phone(&mut self) -> Phone {
        mem::take(&mut self.phone)
    }
}

#[derive(Debug, Default)]
pub struct AdvancedPhoneBuilder {
    phone: Phone,
}

impl AdvancedPhoneBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhoneBuilder for AdvancedPhoneBuilder {
    fn build_screen(&mut self) {
        self.phone.append("Advanced Screen with High Resolution");
    }

    fn build_battery(&mut self) {
        self.phone.append("Long-lasting Advanced Battery");
    }

    fn build_camera(&mut self) {
        self.phone.append("High Megapixel Advanced Camera");
    }

    fn take_phone(&mut self) -> Phone {
        mem::take(&mut self.phone)
    }
}

/// Builds whatever parts a configured profile names.
#[derive(Debug)]
pub struct ProfileBuilder<'a> {
    profile: &'a PhoneProfile,
    phone: Phone,
}

impl<'a> ProfileBuilder<'a> {
    pub fn new(profile: &'a PhoneProfile) -> Self {
        Self {
            profile,
            phone: Phone::new(),
        }
    }

    pub fn profile_name(&self) -> &str {
        &self.profile.name
    }
}

impl PhoneBuilder for ProfileBuilder<'_> {
    fn build_screen(&mut self) {
        self.phone.append(&self.profile.screen);
    }

    fn build_battery(&mut self) {
        self.phone.append(&self.profile.battery);
    }

    fn build_camera(&mut self) {
        self.phone.append(&self.profile.camera);
    }

    fn take_phone(&mut self) -> Phone {
        mem::take(&mut self.phone)
    }
}

#[derive(Debug, Default)]
pub struct PhoneDirector;

impl PhoneDirector {
    pub fn new() -> Self {
        Self
    }

    pub fn construct(&self, builder: &mut dyn PhoneBuilder) -> Phone {
        builder.build_screen();
        builder.build_battery();
        builder.build_camera();
        builder.take_phone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_phone_is_generic() {
        assert_eq!(Phone::new().about(), GENERIC_PHONE_DATA);
    }

    #[test]
    fn test_basic_phone() {
        let phone = PhoneDirector::new().construct(&mut BasicPhoneBuilder::new());
        assert_eq!(
            phone.about(),
            "Generic Phone Data | Basic Screen | Basic Battery | Basic Camera"
        );
    }

    #[test]
    fn test_advanced_phone() {
        let phone = PhoneDirector::new().construct(&mut AdvancedPhoneBuilder::new());
        assert_eq!(
            phone.about(),
            "Generic Phone Data | Advanced Screen with High Resolution \
             | Long-lasting Advanced Battery | High Megapixel Advanced Camera"
        );
    }

    #[test]
    fn test_builder_is_reusable_after_take() {
        let director = PhoneDirector::new();
        let mut builder = BasicPhoneBuilder::new();
        let first = director.construct(&mut builder);
        let second = director.construct(&mut builder);
        assert_eq!(first, second);
    }

    #[test]
    fn test_manual_steps_follow_call_order() {
        let mut builder = BasicPhoneBuilder::new();
        builder.build_camera();
        builder.build_screen();
        assert_eq!(
            builder.take_phone().about(),
            "Generic Phone Data | Basic Camera | Basic Screen"
        );
        assert_eq!(builder.take_phone().about(), GENERIC_PHONE_DATA);
    }

    #[test]
    fn test_profile_builder() {
        let profile = PhoneProfile {
            name: "Field".to_string(),
            screen: "Matte Screen".to_string(),
            battery: "Big Battery".to_string(),
            camera: "Wide Camera".to_string(),
        };
        let mut builder = ProfileBuilder::new(&profile);
        assert_eq!(builder.profile_name(), "Field");

        let phone = PhoneDirector::new().construct(&mut builder);
        assert_eq!(
            phone.about(),
            "Generic Phone Data | Matte Screen | Big Battery | Wide Camera"
        );
    }
}
