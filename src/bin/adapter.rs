// Adapter: a meters-only length read through a feet interface.

use creational_patterns::adapter::{describe, EuroLength, LengthAdapter, LengthAdapterUs, UsLength};
use creational_patterns::console;
use creational_patterns::Result;

fn transcript(meters: f32) -> Result<Vec<String>> {
    let euro_length: Box<dyn LengthAdapter> = Box::new(EuroLength::new(meters)?);
    let us_length: Box<dyn LengthAdapter> = Box::new(LengthAdapterUs::new(UsLength::new(meters)?));

    Ok(vec![
        describe("meters", euro_length.as_ref()),
        describe("feet", us_length.as_ref()),
    ])
}

fn main() -> Result<()> {
    console::heading("Adapter Pattern");
    console::lines(transcript(3.0)?);
    Ok(())
}
