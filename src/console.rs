//! Console reporting shared by the demo binaries.
//!
//! Transcript lines go to stdout unstyled so the text is stable; headings
//! and warnings are decorated with `colored`, which honors `NO_COLOR`.

use colored::Colorize;

pub fn heading(title: &str) {
    println!("{}", format!("=== {title} ===").bold().cyan());
}

pub fn line(text: impl AsRef<str>) {
    println!("{}", text.as_ref());
}

pub fn lines<I, S>(items: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for item in items {
        line(item);
    }
}

/// Warnings go to stderr so they never interleave with a transcript.
pub fn warn(message: &str) {
    eprintln!("{} {message}", "[WARN]".yellow().bold());
}
