use crate::error::Result;
use dieopt::core::presets;
use std::io::{self, Write};

pub fn run() -> Result<()> {
    let stdout = io::stdout();
    write_presets(&mut stdout.lock())
}

fn write_presets<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "{:<8} {:>14}", "Preset", "Diameter (mm)")?;
    for (name, diameter) in presets::all() {
        writeln!(writer, "{:<8} {:>14.1}", name, diameter)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_is_listed_once() {
        let mut buffer = Vec::new();
        write_presets(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text.lines().count(), presets::all().len() + 1);
        assert!(text.lines().any(|l| l.starts_with("2in") && l.ends_with("50.8")));
        assert!(text.lines().any(|l| l.starts_with("450mm") && l.ends_with("450.0")));
    }
}
