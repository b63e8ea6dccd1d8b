use crate::core::summary::Summary;
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes `<metric>: <value>` lines in report order.
///
/// The whole report is rendered before the file is created, so a failed run
/// leaves nothing behind.
pub fn write(path: &Path, summary: &Summary) -> Result<()> {
    let mut buf = Vec::new();
    render(&mut buf, summary)?;
    fs::write(path, buf)?;
    Ok(())
}

pub fn render<W: Write>(w: &mut W, summary: &Summary) -> Result<()> {
    for (name, value) in summary.entries() {
        writeln!(w, "{}: {}", name, value)?;
    }
    Ok(())
}
