use anyhow::Result;

use super::Report;

pub fn render(report: &Report) -> Result<()> {
    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), report)?;
    println!();
    Ok(())
}
