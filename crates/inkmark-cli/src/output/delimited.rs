use anyhow::Result;

use super::Report;

/// One row per iteration result, spreadsheet-ready.
pub fn render(report: &Report) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record([
        "source",
        "iteration",
        "duration_ms",
        "start",
        "stop",
        "marker",
        "height",
        "waveform",
        "mode",
    ])?;

    for file in &report.files {
        for result in &file.results {
            let record = [
                file.source.clone(),
                result.iteration.clone(),
                result.duration_ms.to_string(),
                result.start.to_string(),
                result.stop.to_string(),
                result.marker.clone(),
                result.height.to_string(),
                result.waveform.clone(),
                result.mode.as_str().to_string(),
            ];
            writer.write_record(&record)?;
        }
    }

    writer.flush()?;
    Ok(())
}
