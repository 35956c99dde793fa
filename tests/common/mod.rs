use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes a JSON payment batch to a temporary file.
pub fn write_batch(batch: &serde_json::Value) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, batch)?;
    file.flush()?;
    Ok(file)
}

/// Writes gateway settings rows (header included) to a temporary CSV file.
pub fn write_settings(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        "gateway,endpoint_url,return_url,notify_url,submit_method,merchant_key,private_key,public_key"
    )?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}
