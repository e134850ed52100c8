use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Parse piped stdin as JSON, falling back to YAML.
/// Returns None if stdin is a TTY (interactive) or empty.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(Some(value)),
        Err(json_err) => {
            log::debug!("stdin is not JSON ({json_err}), trying YAML");
            let value: T = serde_yaml::from_str(trimmed)
                .map_err(|e| format!("Failed to parse stdin as JSON ({json_err}) or YAML ({e})"))?;
            Ok(Some(value))
        }
    }
}
