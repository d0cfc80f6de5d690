use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{config::JSON_INDENT, errors};

/// Renders `value` as JSON indented with [`JSON_INDENT`].
///
/// serde_json writes non-ASCII characters as-is, so localized labels stay readable.
pub fn to_pretty_json<T: Serialize>(value: &T) -> errors::Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

    value
        .serialize(&mut serializer)
        .map_err(|e| errors::Errors::SerializeError(e.to_string()))?;

    String::from_utf8(buffer).map_err(|e| errors::Errors::SerializeError(e.to_string()))
}

/// Prints the outcome of a probe and hands it back.
///
/// A successful value is printed as JSON. A failure (including one raised
/// while rendering) is printed as `"{failure_label}: {error}"` and returned as `Err`.
pub fn emit<T: Serialize, W: Write>(
    out: &mut W,
    failure_label: &str,
    outcome: errors::Result<T>,
) -> errors::Result<T> {
    let rendered = outcome.and_then(|value| to_pretty_json(&value).map(|json| (value, json)));

    match rendered {
        Ok((value, json)) => {
            if let Err(e) = writeln!(out, "{}", json) {
                log::warn!("Failed to write report: {}", e);
            }
            Ok(value)
        }
        Err(error) => {
            log::error!("{}: {}", failure_label, error);
            if let Err(e) = writeln!(out, "{}: {}", failure_label, error) {
                log::warn!("Failed to write diagnostic: {}", e);
            }
            Err(error)
        }
    }
}
