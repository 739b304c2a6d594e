//! Tab-separated descriptor parsing.
//!
//! A descriptor file is one playlist: a header row naming the columns, then
//! one row per track. Only the name and location columns are used; everything
//! else is ignored. There is no quoting or escaping, so a field can never
//! contain a tab or newline.

mod header;

pub use header::{Columns, HeaderIndex};

use thiserror::Error;

/// One parsed playlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("no lines found in descriptor")]
    NoLines,
    #[error("required headers {name:?} and/or {location:?} not found; available headers: {found:?}")]
    MissingHeaders {
        name: String,
        location: String,
        found: Vec<String>,
    },
}

/// Parse decoded descriptor text into records.
///
/// The header row is resolved once; every data row is evaluated independently.
/// A row whose tab-split field count does not reach both required column
/// indices is dropped silently, per the export format's loose contract.
pub fn parse_records(text: &str, columns: &Columns) -> Result<Vec<Record>, DescriptorError> {
    if text.is_empty() {
        return Err(DescriptorError::NoLines);
    }

    let mut lines = text.split('\n');
    let header_line = lines.next().ok_or(DescriptorError::NoLines)?;
    let index = header::resolve(header_line, columns)?;

    let mut records = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split('\t').map(trim_field).collect();
        if fields.len() < index.required_fields() {
            continue;
        }
        records.push(Record {
            name: fields[index.name].to_string(),
            location: fields[index.location].to_string(),
        });
    }
    Ok(records)
}

/// Trim the whitespace set the export format pads fields with: space, tab,
/// newline, carriage return, form feed, vertical tab.
pub(crate) fn trim_field(field: &str) -> &str {
    field.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B'))
}
