//! Header row resolution.

use super::{trim_field, DescriptorError};

/// Header names to look up in the descriptor's first row. Matching is exact
/// and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub name: String,
    pub location: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            location: "Location".to_string(),
        }
    }
}

/// Resolved zero-based positions of the required columns.
#[derive(Debug, Clone, Copy)]
pub struct HeaderIndex {
    pub name: usize,
    pub location: usize,
}

impl HeaderIndex {
    /// Minimum tab-split field count a data row needs to cover both columns.
    pub fn required_fields(&self) -> usize {
        self.name.max(self.location) + 1
    }
}

/// Split the header line and locate the configured column names.
pub fn resolve(header_line: &str, columns: &Columns) -> Result<HeaderIndex, DescriptorError> {
    let headers: Vec<&str> = header_line.split('\t').map(trim_field).collect();

    let name = headers.iter().position(|h| *h == columns.name);
    let location = headers.iter().position(|h| *h == columns.location);

    match (name, location) {
        (Some(name), Some(location)) => Ok(HeaderIndex { name, location }),
        _ => Err(DescriptorError::MissingHeaders {
            name: columns.name.clone(),
            location: columns.location.clone(),
            found: headers.iter().map(|h| h.to_string()).collect(),
        }),
    }
}
