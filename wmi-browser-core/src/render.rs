//! Display projection shared by the TUI and the plain-text printer

use crate::types::WmiRecord;

/// Table header, in column order
pub const COLUMNS: [&str; 8] = [
    "Id",
    "Name",
    "Country",
    "Vehicle Type",
    "WMI",
    "Date Available To Public",
    "Created On",
    "Updated On",
];

/// Shown in place of an absent `updated_on`
pub const PLACEHOLDER: &str = "-";

/// One table row: eight display cells in [`COLUMNS`] order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub cells: [String; 8],
}

impl RecordRow {
    /// Last cell, the rendered `updated_on`
    pub fn updated_on(&self) -> &str {
        &self.cells[7]
    }
}

impl From<&WmiRecord> for RecordRow {
    fn from(record: &WmiRecord) -> Self {
        let updated_on = match record.updated_on.as_deref() {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => PLACEHOLDER.to_string(),
        };

        Self {
            cells: [
                record.id.clone(),
                record.name.clone(),
                record.country.clone(),
                record.vehicle_type.clone(),
                record.wmi.clone(),
                record.date_available_to_public.clone(),
                record.created_on.clone(),
                updated_on,
            ],
        }
    }
}
