//! Form models with presence and format checks.

mod report;
mod whitelist;

pub use report::{EventReport, EventReportForm};
pub use whitelist::WhitelistApplication;

/// Names of the fields in `fields` whose value is blank.
pub(crate) fn blank_fields(fields: &[(&str, &str)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect()
}
