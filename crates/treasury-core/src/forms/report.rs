//! Event report form.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::blank_fields;
use crate::error::{Result, TreasuryError};

/// Raw event report as entered by the organizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReportForm {
    pub event_name: String,
    pub date_place: String,
    pub description: String,
    /// Optional attendee count as typed
    pub attendees: String,
    /// One link per line
    pub links: String,
    pub photos: Vec<PathBuf>,
    pub receipts: Vec<PathBuf>,
}

/// A checked and normalized event report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReport {
    pub event_name: String,
    pub date_place: String,
    pub description: String,
    pub attendees: Option<u32>,
    pub links: Vec<String>,
    /// Attachment file names
    pub photos: Vec<String>,
    pub receipts: Vec<String>,
}

impl EventReportForm {
    /// Checks required fields and attachment types, returning the normalized report.
    pub fn validate(&self) -> Result<EventReport> {
        let missing = blank_fields(&[
            ("eventName", &self.event_name),
            ("datePlace", &self.date_place),
            ("description", &self.description),
        ]);
        if !missing.is_empty() {
            return Err(TreasuryError::MissingFields(missing));
        }

        let attendees = match self.attendees.trim() {
            "" => None,
            raw => Some(raw.parse::<u32>().map_err(|_| {
                TreasuryError::invalid_field("attendees", "expected a whole number")
            })?),
        };

        let links = self
            .links
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        let photos = attachment_names("photos", &self.photos, |mime| {
            mime.type_() == mime_guess::mime::IMAGE
        })?;
        let receipts = attachment_names("receipts", &self.receipts, |mime| {
            mime.type_() == mime_guess::mime::IMAGE || mime.subtype() == mime_guess::mime::PDF
        })?;

        Ok(EventReport {
            event_name: self.event_name.trim().to_string(),
            date_place: self.date_place.trim().to_string(),
            description: self.description.trim().to_string(),
            attendees,
            links,
            photos,
            receipts,
        })
    }
}

fn attachment_names(
    field: &str,
    paths: &[PathBuf],
    accept: impl Fn(&mime_guess::Mime) -> bool,
) -> Result<Vec<String>> {
    paths
        .iter()
        .map(|path| {
            let accepted = mime_guess::from_path(path).iter().any(|m| accept(&m));
            if !accepted {
                return Err(TreasuryError::invalid_field(
                    field,
                    format!("unsupported file type: {}", path.display()),
                ));
            }
            Ok(file_name(path))
        })
        .collect()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> EventReportForm {
        EventReportForm {
            event_name: " ZK Study Group ".to_string(),
            date_place: "May 12, Lisbon".to_string(),
            description: "Weekly sessions".to_string(),
            attendees: "35".to_string(),
            links: "https://a.example\n\n  https://b.example  \n".to_string(),
            photos: vec![PathBuf::from("/tmp/group.jpg")],
            receipts: vec![PathBuf::from("venue.pdf"), PathBuf::from("snacks.png")],
        }
    }

    #[test]
    fn test_validate_normalizes() {
        let report = form().validate().unwrap();
        assert_eq!(report.event_name, "ZK Study Group");
        assert_eq!(report.attendees, Some(35));
        assert_eq!(
            report.links,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert_eq!(report.photos, vec!["group.jpg".to_string()]);
        assert_eq!(report.receipts.len(), 2);
    }

    #[test]
    fn test_required_fields() {
        let form = EventReportForm {
            description: "only a description".to_string(),
            ..Default::default()
        };
        match form.validate() {
            Err(TreasuryError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["eventName".to_string(), "datePlace".to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_attendees_must_be_number() {
        let mut form = form();
        form.attendees = "lots".to_string();
        assert!(matches!(
            form.validate(),
            Err(TreasuryError::InvalidField { ref field, .. }) if field == "attendees"
        ));

        form.attendees = "  ".to_string();
        assert_eq!(form.validate().unwrap().attendees, None);
    }

    #[test]
    fn test_photo_must_be_image() {
        let mut form = form();
        form.photos.push(PathBuf::from("slides.pdf"));
        assert!(matches!(
            form.validate(),
            Err(TreasuryError::InvalidField { ref field, .. }) if field == "photos"
        ));
    }

    #[test]
    fn test_receipt_rejects_unknown_type() {
        let mut form = form();
        form.receipts = vec![PathBuf::from("notes.docx")];
        assert!(form.validate().is_err());
    }
}
