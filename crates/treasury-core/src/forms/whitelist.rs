//! Whitelist application form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::blank_fields;
use crate::error::{Result, TreasuryError};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistApplication {
    pub full_name: String,
    pub email: String,
    pub social_media: String,
    pub introduction: String,
    pub community_experience: String,
    pub activities: String,
    pub previous_experience: String,
    pub accept_terms: bool,
}

impl WhitelistApplication {
    /// Checks the form before submission.
    ///
    /// Terms are checked first, then required fields, then the email format.
    pub fn validate(&self) -> Result<()> {
        if !self.accept_terms {
            return Err(TreasuryError::TermsNotAccepted);
        }

        let missing = blank_fields(&[
            ("fullName", &self.full_name),
            ("email", &self.email),
            ("socialMedia", &self.social_media),
            ("introduction", &self.introduction),
            ("communityExperience", &self.community_experience),
            ("activities", &self.activities),
            ("previousExperience", &self.previous_experience),
        ]);
        if !missing.is_empty() {
            return Err(TreasuryError::MissingFields(missing));
        }

        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(TreasuryError::invalid_field(
                "email",
                "expected an address like name@example.com",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> WhitelistApplication {
        WhitelistApplication {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            social_media: "@ada".to_string(),
            introduction: "Mathematician".to_string(),
            community_experience: "Attended Zuzalu 2023".to_string(),
            activities: "Host a study group".to_string(),
            previous_experience: "Organized meetups".to_string(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_terms_checked_first() {
        let form = WhitelistApplication::default();
        assert!(matches!(
            form.validate(),
            Err(TreasuryError::TermsNotAccepted)
        ));
    }

    #[test]
    fn test_missing_fields_listed() {
        let mut form = complete();
        form.email = "  ".to_string();
        form.activities.clear();

        match form.validate() {
            Err(TreasuryError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["email".to_string(), "activities".to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_email() {
        let mut form = complete();
        form.email = "not-an-email".to_string();
        assert!(matches!(
            form.validate(),
            Err(TreasuryError::InvalidField { ref field, .. }) if field == "email"
        ));
    }
}
