//! `apply` and `report`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use treasury_application::TreasuryApp;
use treasury_core::forms::{EventReportForm, WhitelistApplication};

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ApplyArgs {
    /// Full name
    #[arg(long, default_value_t)]
    pub name: String,
    #[arg(long, default_value_t)]
    pub email: String,
    /// Social media handle or profile link
    #[arg(long, default_value_t)]
    pub social_media: String,
    /// A short introduction
    #[arg(long, default_value_t)]
    pub introduction: String,
    /// Experience with the community so far
    #[arg(long, default_value_t)]
    pub community_experience: String,
    /// Activities you plan to organize
    #[arg(long, default_value_t)]
    pub activities: String,
    /// Previous organizing experience
    #[arg(long, default_value_t)]
    pub previous_experience: String,
    /// Accept the terms and conditions
    #[arg(long)]
    pub accept_terms: bool,
}

impl From<ApplyArgs> for WhitelistApplication {
    fn from(args: ApplyArgs) -> Self {
        WhitelistApplication {
            full_name: args.name,
            email: args.email,
            social_media: args.social_media,
            introduction: args.introduction,
            community_experience: args.community_experience,
            activities: args.activities,
            previous_experience: args.previous_experience,
            accept_terms: args.accept_terms,
        }
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ReportArgs {
    /// Event name
    #[arg(long, default_value_t)]
    pub name: String,
    /// When and where the event took place
    #[arg(long, default_value_t)]
    pub date_place: String,
    #[arg(long, default_value_t)]
    pub description: String,
    /// Number of attendees
    #[arg(long, default_value_t)]
    pub attendees: String,
    /// Related link, repeatable
    #[arg(long = "link")]
    pub links: Vec<String>,
    /// Photo file, repeatable
    #[arg(long = "photo")]
    pub photos: Vec<PathBuf>,
    /// Receipt file (image or PDF), repeatable
    #[arg(long = "receipt")]
    pub receipts: Vec<PathBuf>,
}

impl From<ReportArgs> for EventReportForm {
    fn from(args: ReportArgs) -> Self {
        EventReportForm {
            event_name: args.name,
            date_place: args.date_place,
            description: args.description,
            attendees: args.attendees,
            links: args.links.join("\n"),
            photos: args.photos,
            receipts: args.receipts,
        }
    }
}

pub async fn apply(app: &TreasuryApp, args: ApplyArgs) -> Result<()> {
    let whitelisted = app.whitelist.submit(&args.into()).await?;
    if whitelisted {
        println!("{}", "You are now whitelisted.".green());
    }
    Ok(())
}

pub async fn report(app: &TreasuryApp, args: ReportArgs) -> Result<()> {
    let submitted = app.reports.submit(&args.into()).await?;
    println!("{} {}", "Report id:".bold(), submitted.id);
    println!(
        "{} {} photo(s), {} receipt(s), {} link(s)",
        "Attached:".bold(),
        submitted.report.photos.len(),
        submitted.report.receipts.len(),
        submitted.report.links.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_links_joined_one_per_line() {
        let form: EventReportForm = ReportArgs {
            name: "Meetup".to_string(),
            links: vec!["https://a.example".to_string(), "https://b.example".to_string()],
            ..Default::default()
        }
        .into();

        let report = EventReportForm {
            date_place: "Lisbon".to_string(),
            description: "Talks".to_string(),
            ..form
        }
        .validate()
        .unwrap();
        assert_eq!(report.links, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_apply_args_map_to_form() {
        let form: WhitelistApplication = ApplyArgs {
            name: "Ada".to_string(),
            accept_terms: true,
            ..Default::default()
        }
        .into();
        assert_eq!(form.full_name, "Ada");
        assert!(form.accept_terms);
    }
}
