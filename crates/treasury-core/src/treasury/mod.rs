//! Treasury statistics.
//!
//! All figures are fixed demonstration data; nothing here is computed from a
//! ledger.

mod data;

pub use data::{
    FundShare, HowItWorksStep, MonthlyHistory, TimelinePoint, TreasuryStats, fund_distribution,
    how_it_works_steps, monthly_history, treasury_stats, treasury_timeline,
};
