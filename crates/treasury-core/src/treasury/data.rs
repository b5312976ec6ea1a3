use serde::{Deserialize, Serialize};

/// Headline treasury figures in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryStats {
    pub principal: f64,
    pub accumulated_yields: f64,
    pub expenses: f64,
    pub next_distribution: String,
}

impl TreasuryStats {
    /// Yields not yet spent on expenses.
    pub fn available_yield(&self) -> f64 {
        self.accumulated_yields - self.expenses
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyHistory {
    pub month: String,
    pub principal: f64,
    #[serde(rename = "yield")]
    pub yield_amount: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    /// `YYYY-MM`
    pub date: String,
    pub principal: f64,
    pub total_funds: f64,
    pub period_returns: f64,
    /// Negative for outflows
    pub period_expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundShare {
    pub name: String,
    /// Percentage of funds
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowItWorksStep {
    pub title: String,
    pub description: String,
    pub icon: String,
}

pub fn treasury_stats() -> TreasuryStats {
    TreasuryStats {
        principal: 1_000_000.0,
        accumulated_yields: 53_500.0,
        expenses: 12_750.0,
        next_distribution: "July 15, 2025".to_string(),
    }
}

pub fn monthly_history() -> Vec<MonthlyHistory> {
    [
        ("Jan", 8_500.0, 2_100.0),
        ("Feb", 8_700.0, 1_950.0),
        ("Mar", 8_900.0, 2_300.0),
        ("Apr", 9_100.0, 2_200.0),
        ("May", 9_200.0, 2_100.0),
        ("Jun", 9_100.0, 2_100.0),
    ]
    .into_iter()
    .map(|(month, yield_amount, expenses)| MonthlyHistory {
        month: month.to_string(),
        principal: 1_000_000.0,
        yield_amount,
        expenses,
    })
    .collect()
}

pub fn treasury_timeline() -> Vec<TimelinePoint> {
    [
        ("2024-01", 800_000.0, 800_000.0, 0.0, 0.0),
        ("2024-02", 800_000.0, 815_000.0, 15_000.0, -2_500.0),
        ("2024-03", 850_000.0, 862_000.0, 14_500.0, -3_200.0),
        ("2024-04", 850_000.0, 875_000.0, 16_200.0, -2_800.0),
        ("2024-05", 900_000.0, 918_000.0, 15_800.0, -2_100.0),
        ("2024-06", 900_000.0, 932_000.0, 16_500.0, -2_400.0),
        ("2024-07", 950_000.0, 968_000.0, 18_200.0, -2_900.0),
        ("2024-08", 950_000.0, 981_000.0, 16_800.0, -3_100.0),
        ("2024-09", 1_000_000.0, 1_015_000.0, 17_500.0, -2_700.0),
        ("2024-10", 1_000_000.0, 1_028_000.0, 15_800.0, -2_600.0),
        ("2024-11", 1_000_000.0, 1_041_000.0, 16_200.0, -3_000.0),
        ("2024-12", 1_000_000.0, 1_053_500.0, 15_500.0, -3_000.0),
    ]
    .into_iter()
    .map(
        |(date, principal, total_funds, period_returns, period_expenses)| TimelinePoint {
            date: date.to_string(),
            principal,
            total_funds,
            period_returns,
            period_expenses,
        },
    )
    .collect()
}

pub fn fund_distribution() -> Vec<FundShare> {
    [("Events", 45), ("Meetups", 30), ("Workshops", 15), ("Other", 10)]
        .into_iter()
        .map(|(name, value)| FundShare {
            name: name.to_string(),
            value,
        })
        .collect()
}

pub fn how_it_works_steps() -> Vec<HowItWorksStep> {
    [
        (
            "Apply to the whitelist",
            "Submit your application to join the Zuzalu community treasury.",
            "ClipboardList",
        ),
        (
            "Organize an event",
            "Plan and prepare your Zuzalu gathering or event.",
            "Calendar",
        ),
        (
            "Receive funds in your petty cash",
            "Get access to funds for your event expenses.",
            "Wallet",
        ),
        (
            "Hold the event and upload the report",
            "Run your event and document it with photos and receipts.",
            "FileText",
        ),
        (
            "Receive reimbursement",
            "Get reimbursed for expenses and continue organizing events.",
            "RefreshCw",
        ),
    ]
    .into_iter()
    .map(|(title, description, icon)| HowItWorksStep {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fund_distribution_sums_to_100() {
        let total: u32 = fund_distribution().iter().map(|s| s.value).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_timeline_ends_at_current_total() {
        let timeline = treasury_timeline();
        assert_eq!(timeline.len(), 12);
        let last = timeline.last().unwrap();
        assert_eq!(last.date, "2024-12");
        assert_eq!(last.total_funds, 1_053_500.0);
    }

    #[test]
    fn test_available_yield() {
        assert_eq!(treasury_stats().available_yield(), 40_750.0);
    }

    #[test]
    fn test_history_serializes_yield_key() {
        let json = serde_json::to_value(&monthly_history()[0]).unwrap();
        assert_eq!(json["yield"], 8_500.0);
        assert_eq!(json["month"], "Jan");
    }

    #[test]
    fn test_how_it_works_has_five_steps() {
        assert_eq!(how_it_works_steps().len(), 5);
    }
}
