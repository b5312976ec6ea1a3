//! Read-only views: past events, the dashboard and treasury statistics.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use treasury_application::TreasuryApp;
use treasury_core::event::Event;
use treasury_core::format::{format_address, format_amount, format_currency};
use treasury_core::treasury::{fund_distribution, monthly_history};

use super::session::describe;

pub fn events(app: &TreasuryApp, recent: Option<usize>, as_json: bool) -> Result<()> {
    let events: Vec<&Event> = match recent {
        Some(limit) => app.dashboard.recent_events(limit),
        None => app.dashboard.events().iter().collect(),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    for event in events {
        print_event(event);
    }
    Ok(())
}

pub fn print_event(event: &Event) {
    println!(
        "{} {} {}",
        format!("#{}", event.id).bright_black(),
        event.name.bold(),
        event.date.format("%B %-d, %Y").to_string().bright_black()
    );
    println!(
        "   {} | {} attendees | {} | organizer {}",
        event.place,
        event.attendees,
        format_currency(event.total_expenses),
        format_address(&event.organizer)
    );
}

pub async fn dashboard(app: &TreasuryApp, as_json: bool) -> Result<()> {
    let overview = app.dashboard.overview().await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
        return Ok(());
    }

    println!("{} {}", "Wallet:".bold(), overview.short_address);
    println!("{} {}", "Status:".bold(), describe(overview.status));
    println!("{} {}", "Petty cash:".bold(), format_amount(overview.balance));
    if !overview.can_withdraw {
        println!("{}", "Nothing left to withdraw.".bright_black());
    }
    println!("{}", "Recent events".bold().underline());
    for event in &overview.recent_events {
        print_event(event);
    }
    Ok(())
}

pub fn stats(app: &TreasuryApp, as_json: bool) -> Result<()> {
    let stats = app.dashboard.treasury_stats();
    let distribution = fund_distribution();
    let history = monthly_history();

    if as_json {
        let value = json!({
            "stats": stats,
            "availableYield": stats.available_yield(),
            "fundDistribution": distribution,
            "monthlyHistory": history,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{} {}", "Principal:".bold(), format_currency(stats.principal));
    println!(
        "{} {}",
        "Accumulated yields:".bold(),
        format_currency(stats.accumulated_yields)
    );
    println!("{} {}", "Expenses:".bold(), format_currency(stats.expenses));
    println!(
        "{} {}",
        "Available yield:".bold(),
        format_currency(stats.available_yield())
    );
    println!("{} {}", "Next distribution:".bold(), stats.next_distribution);

    println!("{}", "Fund distribution".bold().underline());
    for share in distribution {
        println!("   {:<10} {:>3}%", share.name, share.value);
    }

    println!("{}", "Monthly history".bold().underline());
    for month in history {
        println!(
            "   {:<4} yield {:>8}  expenses {:>8}",
            month.month,
            format_currency(month.yield_amount),
            format_currency(month.expenses)
        );
    }
    Ok(())
}
