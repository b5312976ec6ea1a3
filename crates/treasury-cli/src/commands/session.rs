//! `status`, `connect` and `disconnect`.

use anyhow::{Result, bail};
use colored::Colorize;
use serde_json::json;
use treasury_application::TreasuryApp;
use treasury_core::format::{format_address, format_amount};
use treasury_core::route::Route;
use treasury_core::session::SessionStatus;

pub async fn status(app: &TreasuryApp, as_json: bool) -> Result<()> {
    let session = app.session.snapshot().await;
    let status = session.status();

    if as_json {
        let value = json!({
            "address": session.address,
            "isConnected": session.is_connected(),
            "isWhitelisted": session.is_whitelisted,
            "balance": session.balance,
            "status": status,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match session.address() {
        Some(address) => println!("{} {}", "Wallet:".bold(), format_address(address)),
        None => println!("{} {}", "Wallet:".bold(), "not connected".bright_black()),
    }
    println!("{} {}", "Status:".bold(), describe(status));
    println!("{} {}", "Balance:".bold(), format_amount(session.balance));
    Ok(())
}

pub async fn connect(app: &TreasuryApp) -> Result<()> {
    let Some(address) = app.session.connect().await else {
        bail!("Wallet connection failed");
    };

    let landing = app.session.resolve_route(Route::Login).await;
    println!(
        "{} {} ({})",
        "Connected".green(),
        format_address(&address),
        describe(app.session.status().await)
    );
    println!("{} {}", "Next:".bold(), landing.path());
    Ok(())
}

pub async fn disconnect(app: &TreasuryApp) -> Result<()> {
    let was_connected = app.session.is_connected().await;
    app.session.disconnect().await;
    if was_connected {
        println!("{}", "Disconnected".green());
    } else {
        println!("{}", "Already disconnected".bright_black());
    }
    Ok(())
}

pub fn describe(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Disconnected => "disconnected",
        SessionStatus::WhitelistUnknown => "checking whitelist",
        SessionStatus::Whitelisted => "whitelisted",
        SessionStatus::NotWhitelisted => "not whitelisted",
    }
}
