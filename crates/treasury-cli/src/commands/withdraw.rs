use anyhow::Result;
use colored::Colorize;
use treasury_application::TreasuryApp;
use treasury_core::format::format_amount;

pub async fn run(app: &TreasuryApp, amount: f64) -> Result<()> {
    let balance = app.withdrawals.withdraw(amount).await?;
    println!("{} {}", "Remaining balance:".bold(), format_amount(balance));
    Ok(())
}
