//! Application configuration model.
//!
//! Every field has a default so a partial (or empty) `config.toml` is valid.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Message signed by the wallet when connecting.
pub const DEFAULT_CONNECT_MESSAGE: &str = "Sign this message to connect to Zuzalu Treasury";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionSettings,
    pub withdrawal: WithdrawalSettings,
    pub submission: SubmissionSettings,
    pub logging: LoggingSettings,
    pub signer: SignerSettings,
}

impl AppConfig {
    /// Configuration with every simulated delay set to zero.
    pub fn without_delays() -> Self {
        let mut config = Self::default();
        config.session.whitelist_check_delay_ms = 0;
        config.withdrawal.processing_delay_ms = 0;
        config.submission.whitelist_delay_ms = 0;
        config.submission.report_delay_ms = 0;
        config
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SessionSettings {
    /// Petty-cash balance a fresh session starts with.
    pub initial_balance: f64,
    pub whitelist_check_delay_ms: u64,
    pub connect_message: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            initial_balance: 300.0,
            whitelist_check_delay_ms: 500,
            connect_message: DEFAULT_CONNECT_MESSAGE.to_string(),
        }
    }
}

impl SessionSettings {
    pub fn whitelist_check_delay(&self) -> Duration {
        Duration::from_millis(self.whitelist_check_delay_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WithdrawalSettings {
    pub processing_delay_ms: u64,
}

impl Default for WithdrawalSettings {
    fn default() -> Self {
        Self {
            processing_delay_ms: 1000,
        }
    }
}

impl WithdrawalSettings {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SubmissionSettings {
    pub whitelist_delay_ms: u64,
    pub report_delay_ms: u64,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            whitelist_delay_ms: 1500,
            report_delay_ms: 1500,
        }
    }
}

impl SubmissionSettings {
    pub fn whitelist_delay(&self) -> Duration {
        Duration::from_millis(self.whitelist_delay_ms)
    }

    pub fn report_delay(&self) -> Duration {
        Duration::from_millis(self.report_delay_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default tracing filter when `RUST_LOG` is not set.
    pub level: String,
    /// Whether to also write a daily rolling log file.
    pub file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

/// Settings for the local development signer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SignerSettings {
    /// Accounts exposed by the signer. A random account is generated when empty.
    pub accounts: Vec<String>,
    /// Whether the signer is installed at all.
    pub enabled: bool,
}

impl Default for SignerSettings {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session.initial_balance, 300.0);
        assert_eq!(config.session.whitelist_check_delay_ms, 500);
        assert_eq!(config.withdrawal.processing_delay_ms, 1000);
        assert_eq!(config.submission.whitelist_delay_ms, 1500);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[session]
initial_balance = 120.5

[signer]
accounts = ["0xabc"]
"#,
        )
        .unwrap();

        assert_eq!(config.session.initial_balance, 120.5);
        assert_eq!(config.session.connect_message, DEFAULT_CONNECT_MESSAGE);
        assert_eq!(config.signer.accounts, vec!["0xabc".to_string()]);
        assert!(config.signer.enabled);
        assert_eq!(config.submission.report_delay_ms, 1500);
    }

    #[test]
    fn test_without_delays() {
        let config = AppConfig::without_delays();
        assert_eq!(config.session.whitelist_check_delay(), Duration::ZERO);
        assert_eq!(config.withdrawal.processing_delay(), Duration::ZERO);
        assert_eq!(config.submission.report_delay(), Duration::ZERO);
    }
}
