//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`JETSTAR_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};

use jetstar_core::Money;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (dashboard title)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of sales listed on the Reports screen
    pub recent_sales_limit: u32,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "JETSTAR POS"
    /// - Currency: `$`
    /// - Reports: 10 most recent sales
    fn default() -> Self {
        ConfigState {
            store_name: "JETSTAR POS".to_string(),
            currency_symbol: "$".to_string(),
            recent_sales_limit: 10,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `JETSTAR_STORE_NAME`: Override store name
    /// - `JETSTAR_CURRENCY_SYMBOL`: Override currency symbol
    ///
    /// The store path (`JETSTAR_DB_PATH`) is resolved separately, see
    /// [`crate::get_database_path`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("JETSTAR_STORE_NAME").filter(|s| !s.trim().is_empty()) {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("JETSTAR_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats a cent amount as a currency string, always with two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use jetstar_mobile::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let abs = cents.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            abs / 100,
            abs % 100
        )
    }

    /// Formats an amount for display.
    pub fn format_money(&self, amount: Money) -> String {
        self.format_currency(amount.cents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
        assert_eq!(config.format_money(Money::from_cents(-5)), "-$0.05");
    }

    #[test]
    fn test_format_with_other_symbol() {
        let config = ConfigState::from_lookup(|key| match key {
            "JETSTAR_CURRENCY_SYMBOL" => Some("KSh ".to_string()),
            "JETSTAR_STORE_NAME" => Some("Corner Shop".to_string()),
            _ => None,
        });
        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.format_currency(123456789), "KSh 1234567.89");
    }

    #[test]
    fn test_stored_config_cannot_rescale_amounts() {
        // Fields from older config files are ignored.
        let json = r#"{
            "storeName": "Corner Shop",
            "currencySymbol": "$",
            "currencyDecimals": 0,
            "paymentMethod": { "Other": "M-Pesa" },
            "recentSalesLimit": 10
        }"#;
        let config: ConfigState = serde_json::from_str(json).unwrap();

        assert_eq!(config.format_money(Money::from_cents(1350)), "$13.50");
        assert_eq!(config.format_currency(i64::MIN), "-$92233720368547758.08");
    }

    #[test]
    fn test_blank_store_name_keeps_default() {
        let config = ConfigState::from_lookup(|key| {
            (key == "JETSTAR_STORE_NAME").then(|| "  ".to_string())
        });
        assert_eq!(config, ConfigState::default());
    }
}
