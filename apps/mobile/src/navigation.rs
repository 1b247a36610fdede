//! # Navigation
//!
//! Which screen is showing. The app starts on the Dashboard; every other
//! screen leads back to it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A navigation target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Dashboard,
    Sell,
    Stock,
    Expenses,
    Reports,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Dashboard,
        Screen::Sell,
        Screen::Stock,
        Screen::Expenses,
        Screen::Reports,
    ];

    /// Stable name of the screen.
    pub const fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::Sell => "sell",
            Screen::Stock => "stock",
            Screen::Expenses => "expenses",
            Screen::Reports => "reports",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.name() == s)
            .ok_or_else(|| AppError::validation(format!("Unknown screen: {}", s)))
    }
}

/// Holds the current screen.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    /// Starts on the Dashboard.
    pub fn new() -> Self {
        Navigator::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn go(&mut self, screen: Screen) {
        tracing::debug!(from = %self.current, to = %screen, "Navigating");
        self.current = screen;
    }

    /// Back to the Dashboard.
    pub fn home(&mut self) {
        self.go(Screen::Dashboard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(screen.name().parse::<Screen>().unwrap(), screen);
        }
        assert!("settings".parse::<Screen>().is_err());
    }

    #[test]
    fn test_navigator_starts_on_dashboard() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Dashboard);

        nav.go(Screen::Reports);
        assert_eq!(nav.current(), Screen::Reports);

        nav.home();
        assert_eq!(nav.current(), Screen::Dashboard);
    }
}
