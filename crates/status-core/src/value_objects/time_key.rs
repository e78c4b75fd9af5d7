//! Symbolic expiry choices offered by the status dialog

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic "clear status after" choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeKey {
    /// Keep the status until it is removed by hand
    #[default]
    Never,
    InThirtyMinutes,
    InOneHour,
    /// Today at 17:00 local time, even if that is already in the past
    TodayFivePm,
    /// Next local midnight
    Tomorrow,
    /// A timestamp picked by the user
    Custom,
}

impl TimeKey {
    /// All keys in the order the dropdown lists them
    pub const ALL: [TimeKey; 6] = [
        Self::Never,
        Self::InThirtyMinutes,
        Self::InOneHour,
        Self::TodayFivePm,
        Self::Tomorrow,
        Self::Custom,
    ];

    /// Wire/widget identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::InThirtyMinutes => "in_thirty_minutes",
            Self::InOneHour => "in_one_hour",
            Self::TodayFivePm => "today_five_pm",
            Self::Tomorrow => "tomorrow",
            Self::Custom => "custom",
        }
    }

    /// Human-readable dropdown label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::InThirtyMinutes => "In 30 minutes",
            Self::InOneHour => "In one hour",
            Self::TodayFivePm => "Today at 5:00 PM",
            Self::Tomorrow => "Tomorrow",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for TimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Invalid time key: {s}"))
    }
}
