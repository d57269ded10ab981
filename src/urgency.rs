use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::components::icon::IconName;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UrgencyInfo {
    pub label: &'static str,
    pub color: &'static str,
    pub hover_color: &'static str,
    pub icon: IconName,
    pub time: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown urgency level: {0:?}")]
pub struct UnknownUrgency(pub String);

impl UrgencyLevel {
    /// Display order, most urgent first.
    pub const ALL: [UrgencyLevel; 4] = [
        UrgencyLevel::Critical,
        UrgencyLevel::High,
        UrgencyLevel::Medium,
        UrgencyLevel::Low,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "critical",
            UrgencyLevel::High => "high",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::Low => "low",
        }
    }

    pub fn info(self) -> UrgencyInfo {
        match self {
            UrgencyLevel::Critical => UrgencyInfo {
                label: "Критический",
                color: "#dc2626",
                hover_color: "#b91c1c",
                icon: IconName::AlertTriangle,
                time: "до 5 минут",
            },
            UrgencyLevel::High => UrgencyInfo {
                label: "Высокий",
                color: "#ef4444",
                hover_color: "#dc2626",
                icon: IconName::AlertCircle,
                time: "до 15 минут",
            },
            UrgencyLevel::Medium => UrgencyInfo {
                label: "Средний",
                color: "#f97316",
                hover_color: "#ea580c",
                icon: IconName::Clock,
                time: "до 30 минут",
            },
            UrgencyLevel::Low => UrgencyInfo {
                label: "Низкий",
                color: "#eab308",
                hover_color: "#ca8a04",
                icon: IconName::Info,
                time: "до 60 минут",
            },
        }
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn time(self) -> &'static str {
        self.info().time
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyLevel {
    type Err = UnknownUrgency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UrgencyLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownUrgency(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_medium() {
        assert_eq!(UrgencyLevel::default(), UrgencyLevel::Medium);
    }

    #[test]
    fn keys_parse_back_to_their_level() {
        for level in UrgencyLevel::ALL {
            assert_eq!(level.as_str().parse::<UrgencyLevel>(), Ok(level));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(
            "panic".parse::<UrgencyLevel>(),
            Err(UnknownUrgency("panic".to_string()))
        );
        assert!("Critical".parse::<UrgencyLevel>().is_err());
    }

    #[test]
    fn lookup_table_matches_published_times() {
        assert_eq!(UrgencyLevel::Critical.label(), "Критический");
        assert_eq!(UrgencyLevel::Critical.time(), "до 5 минут");
        assert_eq!(UrgencyLevel::High.label(), "Высокий");
        assert_eq!(UrgencyLevel::High.time(), "до 15 минут");
        assert_eq!(UrgencyLevel::Medium.label(), "Средний");
        assert_eq!(UrgencyLevel::Medium.time(), "до 30 минут");
        assert_eq!(UrgencyLevel::Low.label(), "Низкий");
        assert_eq!(UrgencyLevel::Low.time(), "до 60 минут");
    }

    #[test]
    fn serializes_as_lowercase_key() {
        let json = serde_json::to_string(&UrgencyLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
    }
}
