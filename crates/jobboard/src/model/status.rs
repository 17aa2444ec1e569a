//! Closed choice sets for job status and priority.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when text does not name one of the enumerated values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Normalizes user input so "in-progress", "In Progress" and "IN_PROGRESS"
/// compare equal.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Workflow status of a job. Drives column placement and card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl Status {
    /// Column order on the board.
    pub const ALL: [Status; 3] = [Status::NotStarted, Status::InProgress, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Status::ALL
            .into_iter()
            .find(|status| normalize(status.as_str()) == wanted)
            .ok_or_else(|| ParseChoiceError {
                kind: "status",
                value: s.to_string(),
                expected: Status::ALL.map(|v| v.as_str()).join(", "),
            })
    }
}

/// Job priority, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Ultra High")]
    UltraHigh,
    #[serde(rename = "Very High")]
    VeryHigh,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Low")]
    Low,
    #[default]
    #[serde(rename = "Not specified")]
    NotSpecified,
}

impl Priority {
    /// Selector order, as offered in the add-job form.
    pub const ALL: [Priority; 6] = [
        Priority::UltraHigh,
        Priority::VeryHigh,
        Priority::High,
        Priority::Moderate,
        Priority::Low,
        Priority::NotSpecified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::UltraHigh => "Ultra High",
            Priority::VeryHigh => "Very High",
            Priority::High => "High",
            Priority::Moderate => "Moderate",
            Priority::Low => "Low",
            Priority::NotSpecified => "Not specified",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Priority::ALL
            .into_iter()
            .find(|priority| normalize(priority.as_str()) == wanted)
            .ok_or_else(|| ParseChoiceError {
                kind: "priority",
                value: s.to_string(),
                expected: Priority::ALL.map(|v| v.as_str()).join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Status::default(), Status::NotStarted);
        assert_eq!(Priority::default(), Priority::NotSpecified);
    }

    #[test]
    fn test_serializes_as_display_strings() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            r#""In Progress""#
        );
        assert_eq!(
            serde_json::to_string(&Priority::NotSpecified).unwrap(),
            r#""Not specified""#
        );
        let parsed: Priority = serde_json::from_str(r#""Ultra High""#).unwrap();
        assert_eq!(parsed, Priority::UltraHigh);
    }

    #[test]
    fn test_unknown_serialized_value_is_rejected() {
        assert!(serde_json::from_str::<Status>(r#""Blocked""#).is_err());
        assert!(serde_json::from_str::<Priority>(r#""Critical""#).is_err());
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("NOT_STARTED".parse::<Status>().unwrap(), Status::NotStarted);
        assert_eq!("very high".parse::<Priority>().unwrap(), Priority::VeryHigh);
        assert_eq!(
            "not-specified".parse::<Priority>().unwrap(),
            Priority::NotSpecified
        );
    }

    #[test]
    fn test_parse_error_lists_choices() {
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err.kind, "priority");
        assert!(err.to_string().contains("Ultra High"));
        assert!(err.to_string().contains("Not specified"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
        for priority in Priority::ALL {
            assert_eq!(priority.to_string().parse::<Priority>().unwrap(), priority);
        }
    }
}
