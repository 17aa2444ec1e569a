//! The job record and its value types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::{ParseChoiceError, Priority, Status};

/// Job identifier: the creation timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(JobId)
    }
}

/// Opaque reference to an image preview.
///
/// Only meaningful within the session that created it; see
/// [`crate::board::PreviewRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single deliverable flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Render,
    Orthographic,
    Drawing,
    Step,
    Prototype,
    Video,
    Brochure,
}

impl Requirement {
    pub const ALL: [Requirement; 7] = [
        Requirement::Render,
        Requirement::Orthographic,
        Requirement::Drawing,
        Requirement::Step,
        Requirement::Prototype,
        Requirement::Video,
        Requirement::Brochure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Requirement::Render => "render",
            Requirement::Orthographic => "orthographic",
            Requirement::Drawing => "drawing",
            Requirement::Step => "step",
            Requirement::Prototype => "prototype",
            Requirement::Video => "video",
            Requirement::Brochure => "brochure",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Requirement {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Requirement::ALL
            .into_iter()
            .find(|r| r.as_str() == wanted)
            .ok_or_else(|| ParseChoiceError {
                kind: "requirement",
                value: s.to_string(),
                expected: Requirement::ALL.map(|r| r.as_str()).join(", "),
            })
    }
}

/// Independent deliverable flags, all false by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    pub render: bool,
    pub orthographic: bool,
    pub drawing: bool,
    pub step: bool,
    pub prototype: bool,
    pub video: bool,
    pub brochure: bool,
}

impl Requirements {
    pub fn get(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::Render => self.render,
            Requirement::Orthographic => self.orthographic,
            Requirement::Drawing => self.drawing,
            Requirement::Step => self.step,
            Requirement::Prototype => self.prototype,
            Requirement::Video => self.video,
            Requirement::Brochure => self.brochure,
        }
    }

    pub fn set(&mut self, requirement: Requirement, value: bool) {
        let flag = match requirement {
            Requirement::Render => &mut self.render,
            Requirement::Orthographic => &mut self.orthographic,
            Requirement::Drawing => &mut self.drawing,
            Requirement::Step => &mut self.step,
            Requirement::Prototype => &mut self.prototype,
            Requirement::Video => &mut self.video,
            Requirement::Brochure => &mut self.brochure,
        };
        *flag = value;
    }

    /// Flags that are set, in declaration order.
    pub fn enabled(&self) -> Vec<Requirement> {
        Requirement::ALL
            .into_iter()
            .filter(|r| self.get(*r))
            .collect()
    }
}

/// A tracked work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Requirements,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
    pub date_submitted: NaiveDate,
    #[serde(default, with = "optional_date")]
    pub date_complete: Option<NaiveDate>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub comments: String,
}

impl Job {
    /// Whole days between submission and completion, if completed.
    ///
    /// Negative when the completion date precedes the submission date.
    pub fn turnaround_days(&self) -> Option<i64> {
        self.date_complete
            .map(|done| (done - self.date_submitted).num_days())
    }
}

/// Serde adapter for the stored completion date: absent is written as `""`,
/// and both `""` and `null` read back as absent.
pub(crate) mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
