//! Program request bodies and query modifiers

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Body for assigning a program to a client
///
/// Unset optional fields inherit their values from the template.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProgramAssignment {
    pub template_id: u64,
    /// ISO8601, e.g. 2018-06-13T00:00:00Z
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_weeks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_adherence: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_pain_levels: Option<bool>,
}

impl ProgramAssignment {
    pub fn new(template_id: u64, start_date: impl Into<String>) -> Self {
        Self {
            template_id,
            start_date: start_date.into(),
            external_id: None,
            num_weeks: None,
            track_adherence: None,
            track_pain_levels: None,
        }
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn num_weeks(mut self, num_weeks: u32) -> Self {
        self.num_weeks = Some(num_weeks);
        self
    }

    pub fn track_adherence(mut self, track: bool) -> Self {
        self.track_adherence = Some(track);
        self
    }

    pub fn track_pain_levels(mut self, track: bool) -> Self {
        self.track_pain_levels = Some(track);
        self
    }
}

/// Body for updating an assigned program
///
/// `end_date` is always sent: `null` ends the program today.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProgramUpdate {
    pub end_date: Option<String>,
}

impl ProgramUpdate {
    /// End the program on the given ISO8601 date
    pub fn end_on(date: impl Into<String>) -> Self {
        Self {
            end_date: Some(date.into()),
        }
    }

    /// End the program today
    pub fn end_now() -> Self {
        Self { end_date: None }
    }
}

/// How an access code is delivered to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DeliveryChannel {
    #[default]
    Email,
    Sms,
}

impl DeliveryChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryChannel::Email => "email",
            DeliveryChannel::Sms => "sms",
        }
    }
}

impl std::fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rendering of a program's exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgramExercisesFormat {
    /// The whole routine for the duration of the program
    #[default]
    Routine,
    /// A link to a personalized PDF with the exercise descriptions
    Pdf,
}

impl ProgramExercisesFormat {
    /// Query string appended to the exercises path
    pub fn query(&self) -> &'static str {
        match self {
            ProgramExercisesFormat::Routine => "",
            ProgramExercisesFormat::Pdf => "?format=pdf",
        }
    }
}
