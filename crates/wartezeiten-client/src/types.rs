//! Request and response types for the Wartezeiten API.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;


/// Response language accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German.
    #[default]
    De,
    /// English.
    En,
}

impl Language {
    /// Returns the wire value of the language.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de" => Ok(Self::De),
            "en" => Ok(Self::En),
            other => Err(Error::InvalidRequest(format!(
                "unsupported language `{other}`, expected `de` or `en`"
            ))),
        }
    }
}

/// Operating status of an attraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitingStatus {
    /// Open and accepting riders.
    Opened,
    /// Boarding through a virtual queue.
    VirtualQueue,
    /// Down for maintenance.
    Maintenance,
    /// Closed because of ice.
    ClosedIce,
    /// Closed because of weather.
    ClosedWeather,
    /// Closed.
    Closed,
}

impl std::fmt::Display for WaitingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Opened => write!(f, "opened"),
            Self::VirtualQueue => write!(f, "virtualqueue"),
            Self::Maintenance => write!(f, "maintenance"),
            Self::ClosedIce => write!(f, "closedice"),
            Self::ClosedWeather => write!(f, "closedweather"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

// ============================================================================
// Request headers
// ============================================================================

/// Fixed set of headers sent with a request.
pub trait RequestHeaders {
    /// Header name/value pairs, in the order they are sent.
    fn header_pairs(&self) -> Vec<(&'static str, &str)>;
}

/// Headers for `GET /v1/parks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParksRequest {
    /// Language of park names.
    pub language: Language,
}

impl ParksRequest {
    /// Creates a parks request for the given language.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl RequestHeaders for ParksRequest {
    fn header_pairs(&self) -> Vec<(&'static str, &str)> {
        vec![("language", self.language.as_str())]
    }
}

/// Headers for `GET /v1/openingtimes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningTimesRequest {
    /// Park identifier.
    pub park: String,
}

impl OpeningTimesRequest {
    /// Creates an opening times request for a park.
    #[must_use]
    pub fn new(park: impl Into<String>) -> Self {
        Self { park: park.into() }
    }
}

impl RequestHeaders for OpeningTimesRequest {
    fn header_pairs(&self) -> Vec<(&'static str, &str)> {
        vec![("park", self.park.as_str())]
    }
}

/// Headers for `GET /v1/waitingtimes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingTimesRequest {
    /// Park identifier.
    pub park: String,
    /// Language of attraction names.
    pub language: Language,
}

impl WaitingTimesRequest {
    /// Creates a waiting times request for a park.
    #[must_use]
    pub fn new(park: impl Into<String>, language: Language) -> Self {
        Self {
            park: park.into(),
            language,
        }
    }
}

impl RequestHeaders for WaitingTimesRequest {
    fn header_pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("park", self.park.as_str()),
            ("language", self.language.as_str()),
        ]
    }
}

// ============================================================================
// Responses
// ============================================================================

/// A theme park.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Park {
    /// Park identifier, used as the `park` header of other endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Country or region.
    pub land: String,
}

/// Opening hours of a park for the current day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningTimes {
    /// Whether the park opens today.
    pub opened_today: bool,
    /// Opening time, ISO 8601 with offset.
    pub open_from: String,
    /// Closing time, ISO 8601 with offset.
    pub closed_from: String,
}

/// Current queue time of one attraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingTimes {
    /// Timestamp of the measurement, ISO 8601.
    pub datetime: String,
    /// Date part of the measurement.
    pub date: String,
    /// Time part of the measurement.
    pub time: String,
    /// Attraction code.
    pub code: String,
    /// Waiting time in minutes.
    pub waitingtime: i64,
    /// Attraction status.
    pub status: WaitingStatus,
    /// Attraction name.
    pub name: String,
}

/// Response of `GET /v1/parks`.
pub type GetParksResponse = Vec<Park>;

/// Response of `GET /v1/openingtimes`.
pub type GetOpeningTimesResponse = Vec<OpeningTimes>;

/// Response of `GET /v1/waitingtimes`.
pub type GetWaitingTimesResponse = Vec<WaitingTimes>;
