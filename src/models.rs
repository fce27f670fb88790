use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStringError;

impl Display for ParseStringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized value")
    }
}

/// Identifiers handed out by the analytics service, which uses numbers for
/// some teams and strings for others.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ExternalId {
    Number(i64),
    String(String),
}

impl ExternalId {
    pub fn matches(&self, other: &str) -> bool {
        match self {
            ExternalId::Number(n) => other.parse::<i64>().map(|o| o == *n).unwrap_or(false),
            ExternalId::String(s) => s == other,
        }
    }
}

impl Display for ExternalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExternalId::Number(n) => write!(f, "{n}"),
            ExternalId::String(s) => write!(f, "{s}"),
        }
    }
}

/// A statistic as the analytics service sent it. Some feeds quote their
/// numbers, so `"55"` and `55` are both accepted and written back unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StatValue {
    Number(serde_json::Number),
    Text(String),
}

impl Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatValue::Number(n) if n.is_f64() => write!(f, "{}", n.as_f64().unwrap_or_default()),
            StatValue::Number(n) => write!(f, "{n}"),
            StatValue::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Text => "text/plain; charset=utf-8",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "text" => Ok(ExportFormat::Text),
            "txt" => Ok(ExportFormat::Text),
            _ => Err(ParseStringError)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    FixtureAnalysis,
    OpponentAnalysis,
    TacticalReport,
}

impl ReportKind {
    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::FixtureAnalysis => "analysis",
            ReportKind::OpponentAnalysis => "opponent_analysis",
            ReportKind::TacticalReport => "tactical_report",
        }
    }

    pub fn rule_width(&self) -> usize {
        match self {
            ReportKind::FixtureAnalysis | ReportKind::OpponentAnalysis => 50,
            ReportKind::TacticalReport => 60,
        }
    }
}
