use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SelectorError;

/// Built-in symbolic ruler types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeType {
    /// 24 hourly slots, `00:00` .. `23:00`.
    Day,
    /// 12 hourly slots, `00:00` .. `11:00`.
    HalfDay,
    /// 7 weekday slots, `Mon` .. `Sun`.
    Week,
}

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

impl RangeType {
    pub const ALL: [Self; 3] = [Self::Day, Self::HalfDay, Self::Week];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::HalfDay => "half-day",
            Self::Week => "week",
        }
    }

    #[must_use]
    pub fn slot_count(self) -> usize {
        match self {
            Self::Day => 24,
            Self::HalfDay => 12,
            Self::Week => WEEKDAY_LABELS.len(),
        }
    }

    #[must_use]
    pub fn labels(self) -> Vec<String> {
        match self {
            Self::Day | Self::HalfDay => (0..self.slot_count())
                .map(|hour| format!("{hour:02}:00"))
                .collect(),
            Self::Week => WEEKDAY_LABELS.iter().map(|&day| day.to_owned()).collect(),
        }
    }
}

impl fmt::Display for RangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RangeType {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SelectorError::InvalidData(format!("unknown range type: {s}")))
    }
}

/// Host-facing ruler description: a symbolic name or explicit slot labels.
///
/// Deserializes from either a JSON string (`"day"`) or an array of labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeSpec {
    Named(String),
    Labels(Vec<String>),
}

impl RangeSpec {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    #[must_use]
    pub fn labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Labels(labels.into_iter().map(Into::into).collect())
    }
}

impl Default for RangeSpec {
    fn default() -> Self {
        Self::Named(RangeType::Day.name().to_owned())
    }
}

impl From<RangeType> for RangeSpec {
    fn from(kind: RangeType) -> Self {
        Self::Named(kind.name().to_owned())
    }
}

/// Resolves a ruler description against the built-in table.
///
/// Explicit labels pass through unchanged. Unknown names yield an empty
/// sequence; this only affects rendering width, so it never errors.
#[must_use]
pub fn resolve_slots(spec: &RangeSpec) -> Vec<String> {
    match spec {
        RangeSpec::Labels(labels) => labels.clone(),
        RangeSpec::Named(name) => match name.parse::<RangeType>() {
            Ok(kind) => kind.labels(),
            Err(_) => {
                debug!(range = %name, "unknown range type resolves to an empty ruler");
                Vec::new()
            }
        },
    }
}

/// Named slot tables: the built-ins plus any host-registered ones.
///
/// The catalog is assembled up front and treated as read-only once a
/// selector resolves its ruler from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeCatalog {
    tables: IndexMap<String, Vec<String>>,
}

impl RangeCatalog {
    #[must_use]
    pub fn builtin() -> Self {
        let tables = RangeType::ALL
            .into_iter()
            .map(|kind| (kind.name().to_owned(), kind.labels()))
            .collect();
        Self { tables }
    }

    /// Registers or overrides a named table.
    #[must_use]
    pub fn with_range<I, S>(mut self, name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables
            .insert(name.into(), labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    #[must_use]
    pub fn resolve(&self, spec: &RangeSpec) -> Vec<String> {
        match spec {
            RangeSpec::Labels(labels) => labels.clone(),
            RangeSpec::Named(name) => match self.tables.get(name) {
                Some(labels) => labels.clone(),
                None => {
                    debug!(range = %name, "range type missing from catalog");
                    Vec::new()
                }
            },
        }
    }
}

impl Default for RangeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_has_24_ordered_hour_labels() {
        let slots = resolve_slots(&RangeSpec::named("day"));
        assert_eq!(slots.len(), 24);
        assert_eq!(slots.first().map(String::as_str), Some("00:00"));
        assert_eq!(slots.last().map(String::as_str), Some("23:00"));
    }

    #[test]
    fn unknown_name_resolves_empty() {
        assert!(resolve_slots(&RangeSpec::named("fortnight")).is_empty());
    }

    #[test]
    fn catalog_keeps_builtin_order_then_custom() {
        let catalog = RangeCatalog::builtin().with_range("shift", ["A", "B", "C"]);
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["day", "half-day", "week", "shift"]);
        assert_eq!(catalog.resolve(&RangeSpec::named("shift")).len(), 3);
    }

    #[test]
    fn spec_deserializes_from_string_or_array() {
        let named: RangeSpec = serde_json::from_str("\"week\"").expect("named spec");
        assert_eq!(named, RangeSpec::named("week"));
        let labels: RangeSpec = serde_json::from_str("[\"a\",\"b\"]").expect("label spec");
        assert_eq!(labels, RangeSpec::labels(["a", "b"]));
    }
}
