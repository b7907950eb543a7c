//! Enumerations used for categorising and viewing appointments.
//!
//! # Responsibility
//! - Define priority, recurrence and view granularity enums.
//! - Provide exhaustive presentation tables keyed by enum value.
//!
//! # Invariants
//! - Wire names are snake_case and stable.
//! - Presentation lookups are `match` based; adding a variant fails to compile
//!   until every table handles it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Colour-coded category of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
    Personal,
    Work,
}

/// Presentation record for one priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityStyle {
    pub label: &'static str,
    /// Foreground colour token.
    pub color: &'static str,
    /// Background colour token.
    pub bg_color: &'static str,
    pub icon: &'static str,
}

impl Priority {
    /// All priorities in display order.
    pub const ALL: [Priority; 5] = [
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::Personal,
        Priority::Work,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Personal => "personal",
            Self::Work => "work",
        }
    }

    pub fn style(self) -> PriorityStyle {
        match self {
            Self::High => PriorityStyle {
                label: "High priority",
                color: "priority-high",
                bg_color: "priority-high-bg",
                icon: "🔴",
            },
            Self::Medium => PriorityStyle {
                label: "Medium priority",
                color: "priority-medium",
                bg_color: "priority-medium-bg",
                icon: "🟠",
            },
            Self::Low => PriorityStyle {
                label: "Low priority",
                color: "priority-low",
                bg_color: "priority-low-bg",
                icon: "🟢",
            },
            Self::Personal => PriorityStyle {
                label: "Personal",
                color: "priority-personal",
                bg_color: "priority-personal-bg",
                icon: "🔵",
            },
            Self::Work => PriorityStyle {
                label: "Work / Study",
                color: "priority-work",
                bg_color: "priority-work-bg",
                icon: "🟣",
            },
        }
    }
}

/// Repetition rule. Stored and displayed only; never expanded into instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl RecurrenceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Badge label; `None` when nothing should be shown.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Daily => Some("Daily"),
            Self::Weekly => Some("Weekly"),
            Self::Monthly => Some("Monthly"),
        }
    }
}

/// Calendar granularity currently displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewType {
    pub const ALL: [ViewType; 3] = [ViewType::Day, ViewType::Week, ViewType::Month];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Today",
            Self::Week => "Week",
            Self::Month => "Month",
        }
    }
}

/// Priority selection applied before every projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "priority")]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == priority,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(priority) => priority.as_str(),
        }
    }
}

impl From<Priority> for PriorityFilter {
    fn from(value: Priority) -> Self {
        Self::Only(value)
    }
}

/// Unknown enum text received from CLI/FFI input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl Display for ParseEnumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported {} `{}`; expected {}",
            self.kind, self.value, self.expected
        )
    }
}

impl Error for ParseEnumError {}

fn parse_error(kind: &'static str, value: &str, expected: &'static str) -> ParseEnumError {
    ParseEnumError {
        kind,
        value: value.to_string(),
        expected,
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "personal" => Ok(Self::Personal),
            "work" => Ok(Self::Work),
            _ => Err(parse_error(
                "priority",
                s,
                "high|medium|low|personal|work",
            )),
        }
    }
}

impl FromStr for RecurrenceType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(parse_error("recurrence", s, "none|daily|weekly|monthly")),
        }
    }
}

impl FromStr for ViewType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(parse_error("view type", s, "day|week|month")),
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Priority>().map(Self::Only).map_err(|_| {
            parse_error(
                "priority filter",
                s,
                "all|high|medium|low|personal|work",
            )
        })
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for ViewType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for PriorityFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Priority, PriorityFilter, RecurrenceType, ViewType};
    use std::collections::HashSet;

    #[test]
    fn every_priority_has_distinct_style_tokens() {
        let colors: HashSet<_> = Priority::ALL.iter().map(|p| p.style().color).collect();
        assert_eq!(colors.len(), Priority::ALL.len());
    }

    #[test]
    fn filter_parses_all_and_single_priority() {
        assert_eq!("all".parse::<PriorityFilter>().unwrap(), PriorityFilter::All);
        assert_eq!(
            " Work ".parse::<PriorityFilter>().unwrap(),
            PriorityFilter::Only(Priority::Work)
        );
        assert!("urgent".parse::<PriorityFilter>().is_err());
    }

    #[test]
    fn view_types_parse_back_from_their_text() {
        for view in ViewType::ALL {
            assert_eq!(view.as_str().parse::<ViewType>().unwrap(), view);
            assert!(!view.label().is_empty());
        }
        assert!("year".parse::<ViewType>().is_err());
    }

    #[test]
    fn defaults_match_initial_view_state() {
        assert_eq!(ViewType::default(), ViewType::Week);
        assert_eq!(PriorityFilter::default(), PriorityFilter::All);
        assert_eq!(RecurrenceType::default(), RecurrenceType::None);
        assert_eq!(RecurrenceType::None.label(), None);
    }
}
