use serde::{Deserialize, Serialize};

/// Severity level for a vulnerability finding, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// All levels in display order, from least to most severe. This is the
    /// order the severity count list is emitted in.
    pub const ASCENDING: [Severity; 5] = [
        Severity::Info,
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Returns a numeric rank where lower values indicate higher severity.
    /// Critical = 0, High = 1, Medium = 2, Low = 3, Info = 4.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
            Severity::Info => 4,
        }
    }

    /// Capitalized label as used in upstream severity endpoints ("Critical", "High", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Info => "Info",
        }
    }

    /// Maps a scanner severity code (numeric string) to a level.
    /// Unrecognized codes fall back to Info.
    pub fn from_code(code: &str) -> Severity {
        match code {
            "0" => Severity::Info,
            "1" => Severity::Low,
            "2" => Severity::Medium,
            "3" => Severity::High,
            "4" => Severity::Critical,
            _ => Severity::Info,
        }
    }

    /// Classifies by CVSS-like score. Checks run in ascending order and the
    /// first matching threshold wins; a missing score is treated as 0.0.
    pub fn from_score(score: f64) -> Severity {
        if score < 0.1 {
            Severity::Info
        } else if score < 4.0 {
            Severity::Low
        } else if score < 7.0 {
            Severity::Medium
        } else if score < 9.0 {
            Severity::High
        } else {
            Severity::Critical
        }
    }

    /// Parses a capitalized label ("Critical", "high", ...) as accepted on
    /// API paths and the CLI.
    pub fn parse_label(label: &str) -> Option<Severity> {
        match label.to_ascii_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            "info" => Some(Severity::Info),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_mapping() {
        assert_eq!(Severity::from_code("0"), Severity::Info);
        assert_eq!(Severity::from_code("1"), Severity::Low);
        assert_eq!(Severity::from_code("2"), Severity::Medium);
        assert_eq!(Severity::from_code("3"), Severity::High);
        assert_eq!(Severity::from_code("4"), Severity::Critical);
    }

    #[test]
    fn unrecognized_code_defaults_to_info() {
        assert_eq!(Severity::from_code("5"), Severity::Info);
        assert_eq!(Severity::from_code(""), Severity::Info);
        assert_eq!(Severity::from_code("high"), Severity::Info);
    }

    #[test]
    fn score_thresholds() {
        assert_eq!(Severity::from_score(0.0), Severity::Info);
        assert_eq!(Severity::from_score(0.09), Severity::Info);
        assert_eq!(Severity::from_score(0.1), Severity::Low);
        assert_eq!(Severity::from_score(3.9), Severity::Low);
        assert_eq!(Severity::from_score(4.0), Severity::Medium);
        assert_eq!(Severity::from_score(6.9), Severity::Medium);
        assert_eq!(Severity::from_score(7.0), Severity::High);
        assert_eq!(Severity::from_score(8.9), Severity::High);
        assert_eq!(Severity::from_score(9.0), Severity::Critical);
        assert_eq!(Severity::from_score(9.5), Severity::Critical);
        assert_eq!(Severity::from_score(10.0), Severity::Critical);
    }

    #[test]
    fn label_round_trip() {
        for sev in Severity::ASCENDING {
            assert_eq!(Severity::parse_label(sev.label()), Some(sev));
        }
        assert_eq!(Severity::parse_label("bogus"), None);
    }
}
