use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk classification computed by the backend for reservoirs and districts.
///
/// Ordered from most to least severe, so sorting a list of statuses puts
/// `Critical` first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Critical,
    Warning,
    Caution,
    Safe,
    /// Any value the backend sends that this client does not know yet.
    #[serde(other)]
    Unknown,
}

impl Status {
    pub fn as_code(&self) -> &'static str {
        match self {
            Status::Critical => "CRITICAL",
            Status::Warning => "WARNING",
            Status::Caution => "CAUTION",
            Status::Safe => "SAFE",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Urgency of a recommended action.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub fn as_code(&self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
            Priority::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A `{name, status}` pair linking a district to its source reservoirs, or
/// a reservoir to the districts it supplies.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StatusRef {
    pub name: String,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_decodes_backend_codes() {
        let statuses: Vec<Status> =
            serde_json::from_str(r#"["CRITICAL","WARNING","CAUTION","SAFE"]"#).unwrap();
        assert_eq!(
            statuses,
            vec![Status::Critical, Status::Warning, Status::Caution, Status::Safe]
        );
    }

    #[test]
    fn test_unrecognised_codes_become_unknown() {
        let status: Status = serde_json::from_str(r#""FLOODED""#).unwrap();
        assert_eq!(status, Status::Unknown);
        let priority: Priority = serde_json::from_str(r#""URGENT""#).unwrap();
        assert_eq!(priority, Priority::Unknown);
    }

    #[test]
    fn test_status_orders_by_severity() {
        let mut statuses = vec![Status::Safe, Status::Critical, Status::Caution];
        statuses.sort();
        assert_eq!(statuses[0], Status::Critical);
        assert_eq!(statuses[2], Status::Safe);
    }
}
