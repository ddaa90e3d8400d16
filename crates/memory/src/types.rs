//! Log record types.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp layout: local time, ISO-8601, microsecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One persisted agent interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Local capture time, ISO-8601
    pub timestamp: String,

    /// Display name of the persona that answered
    #[serde(rename = "agentName")]
    pub agent_name: String,

    /// The user's query as submitted
    pub query: String,

    /// The model's response text, verbatim
    pub response: String,
}

impl LogEntry {
    /// Build an entry stamped with the current local time.
    pub fn now(
        agent_name: impl Into<String>,
        query: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: current_timestamp(),
            agent_name: agent_name.into(),
            query: query.into(),
            response: response.into(),
        }
    }
}

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_timestamp_is_iso8601() {
        let ts = current_timestamp();
        assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(ts.len(), "2024-01-01T00:00:00.000000".len());
    }

    #[test]
    fn test_entry_now() {
        let entry = LogEntry::now("Insights", "q", "r");
        assert_eq!(entry.agent_name, "Insights");
        assert_eq!(entry.query, "q");
        assert_eq!(entry.response, "r");
        assert!(!entry.timestamp.is_empty());
    }
}
