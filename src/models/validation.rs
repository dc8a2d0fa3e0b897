use serde::{Deserialize, Serialize};

use crate::utils::format_date;

/// Outcome of the latest data-validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub timestamp: String,
    pub success: bool,
    #[serde(default)]
    pub messages: Vec<String>,
}

impl ValidationResult {
    pub fn display_date(&self) -> String {
        format_date(&self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_validation_document() {
        let json = r#"{
            "_id": "65e1f0",
            "success": false,
            "messages": ["Column names match", "Target column has invalid values"],
            "timestamp": "2024-03-01T06:00:03.512345"
        }"#;
        let result: ValidationResult = serde_json::from_str(json).unwrap();
        assert!(!result.success);
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.display_date(), "01.03.2024");
    }
}
