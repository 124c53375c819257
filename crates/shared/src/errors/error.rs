use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<FieldIssue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            message: message.into(),
            issues: None,
            details: None,
        }
    }
}

/// Error param holding the declaration rank of the failing field.
pub const POSITION_PARAM: &str = "position";

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Flattens validator output in declaration order; fields without a
    /// `position` param follow, by name.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<FieldIssue> {
        let mut ranked = Vec::new();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| match error.code.as_ref() {
                        "email" => "Invalid email format".to_string(),
                        "url" => "Invalid URL format".to_string(),
                        "length" => "Invalid length".to_string(),
                        "range" => "Value out of range".to_string(),
                        "required" => "Required".to_string(),
                        _ => format!("Invalid {field}"),
                    });
                let position = error
                    .params
                    .get(POSITION_PARAM)
                    .and_then(|p| p.as_u64())
                    .unwrap_or(u64::MAX);
                ranked.push((position, FieldIssue::new(field.to_string(), message)));
            }
        }

        ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.path.cmp(&b.1.path)));
        ranked.into_iter().map(|(_, issue)| issue).collect()
    }

    pub fn summary(issues: &[FieldIssue]) -> String {
        issues
            .first()
            .map(|issue| format!("{}: {}", issue.path, issue.message))
            .unwrap_or_else(|| "Validation failed".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn issues_follow_declaration_order_and_summarize() {
        fn ranked(code: &'static str, position: usize) -> ValidationError {
            let mut error = ValidationError::new(code);
            error.add_param(POSITION_PARAM.into(), &position);
            error
        }

        let mut errors = ValidationErrors::new();
        errors.add("imageUrl", ranked("url", 1));
        errors.add("alpha", ValidationError::new("required"));
        errors.add(
            "name",
            ranked("length", 0).with_message("Too short".into()),
        );
        errors.add("stock", ValidationError::new("range"));

        let issues = FieldIssue::from_validation_errors(&errors);

        assert_eq!(
            issues,
            vec![
                FieldIssue::new("name", "Too short"),
                FieldIssue::new("imageUrl", "Invalid URL format"),
                FieldIssue::new("alpha", "Required"),
                FieldIssue::new("stock", "Value out of range"),
            ]
        );
        assert_eq!(FieldIssue::summary(&issues), "name: Too short");
        assert_eq!(FieldIssue::summary(&[]), "Validation failed");
    }
}
