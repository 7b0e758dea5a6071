//! Cast requests and field validation.
//!
//! Validation reports a list of human-readable field issues rather than
//! failing on the first problem; callers show the full report and
//! re-prompt. The pipeline is only entered with a clean request.

use serde::{Deserialize, Serialize};

use crate::method::CastMethod;

/// A single problem found while validating a request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// The field the issue was found on.
    pub field: String,
    /// A human-readable description of the issue.
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A divination request as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastRequest {
    /// The question put to the oracle. Interpolated into the reading,
    /// never parsed.
    pub question: String,
    /// The casting method.
    pub method: CastMethod,
    /// Exactly six integers in 1-9; required by the numbers method and
    /// ignored by the others.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbers: Option<Vec<u32>>,
}

impl CastRequest {
    /// A request for an RNG-driven method.
    pub fn new(question: impl Into<String>, method: CastMethod) -> Self {
        Self {
            question: question.into(),
            method,
            numbers: None,
        }
    }

    /// A request for the numbers method.
    pub fn with_numbers(question: impl Into<String>, numbers: Vec<u32>) -> Self {
        Self {
            question: question.into(),
            method: CastMethod::Numbers,
            numbers: Some(numbers),
        }
    }

    /// Validate the request, returning every field issue found.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.question.trim().is_empty() {
            issues.push(ValidationIssue {
                field: "question".to_string(),
                message: "question must not be empty".to_string(),
            });
        }

        if self.method == CastMethod::Numbers {
            match &self.numbers {
                None => issues.push(ValidationIssue {
                    field: "numbers".to_string(),
                    message: "six numbers are required for the numbers method".to_string(),
                }),
                Some(numbers) => issues.extend(numbers_issues(numbers)),
            }
        }

        issues
    }
}

/// Field issues for a raw six-number sequence.
pub fn numbers_issues(numbers: &[u32]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if numbers.len() != 6 {
        issues.push(ValidationIssue {
            field: "numbers".to_string(),
            message: format!("expected exactly 6 numbers, got {}", numbers.len()),
        });
    }
    for (i, n) in numbers.iter().enumerate() {
        if !(1..=9).contains(n) {
            issues.push(ValidationIssue {
                field: "numbers".to_string(),
                message: format!("number {n} at position {} is out of range (1-9)", i + 1),
            });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request_has_no_issues() {
        let request = CastRequest::new("Will the harvest be good?", CastMethod::ThreeCoins);
        assert!(request.validate().is_empty());
    }

    #[test]
    fn valid_numbers_request_has_no_issues() {
        let request = CastRequest::with_numbers("What now?", vec![1, 2, 3, 4, 5, 6]);
        assert!(request.validate().is_empty());
    }

    #[test]
    fn empty_question_is_reported() {
        let request = CastRequest::new("   ", CastMethod::Random);
        let issues = request.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "question");
    }

    #[test]
    fn missing_numbers_are_reported() {
        let request = CastRequest::new("What now?", CastMethod::Numbers);
        let issues = request.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("required"));
    }

    #[test]
    fn all_issues_are_collected_at_once() {
        let request = CastRequest::with_numbers("", vec![0, 12]);
        let issues = request.validate();
        // Empty question, wrong arity, and two out-of-range values.
        assert_eq!(issues.len(), 4);
        assert_eq!(issues[0].field, "question");
        assert!(issues.iter().skip(1).all(|i| i.field == "numbers"));
    }

    #[test]
    fn numbers_are_ignored_for_other_methods() {
        let mut request = CastRequest::new("What now?", CastMethod::ThreeCoins);
        request.numbers = Some(vec![99]);
        assert!(request.validate().is_empty());
    }

    #[test]
    fn issue_display() {
        let issue = ValidationIssue {
            field: "question".to_string(),
            message: "question must not be empty".to_string(),
        };
        assert_eq!(issue.to_string(), "question: question must not be empty");
    }

    #[test]
    fn request_serde_round_trip() {
        let request = CastRequest::with_numbers("What now?", vec![1, 2, 3, 4, 5, 6]);
        let json = serde_json::to_string(&request).unwrap();
        let back: CastRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn absent_numbers_are_omitted_from_json() {
        let request = CastRequest::new("What now?", CastMethod::Random);
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("numbers"));
    }
}
