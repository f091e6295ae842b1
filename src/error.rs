use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Invalid goal type: {label}{}", suggestion_hint(.suggestion))]
    InvalidGoal {
        label: String,
        suggestion: Option<&'static str>,
    },

    #[error("No candidate foods available")]
    EmptyCandidateSet,

    #[error("Food '{0}' has no positive calorie value")]
    DivisionByZero(String),

    #[error("Food catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn suggestion_hint(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(label) => format!(" (did you mean '{}'?)", label),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, RecommendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_goal_message_includes_suggestion() {
        let err = RecommendError::InvalidGoal {
            label: "balancd".to_string(),
            suggestion: Some("balanced"),
        };
        assert_eq!(
            err.to_string(),
            "Invalid goal type: balancd (did you mean 'balanced'?)"
        );

        let bare = RecommendError::InvalidGoal {
            label: "invalid".to_string(),
            suggestion: None,
        };
        assert_eq!(bare.to_string(), "Invalid goal type: invalid");
    }
}
