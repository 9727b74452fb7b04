//! Waitlist form draft and its option catalogues.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Self-reported math experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
        ExperienceLevel::Expert,
    ];

    /// Form value used by the `<select>` element.
    pub fn value(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
            ExperienceLevel::Expert => "expert",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
            ExperienceLevel::Expert => "Expert",
        }
    }

    /// Parse a form value; anything unknown (including "") is unset.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Features a visitor can say they are interested in.
pub const INTEREST_OPTIONS: [&str; 6] = [
    "Video Explanations",
    "Equation Solving",
    "Graph Visualization",
    "AI Chatbot",
    "Transcription",
    "Guided Learning",
];

/// Editable contents of the details step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub experience_level: Option<ExperienceLevel>,
    /// Selected interests, in the order they were ticked
    pub interests: Vec<String>,
    /// Free-text "what do you hope to get out of it"
    pub expectations: String,
}

impl FormDraft {
    /// Tick or untick an interest. Interests stay unique.
    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(pos) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest.to_string());
        }
    }

    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }

    /// Fill the email field from the signed-in account unless already set.
    pub fn prefill_email(&mut self, email: &str) {
        if self.email.is_empty() {
            self.email = email.to_string();
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_level_values_roundtrip_through_form() {
        for level in ExperienceLevel::ALL {
            assert_eq!(ExperienceLevel::from_value(level.value()), Some(level));
        }
        assert_eq!(ExperienceLevel::from_value(""), None);
        assert_eq!(ExperienceLevel::from_value("guru"), None);
    }

    #[test]
    fn toggle_interest_keeps_set_semantics() {
        let mut draft = FormDraft::default();
        draft.toggle_interest("AI Chatbot");
        draft.toggle_interest("Transcription");
        draft.toggle_interest("AI Chatbot");

        assert_eq!(draft.interests, vec!["Transcription".to_string()]);
        assert!(draft.has_interest("Transcription"));
        assert!(!draft.has_interest("AI Chatbot"));
    }

    #[test]
    fn prefill_does_not_overwrite_typed_email() {
        let mut draft = FormDraft::default();
        draft.prefill_email("a@example.com");
        draft.prefill_email("b@example.com");
        assert_eq!(draft.email, "a@example.com");
    }
}
