use serde::{Deserialize, Serialize};

use crate::model::GoalDuration;

/// What the user wants to learn and over which window.
///
/// The topic is free text and may be empty. Surrounding whitespace is
/// dropped so an all-blank topic reads as no topic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Goal {
    topic: String,
    duration: GoalDuration,
}

impl Goal {
    #[must_use]
    pub fn new(topic: impl Into<String>, duration: GoalDuration) -> Self {
        let topic = topic.into();
        Self {
            topic: topic.trim().to_owned(),
            duration,
        }
    }

    // Accessors
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn duration(&self) -> GoalDuration {
        self.duration
    }

    #[must_use]
    pub fn has_topic(&self) -> bool {
        !self.topic.is_empty()
    }
}
