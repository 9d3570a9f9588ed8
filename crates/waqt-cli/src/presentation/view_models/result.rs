use serde::Serialize;

use super::common::{StatusBadge, Tip};

/// Envelope of every one-shot command: the content plus an optional verdict
/// and follow-up tips. In JSON mode this struct is the whole output.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,
    pub content: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<Tip>,
}

impl<T: Serialize> CommandResultViewModel<T> {
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            tips: Vec::new(),
        }
    }

    pub fn with_badge(self, badge: StatusBadge) -> Self {
        Self {
            badge: Some(badge),
            ..self
        }
    }

    pub fn with_tip(mut self, tip: Tip) -> Self {
        self.tips.push(tip);
        self
    }
}
