//! Confirmation prompt with a preset answer

use async_trait::async_trait;
use pane_router_core::traits::ConfirmationPrompt;

/// Answers every confirmation the same way (headless frontends, scripted runs)
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswerPrompt {
    answer: bool,
}

impl FixedAnswerPrompt {
    #[must_use]
    pub const fn new(answer: bool) -> Self {
        Self { answer }
    }
}

#[async_trait]
impl ConfirmationPrompt for FixedAnswerPrompt {
    async fn confirm(&self, message: &str) -> bool {
        let answer = if self.answer { "yes" } else { "no" };
        log::info!("Confirmation '{message}' answered {answer}");
        self.answer
    }
}
