//! Modal confirmation boundary

use async_trait::async_trait;

/// Shows a modal confirm dialog
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    /// Resolves to `true` on the affirmative answer
    async fn confirm(&self, message: &str) -> bool;
}
