pub mod course_manager;
pub mod quiz_manager;

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::{Action, AppError};

pub use course_manager::CourseManager;
pub use quiz_manager::QuizManager;

/// What the user sees after an orchestrated action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The remote call succeeded and the owning list was reloaded.
    Done(String),
    /// Local checks failed; nothing was sent.
    Rejected(String),
    /// The remote call failed; local state is unchanged.
    Failed(String),
    /// The user answered no to the confirmation prompt.
    Declined,
    /// The view was closed before the call finished.
    Cancelled,
}

impl Outcome {
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Done(msg) | Outcome::Rejected(msg) | Outcome::Failed(msg) => Some(msg),
            Outcome::Declined | Outcome::Cancelled => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    pub(crate) fn from_error(err: &AppError, action: Action) -> Self {
        match err {
            AppError::Cancelled => Outcome::Cancelled,
            AppError::Field(_) | AppError::Validation(_) => Outcome::Rejected(err.to_string()),
            other => Outcome::Failed(other.user_message(action)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
}

/// Blocking yes/no prompt shown before destructive calls.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&ConfirmPrompt) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self(prompt)
    }
}

/// Runs `fut` unless `token` fires first, in which case the result is dropped.
pub(crate) async fn cancellable<T, F>(token: &CancellationToken, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(AppError::Cancelled),
        result = fut => result,
    }
}
