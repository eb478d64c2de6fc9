use std::fmt;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not signed in")]
    Unauthenticated,

    #[error("Request cancelled")]
    Cancelled,
}

/// Field-presence failures, checked before any domain rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("The {0} field is required")]
    Missing(&'static str),

    #[error("Duration must be at least one minute")]
    NonPositiveDuration,
}

/// Domain rules a quiz must satisfy before it can be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("At least 2 options are required (got {count})")]
    InsufficientOptions { count: usize },

    #[error("The correct answer index {index} is invalid for {count} options")]
    InvalidCorrectIndex { index: usize, count: usize },
}

/// Failure body returned by the remote store, parsed once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ErrorPayload {
    #[default]
    Empty,
    Text(String),
    Structured { message: String },
}

impl ErrorPayload {
    pub fn from_body(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return ErrorPayload::Empty;
        }

        match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::String(text)) if text.trim().is_empty() => ErrorPayload::Empty,
            Ok(Value::String(text)) => ErrorPayload::Text(text),
            Ok(Value::Object(map)) => match map.get("message").and_then(Value::as_str) {
                Some(message) if !message.trim().is_empty() => ErrorPayload::Structured {
                    message: message.to_string(),
                },
                _ => ErrorPayload::Empty,
            },
            Ok(Value::Null) => ErrorPayload::Empty,
            Ok(_) | Err(_) => ErrorPayload::Text(trimmed.to_string()),
        }
    }

    /// The message carried by the payload itself, whatever its shape.
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorPayload::Empty => None,
            ErrorPayload::Text(text) => Some(text),
            ErrorPayload::Structured { message } => Some(message),
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or("<empty>"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.status, .payload, .message))]
pub struct TransportError {
    pub status: Option<u16>,
    pub payload: ErrorPayload,
    /// Transport-level description, e.g. the client's own error text.
    pub message: Option<String>,
}

impl TransportError {
    pub fn new(status: Option<u16>, payload: ErrorPayload, message: Option<String>) -> Self {
        Self {
            status,
            payload,
            message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    pub fn is_server_error(&self) -> bool {
        self.status == Some(500)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, Some(401) | Some(403))
    }

    pub fn user_message(&self, action: Action) -> String {
        normalize_message(&self.payload, self.status, self.message.as_deref(), action)
    }
}

fn describe(status: &Option<u16>, payload: &ErrorPayload, message: &Option<String>) -> String {
    let head = match status {
        Some(status) => format!("Remote error {}: {}", status, payload),
        None => "Remote unreachable".to_string(),
    };
    match message {
        Some(message) => format!("{} ({})", head, message),
        None => head,
    }
}

/// The user action a remote call belongs to. Selects fallback wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    LoadCourses,
    CreateCourse,
    UpdateCourse,
    DeleteCourse,
    ToggleCourseStatus,
    LoadQuizzes,
    CreateQuiz,
    UpdateQuiz,
    DeleteQuiz,
}

impl Action {
    pub fn success_message(self) -> &'static str {
        match self {
            Action::Login => "Signed in",
            Action::LoadCourses => "Courses loaded",
            Action::CreateCourse => "Course created",
            Action::UpdateCourse => "Course updated",
            Action::DeleteCourse => "Course deleted",
            Action::ToggleCourseStatus => "Course status changed",
            Action::LoadQuizzes => "Quizzes loaded",
            Action::CreateQuiz => "Quiz added",
            Action::UpdateQuiz => "Quiz updated",
            Action::DeleteQuiz => "Quiz deleted",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Action::Login => "Sign-in failed",
            Action::LoadCourses => "Failed to load courses",
            Action::CreateCourse => "Failed to create the course",
            Action::UpdateCourse => "Failed to update the course",
            Action::DeleteCourse => "Failed to delete the course",
            Action::ToggleCourseStatus => "Failed to change the course status",
            Action::LoadQuizzes => "Failed to load quizzes",
            Action::CreateQuiz => "Failed to add the quiz",
            Action::UpdateQuiz => "Failed to update the quiz",
            Action::DeleteQuiz => "Failed to delete the quiz",
        }
    }

    pub fn not_found_message(self) -> &'static str {
        match self {
            Action::Login => "Account not found",
            Action::UpdateQuiz | Action::DeleteQuiz => "Quiz not found",
            _ => "Course not found",
        }
    }

    pub fn server_error_message(self) -> &'static str {
        match self {
            Action::Login => "Server error while signing in",
            Action::LoadCourses => "Server error while loading courses",
            Action::CreateCourse => "Server error while creating the course",
            Action::UpdateCourse => "Server error while updating the course",
            Action::DeleteCourse => "Server error while deleting the course",
            Action::ToggleCourseStatus => "Server error while changing the course status",
            Action::LoadQuizzes => "Server error while loading quizzes",
            Action::CreateQuiz => "Server error while adding the quiz",
            Action::UpdateQuiz => "Server error while updating the quiz",
            Action::DeleteQuiz => "Server error while deleting the quiz",
        }
    }
}

/// Resolves one user-facing message from a failure of unknown shape.
///
/// Order: 404 and 500 prefer the payload message and fall back to fixed
/// texts; any other status takes the payload, then the transport message,
/// then the generic failure text for `action`.
pub fn normalize_message(
    payload: &ErrorPayload,
    status: Option<u16>,
    top_level: Option<&str>,
    action: Action,
) -> String {
    let resolved = match status {
        Some(404) => payload.message().unwrap_or(action.not_found_message()),
        Some(500) => payload.message().unwrap_or(action.server_error_message()),
        _ => payload
            .message()
            .or(top_level.filter(|m| !m.trim().is_empty()))
            .unwrap_or(action.failure_message()),
    };
    resolved.to_string()
}

impl AppError {
    pub fn user_message(&self, action: Action) -> String {
        match self {
            AppError::Transport(err) => err.user_message(action),
            other => other.to_string(),
        }
    }
}
