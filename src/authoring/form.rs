use tracing::debug;

use crate::authoring::options::AnswerOptions;
use crate::authoring::validation::{guard_options, require_text};
use crate::error::AppError;
use crate::models::{CourseId, Quiz, QuizId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    New,
    Editing(QuizId),
}

/// Authoring state for one quiz dialog. Reusable for as many quizzes as the
/// session needs; there is no terminal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizForm {
    mode: FormMode,
    question: String,
    explanation: String,
    options: AnswerOptions,
}

impl QuizForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn editing_quiz_id(&self) -> Option<QuizId> {
        match self.mode {
            FormMode::New => None,
            FormMode::Editing(id) => Some(id),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn set_explanation(&mut self, explanation: impl Into<String>) {
        self.explanation = explanation.into();
    }

    pub fn options(&self) -> &AnswerOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut AnswerOptions {
        &mut self.options
    }

    /// Loads a stored quiz. A quiz without an id is loaded as a new draft.
    pub fn start_edit(&mut self, quiz: &Quiz) {
        self.mode = match quiz.id {
            Some(id) => FormMode::Editing(id),
            None => FormMode::New,
        };
        self.question = quiz.question.clone();
        self.explanation = quiz.explanation.clone().unwrap_or_default();
        self.options = AnswerOptions::from_parts(quiz.options.clone(), quiz.correct_answer_index);
        debug!(mode = ?self.mode, options = self.options.len(), "quiz loaded into form");
    }

    pub fn cancel_edit(&mut self) {
        self.mode = FormMode::New;
        self.question.clear();
        self.explanation.clear();
        self.options.reset();
    }

    /// Field presence first, then the option rules. On success the returned
    /// quiz is the exact body to send.
    pub fn submission(&self, course_id: CourseId) -> Result<Quiz, AppError> {
        require_text(&self.question, "question")?;
        let (options, correct_answer_index) = guard_options(&self.options)?;

        let explanation = Some(self.explanation.trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string);

        Ok(Quiz {
            id: self.editing_quiz_id(),
            question: self.question.clone(),
            options,
            correct_answer_index,
            explanation,
            course_id: Some(course_id),
        })
    }
}
