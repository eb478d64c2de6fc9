use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use crate::authoring::QuizForm;
use crate::error::{Action, AppError};
use crate::models::{Course, CourseId, Quiz, QuizId};
use crate::remote::CourseStore;
use crate::services::{Confirm, ConfirmPrompt, Outcome, cancellable};

/// Quiz list and authoring form for one open course.
///
/// The cached quiz list only changes through a full reload after a
/// successful mutation. A failed call leaves both the list and the form as
/// they were.
pub struct QuizManager {
    store: Arc<dyn CourseStore>,
    course_id: CourseId,
    course_title: String,
    quizzes: Vec<Quiz>,
    form: QuizForm,
    loading: bool,
    cancel: CancellationToken,
}

impl QuizManager {
    pub fn new(store: Arc<dyn CourseStore>, course: &Course) -> Self {
        Self::with_token(store, course, CancellationToken::new())
    }

    /// Binds every request of this view to `cancel`; cancelling it has the
    /// same effect as `close`.
    pub fn with_token(store: Arc<dyn CourseStore>, course: &Course, cancel: CancellationToken) -> Self {
        Self {
            store,
            course_id: course.id,
            course_title: course.title.clone(),
            quizzes: course.quizzes.clone().unwrap_or_default(),
            form: QuizForm::new(),
            loading: false,
            cancel,
        }
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn course_title(&self) -> &str {
        &self.course_title
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn form(&self) -> &QuizForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut QuizForm {
        &mut self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancels whatever is in flight. Results that arrive later are dropped.
    pub fn close(&self) {
        info!(course_id = self.course_id, "quiz view closed");
        self.cancel.cancel();
    }

    #[instrument(skip(self), fields(course_id = self.course_id))]
    pub async fn load_quizzes(&mut self) -> Outcome {
        match self.reload().await {
            Ok(()) => Outcome::Done(Action::LoadQuizzes.success_message().to_string()),
            Err(err) => self.fail(err, Action::LoadQuizzes),
        }
    }

    /// Validates the form and creates or updates the quiz it holds. On
    /// success the form goes back to a blank draft and the list is reloaded.
    #[instrument(skip(self), fields(course_id = self.course_id, editing = ?self.form.editing_quiz_id()))]
    pub async fn save_quiz(&mut self) -> Outcome {
        if self.is_closed() {
            return Outcome::Cancelled;
        }

        let editing = self.form.editing_quiz_id();
        let action = match editing {
            Some(_) => Action::UpdateQuiz,
            None => Action::CreateQuiz,
        };

        let quiz = match self.form.submission(self.course_id) {
            Ok(quiz) => quiz,
            Err(err) => {
                warn!("quiz rejected: {}", err);
                return Outcome::from_error(&err, action);
            }
        };

        self.loading = true;
        let result = match editing {
            Some(quiz_id) => {
                cancellable(&self.cancel, self.store.update_quiz(self.course_id, quiz_id, &quiz)).await
            }
            None => cancellable(&self.cancel, self.store.add_quiz(self.course_id, &quiz)).await,
        };

        match result {
            Ok(saved) => {
                info!(quiz_id = ?saved.id, options = saved.options.len(), "quiz saved");
                self.form.cancel_edit();
                self.after_mutation(action).await
            }
            Err(err) => self.fail(err, action),
        }
    }

    #[instrument(skip(self, confirm), fields(course_id = self.course_id))]
    pub async fn delete_quiz(&mut self, quiz_id: QuizId, confirm: &dyn Confirm) -> Outcome {
        if self.is_closed() {
            return Outcome::Cancelled;
        }

        let prompt = ConfirmPrompt {
            title: "Delete quiz".to_string(),
            message: "Are you sure you want to delete this quiz?".to_string(),
        };
        if !confirm.confirm(&prompt) {
            return Outcome::Declined;
        }

        self.loading = true;
        let result = cancellable(&self.cancel, self.store.delete_quiz(self.course_id, quiz_id)).await;
        match result {
            Ok(()) => {
                info!(quiz_id, "quiz deleted");
                self.after_mutation(Action::DeleteQuiz).await
            }
            Err(err) => self.fail(err, Action::DeleteQuiz),
        }
    }

    async fn after_mutation(&mut self, action: Action) -> Outcome {
        match self.reload().await {
            Ok(()) => Outcome::Done(action.success_message().to_string()),
            Err(err) => self.fail(err, Action::LoadQuizzes),
        }
    }

    async fn reload(&mut self) -> Result<(), AppError> {
        self.loading = true;
        let course = cancellable(&self.cancel, self.store.get_course(self.course_id)).await?;
        self.quizzes = course
            .quizzes
            .unwrap_or_default()
            .into_iter()
            .map(|quiz| Quiz {
                course_id: Some(self.course_id),
                ..quiz
            })
            .collect();
        self.loading = false;
        Ok(())
    }

    fn fail(&mut self, err: AppError, action: Action) -> Outcome {
        self.loading = false;
        match &err {
            AppError::Cancelled => info!("{:?} dropped, view closed", action),
            _ => warn!("{:?} failed: {}", action, err),
        }
        Outcome::from_error(&err, action)
    }
}
