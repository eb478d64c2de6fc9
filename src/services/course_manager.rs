use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use crate::authoring::CourseForm;
use crate::error::{Action, AppError};
use crate::models::{Course, CourseFilter, CourseId};
use crate::remote::CourseStore;
use crate::services::{Confirm, ConfirmPrompt, Outcome, QuizManager, cancellable};

/// Filtered course list with create/update/delete/toggle orchestration.
pub struct CourseManager {
    store: Arc<dyn CourseStore>,
    filter: CourseFilter,
    courses: Vec<Course>,
    loading: bool,
    cancel: CancellationToken,
}

impl CourseManager {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self {
            store,
            filter: CourseFilter::default(),
            courses: Vec::new(),
            loading: false,
            cancel: CancellationToken::new(),
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn filter(&self) -> &CourseFilter {
        &self.filter
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn close(&self) {
        self.cancel.cancel();
    }

    #[instrument(skip(self), fields(filter = ?self.filter))]
    pub async fn load_courses(&mut self) -> Outcome {
        match self.reload().await {
            Ok(()) => Outcome::Done(Action::LoadCourses.success_message().to_string()),
            Err(err) => self.fail(err, Action::LoadCourses),
        }
    }

    pub async fn set_filter(&mut self, filter: CourseFilter) -> Outcome {
        self.filter = filter;
        self.load_courses().await
    }

    /// Creates or updates depending on the form's mode, then reloads.
    #[instrument(skip(self, form), fields(editing = ?form.editing_course_id()))]
    pub async fn submit_form(&mut self, form: &CourseForm) -> Outcome {
        if self.is_closed() {
            return Outcome::Cancelled;
        }
        let action = match form.editing_course_id() {
            Some(_) => Action::UpdateCourse,
            None => Action::CreateCourse,
        };

        let dto = match form.to_dto() {
            Ok(dto) => dto,
            Err(err) => {
                warn!("course form rejected: {}", err);
                return Outcome::from_error(&AppError::Field(err), action);
            }
        };

        self.loading = true;
        let result = match form.editing_course_id() {
            Some(id) => cancellable(&self.cancel, self.store.update_course(id, &dto)).await,
            None => cancellable(&self.cancel, self.store.create_course(&dto)).await,
        };

        match result {
            Ok(course) => {
                info!(course_id = course.id, title = %course.title, "course saved");
                self.after_mutation(action).await
            }
            Err(err) => self.fail(err, action),
        }
    }

    #[instrument(skip(self))]
    pub async fn toggle_status(&mut self, id: CourseId) -> Outcome {
        if self.is_closed() {
            return Outcome::Cancelled;
        }
        self.loading = true;
        let result = cancellable(&self.cancel, self.store.toggle_course_status(id)).await;
        match result {
            Ok(course) => {
                info!(course_id = course.id, active = course.is_active, "course status toggled");
                self.after_mutation(Action::ToggleCourseStatus).await
            }
            Err(err) => self.fail(err, Action::ToggleCourseStatus),
        }
    }

    #[instrument(skip(self, course, confirm), fields(course_id = course.id))]
    pub async fn delete_course(&mut self, course: &Course, confirm: &dyn Confirm) -> Outcome {
        if self.is_closed() {
            return Outcome::Cancelled;
        }
        let prompt = ConfirmPrompt {
            title: "Delete course".to_string(),
            message: format!(
                "Are you sure you want to delete the course \"{}\"?\nThis cannot be undone.",
                course.title
            ),
        };
        if !confirm.confirm(&prompt) {
            return Outcome::Declined;
        }

        self.loading = true;
        let result = cancellable(&self.cancel, self.store.delete_course(course.id)).await;
        match result {
            Ok(()) => {
                info!("course deleted");
                self.after_mutation(Action::DeleteCourse).await
            }
            Err(err) => self.fail(err, Action::DeleteCourse),
        }
    }

    /// Opens the quiz view for `course`. Its requests are cancelled when
    /// this manager closes.
    pub fn open_quizzes(&self, course: &Course) -> QuizManager {
        QuizManager::with_token(self.store.clone(), course, self.cancel.child_token())
    }

    /// Closes the quiz view and refreshes the course list.
    pub async fn close_quizzes(&mut self, quizzes: QuizManager) -> Outcome {
        quizzes.close();
        self.load_courses().await
    }

    async fn after_mutation(&mut self, action: Action) -> Outcome {
        match self.reload().await {
            Ok(()) => Outcome::Done(action.success_message().to_string()),
            Err(err) => self.fail(err, Action::LoadCourses),
        }
    }

    async fn reload(&mut self) -> Result<(), AppError> {
        self.loading = true;
        let courses = cancellable(&self.cancel, self.store.list_courses(&self.filter)).await?;
        info!(count = courses.len(), "courses loaded");
        self.courses = courses;
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
