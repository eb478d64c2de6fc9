#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use admin_console::error::{AppError, ErrorPayload, TransportError};
use admin_console::models::{
    Category, Course, CourseDto, CourseFilter, CourseId, Difficulty, Language, Quiz, QuizId,
};
use admin_console::remote::CourseStore;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListCourses(CourseFilter),
    GetCourse(CourseId),
    CreateCourse(CourseDto),
    UpdateCourse(CourseId, CourseDto),
    DeleteCourse(CourseId),
    ToggleCourseStatus(CourseId),
    AddQuiz(CourseId, Quiz),
    UpdateQuiz(CourseId, QuizId, Quiz),
    DeleteQuiz(CourseId, QuizId),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Call::ListCourses(_) | Call::GetCourse(_))
    }
}

/// In-memory store that records every call it receives.
#[derive(Default)]
pub struct RecordingStore {
    courses: Mutex<Vec<Course>>,
    calls: Mutex<Vec<Call>>,
    next_id: Mutex<i64>,
    fail_next_mutation: Mutex<Option<TransportError>>,
    hang_mutations: AtomicBool,
}

impl RecordingStore {
    pub fn with_courses(courses: Vec<Course>) -> Self {
        let store = Self::default();
        *store.next_id.lock().unwrap() = 1000;
        *store.courses.lock().unwrap() = courses;
        store
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn fail_next_mutation(&self, err: TransportError) {
        *self.fail_next_mutation.lock().unwrap() = Some(err);
    }

    pub fn hang_mutations(&self) {
        self.hang_mutations.store(true, Ordering::SeqCst);
    }

    pub fn course(&self, id: CourseId) -> Option<Course> {
        self.courses.lock().unwrap().iter().find(|c| c.id == id).cloned()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn before_mutation(&self, call: Call) -> Result<(), AppError> {
        self.record(call);
        if self.hang_mutations.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        let failure = self.fail_next_mutation.lock().unwrap().take();
        match failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> i64 {
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        *id
    }

    fn not_found(id: CourseId) -> AppError {
        TransportError::new(
            Some(404),
            ErrorPayload::Structured {
                message: format!("Course not found with id: {}", id),
            },
            Some("Http failure response: 404 Not Found".to_string()),
        )
        .into()
    }

    fn with_course<T>(
        &self,
        id: CourseId,
        f: impl FnOnce(&mut Course) -> T,
    ) -> Result<T, AppError> {
        let mut courses = self.courses.lock().unwrap();
        let course = courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(f(course))
    }
}

#[async_trait]
impl CourseStore for RecordingStore {
    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>, AppError> {
        self.record(Call::ListCourses(filter.clone()));
        let courses = self.courses.lock().unwrap();
        Ok(courses
            .iter()
            .filter(|c| filter.category.is_none_or(|v| c.category == v))
            .filter(|c| filter.language.is_none_or(|v| c.language == v))
            .filter(|c| filter.is_active.is_none_or(|v| c.is_active == v))
            .cloned()
            .collect())
    }

    async fn get_course(&self, id: CourseId) -> Result<Course, AppError> {
        self.record(Call::GetCourse(id));
        self.with_course(id, |c| c.clone())
    }

    async fn create_course(&self, dto: &CourseDto) -> Result<Course, AppError> {
        self.before_mutation(Call::CreateCourse(dto.clone())).await?;
        let course = Course {
            id: self.next_id(),
            title: dto.title.clone(),
            description: dto.description.clone(),
            content: dto.content.clone(),
            category: dto.category,
            difficulty: dto.difficulty,
            duration_minutes: dto.duration_minutes,
            language: dto.language,
            created_at: None,
            is_active: dto.is_active,
            quizzes: Some(Vec::new()),
        };
        self.courses.lock().unwrap().push(course.clone());
        Ok(course)
    }

    async fn update_course(&self, id: CourseId, dto: &CourseDto) -> Result<Course, AppError> {
        self.before_mutation(Call::UpdateCourse(id, dto.clone())).await?;
        self.with_course(id, |c| {
            c.title = dto.title.clone();
            c.description = dto.description.clone();
            c.content = dto.content.clone();
            c.category = dto.category;
            c.difficulty = dto.difficulty;
            c.duration_minutes = dto.duration_minutes;
            c.language = dto.language;
            c.is_active = dto.is_active;
            c.clone()
        })
    }

    async fn delete_course(&self, id: CourseId) -> Result<(), AppError> {
        self.before_mutation(Call::DeleteCourse(id)).await?;
        let mut courses = self.courses.lock().unwrap();
        let before = courses.len();
        courses.retain(|c| c.id != id);
        if courses.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }

    async fn toggle_course_status(&self, id: CourseId) -> Result<Course, AppError> {
        self.before_mutation(Call::ToggleCourseStatus(id)).await?;
        self.with_course(id, |c| {
            c.is_active = !c.is_active;
            c.clone()
        })
    }

    async fn add_quiz(&self, course_id: CourseId, quiz: &Quiz) -> Result<Quiz, AppError> {
        self.before_mutation(Call::AddQuiz(course_id, quiz.clone())).await?;
        let id = self.next_id();
        self.with_course(course_id, |c| {
            let saved = Quiz {
                id: Some(id),
                course_id: Some(course_id),
                ..quiz.clone()
            };
            c.quizzes.get_or_insert_with(Vec::new).push(saved.clone());
            saved
        })
    }

    async fn update_quiz(
        &self,
        course_id: CourseId,
        quiz_id: QuizId,
        quiz: &Quiz,
    ) -> Result<Quiz, AppError> {
        self.before_mutation(Call::UpdateQuiz(course_id, quiz_id, quiz.clone()))
            .await?;
        self.with_course(course_id, |c| {
            let saved = Quiz {
                id: Some(quiz_id),
                course_id: Some(course_id),
                ..quiz.clone()
            };
            if let Some(slot) = c
                .quizzes
                .get_or_insert_with(Vec::new)
                .iter_mut()
                .find(|q| q.id == Some(quiz_id))
            {
                *slot = saved.clone();
            }
            saved
        })
    }

    async fn delete_quiz(&self, course_id: CourseId, quiz_id: QuizId) -> Result<(), AppError> {
        self.before_mutation(Call::DeleteQuiz(course_id, quiz_id)).await?;
        self.with_course(course_id, |c| {
            if let Some(quizzes) = c.quizzes.as_mut() {
                quizzes.retain(|q| q.id != Some(quiz_id));
            }
        })
    }
}

pub fn course(id: CourseId, title: &str) -> Course {
    Course {
        id,
        title: title.to_string(),
        description: format!("About {}", title),
        content: "Lesson body".to_string(),
        category: Category::Budgeting,
        difficulty: Difficulty::Beginner,
        duration_minutes: 15,
        language: Language::Fr,
        created_at: None,
        is_active: true,
        quizzes: Some(Vec::new()),
    }
}

pub fn quiz(id: QuizId, question: &str, options: &[&str], correct: usize) -> Quiz {
    Quiz {
        id: Some(id),
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer_index: correct,
        explanation: None,
        course_id: None,
    }
}

pub fn fill_options(form: &mut admin_console::authoring::QuizForm, values: &[&str]) {
    let options = form.options_mut();
    while options.len() < values.len() {
        options.add_option();
    }
    while options.len() > values.len() && options.remove_option(options.len() - 1) {}
    for (i, value) in values.iter().enumerate() {
        options.set_option(i, *value);
    }
}
