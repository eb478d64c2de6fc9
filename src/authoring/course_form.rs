use crate::authoring::validation::{require, require_text};
use crate::error::FieldError;
use crate::models::{Category, Course, CourseDto, CourseId, Difficulty, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFormMode {
    #[default]
    New,
    Editing(CourseId),
}

/// Course create/edit dialog state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseForm {
    mode: CourseFormMode,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub duration_minutes: u32,
    pub language: Option<Language>,
    pub is_active: bool,
}

impl Default for CourseForm {
    fn default() -> Self {
        Self {
            mode: CourseFormMode::New,
            title: String::new(),
            description: String::new(),
            content: String::new(),
            category: None,
            difficulty: None,
            duration_minutes: 0,
            language: None,
            is_active: true,
        }
    }
}

impl CourseForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(course: &Course) -> Self {
        Self {
            mode: CourseFormMode::Editing(course.id),
            title: course.title.clone(),
            description: course.description.clone(),
            content: course.content.clone(),
            category: Some(course.category),
            difficulty: Some(course.difficulty),
            duration_minutes: course.duration_minutes,
            language: Some(course.language),
            is_active: course.is_active,
        }
    }

    pub fn mode(&self) -> CourseFormMode {
        self.mode
    }

    pub fn editing_course_id(&self) -> Option<CourseId> {
        match self.mode {
            CourseFormMode::New => None,
            CourseFormMode::Editing(id) => Some(id),
        }
    }

    pub fn to_dto(&self) -> Result<CourseDto, FieldError> {
        require_text(&self.title, "title")?;
        require_text(&self.description, "description")?;
        require_text(&self.content, "content")?;
        let category = require(self.category, "category")?;
        let difficulty = require(self.difficulty, "difficulty")?;
        let language = require(self.language, "language")?;
        if self.duration_minutes == 0 {
            return Err(FieldError::NonPositiveDuration);
        }

        Ok(CourseDto {
            title: self.title.clone(),
            description: self.description.clone(),
            content: self.content.clone(),
            category,
            difficulty,
            duration_minutes: self.duration_minutes,
            language,
            is_active: self.is_active,
        })
    }
}
