pub mod course_form;
pub mod form;
pub mod options;
pub mod validation;

pub use course_form::{CourseForm, CourseFormMode};
pub use form::{FormMode, QuizForm};
pub use options::AnswerOptions;
