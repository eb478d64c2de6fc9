pub mod course;
pub mod quiz;
pub mod session;

use serde::{Deserialize, Deserializer};

pub use course::{Category, Course, CourseDto, CourseFilter, CourseId, Difficulty, Language};
pub use quiz::{Quiz, QuizId};
pub use session::{LoginRequest, LoginResponse};

/// Reads `null` the same as an absent field. The backend writes unset
/// columns as explicit nulls.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
