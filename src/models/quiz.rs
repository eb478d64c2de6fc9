use serde::{Deserialize, Serialize};

use crate::models::course::CourseId;
use crate::models::null_as_default;

pub type QuizId = i64;

/// A quiz as exchanged with the remote store.
///
/// `id` is absent for a draft that was never saved. The list endpoint omits
/// `courseId`, so the store stamps it when a course is fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuizId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub correct_answer_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
}
