use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::null_as_default;
use crate::models::quiz::Quiz;

pub type CourseId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Budgeting,
    Savings,
    Credit,
    Insurance,
    Inclusion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    Fr,
    Ar,
    Amz,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Budgeting,
        Category::Savings,
        Category::Credit,
        Category::Insurance,
        Category::Inclusion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Budgeting => "BUDGETING",
            Category::Savings => "SAVINGS",
            Category::Credit => "CREDIT",
            Category::Insurance => "INSURANCE",
            Category::Inclusion => "INCLUSION",
        }
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "BEGINNER",
            Difficulty::Intermediate => "INTERMEDIATE",
            Difficulty::Advanced => "ADVANCED",
        }
    }
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Fr, Language::Ar, Language::Amz];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Fr => "FR",
            Language::Ar => "AR",
            Language::Amz => "AMZ",
        }
    }
}

macro_rules! display_and_parse {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $ty::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| format!("unknown {}: {}", $what, s))
            }
        }
    };
}

display_and_parse!(Category, "category");
display_and_parse!(Difficulty, "difficulty");
display_and_parse!(Language, "language");

/// A course as held by the remote store.
///
/// `quizzes` is only filled by the single-course endpoint and is a per-view
/// cache, never the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    pub category: Category,
    pub difficulty: Difficulty,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_minutes: u32,
    pub language: Language,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default)]
    pub quizzes: Option<Vec<Quiz>>,
}

/// Body sent on course create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub language: Language,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub category: Option<Category>,
    pub language: Option<Language>,
    pub is_active: Option<bool>,
}

impl CourseFilter {
    /// Query pairs in the order the list endpoint documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(language) = self.language {
            pairs.push(("language", language.to_string()));
        }
        if let Some(is_active) = self.is_active {
            pairs.push(("isActive", is_active.to_string()));
        }
        pairs
    }
}
