use std::env;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{AppError, ErrorPayload, TransportError};
use crate::models::{
    Course, CourseDto, CourseFilter, CourseId, LoginRequest, Quiz, QuizId,
};
use crate::session::{Session, SessionContext};

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct RemoteConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn new_from_env() -> Result<Self, AppError> {
        let base_url = env::var("ADMIN_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = match env::var("ADMIN_API_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!("ADMIN_API_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            timeout: Duration::from_secs(timeout_secs),
            ..Self::new(base_url)
        })
    }
}

/// The remote CRUD store behind the admin console.
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>, AppError>;
    async fn get_course(&self, id: CourseId) -> Result<Course, AppError>;
    async fn create_course(&self, course: &CourseDto) -> Result<Course, AppError>;
    async fn update_course(&self, id: CourseId, course: &CourseDto) -> Result<Course, AppError>;
    async fn delete_course(&self, id: CourseId) -> Result<(), AppError>;
    async fn toggle_course_status(&self, id: CourseId) -> Result<Course, AppError>;
    async fn add_quiz(&self, course_id: CourseId, quiz: &Quiz) -> Result<Quiz, AppError>;
    async fn update_quiz(
        &self,
        course_id: CourseId,
        quiz_id: QuizId,
        quiz: &Quiz,
    ) -> Result<Quiz, AppError>;
    async fn delete_quiz(&self, course_id: CourseId, quiz_id: QuizId) -> Result<(), AppError>;
}

pub struct HttpCourseStore {
    client: Client,
    config: RemoteConfig,
    session: Arc<SessionContext>,
}

impl HttpCourseStore {
    pub fn new(config: RemoteConfig, session: Arc<SessionContext>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self {
            client,
            config,
            session,
        })
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, AppError> {
        let url = self.url("auth/login");
        let request = self.client.post(&url).json(credentials);
        let body = self.execute(request, "POST", &url).await?;
        let login = parse_body(&body, &url)?;
        Ok(self.session.begin(login).await)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    /// Attaches the session token. Without a session nothing is sent.
    async fn send(&self, request: RequestBuilder, method: &str, url: &str) -> Result<String, AppError> {
        let token = self.session.token().await.ok_or_else(|| {
            warn!(method, url, "no session, request not sent");
            AppError::Unauthenticated
        })?;
        self.execute(request.bearer_auth(token), method, url).await
    }

    async fn execute(&self, request: RequestBuilder, method: &str, url: &str) -> Result<String, AppError> {
        let request_id = Uuid::new_v4();
        let request = request.header("X-Request-Id", request_id.to_string());

        debug!(%request_id, method, url, "sending request");
        let response = request.send().await.map_err(|e| {
            warn!(%request_id, method, url, "request failed: {}", e);
            TransportError::new(e.status().map(|s| s.as_u16()), ErrorPayload::Empty, Some(e.to_string()))
        })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("");
            let error = TransportError::new(
                Some(status.as_u16()),
                ErrorPayload::from_body(&body),
                Some(format!("Http failure response for {}: {} {}", url, status.as_u16(), reason)),
            );
            warn!(%request_id, method, url, status = status.as_u16(), "remote error: {}", error.payload);
            if error.is_unauthorized() {
                self.session.end().await;
            }
            return Err(error.into());
        }

        debug!(%request_id, status = status.as_u16(), "request succeeded");
        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<T, AppError> {
        let body = self.send(request, method, url).await?;
        parse_body(&body, url)
    }
}

fn parse_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(body).map_err(|e| {
        tracing::error!(url, "Failed to parse: {}", e);
        TransportError::new(
            None,
            ErrorPayload::Empty,
            Some(format!("Failed to parse response from {}: {}", url, e)),
        )
        .into()
    })
}

#[async_trait]
impl CourseStore for HttpCourseStore {
    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>, AppError> {
        let raw = self.url("admin/courses");
        let mut url = Url::parse(&raw)
            .map_err(|e| AppError::Config(format!("Invalid API url {}: {}", raw, e)))?;
        let pairs = filter.query_pairs();
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in &pairs {
                query.append_pair(key, value);
            }
        }

        let request = self.client.get(url.clone());
        self.send_json(request, "GET", url.as_str()).await
    }

    async fn get_course(&self, id: CourseId) -> Result<Course, AppError> {
        let url = self.url(&format!("admin/courses/{}", id));
        let mut course: Course = self.send_json(self.client.get(&url), "GET", &url).await?;
        if let Some(quizzes) = course.quizzes.as_mut() {
            for quiz in quizzes.iter_mut() {
                quiz.course_id = Some(course.id);
            }
        }
        Ok(course)
    }

    async fn create_course(&self, course: &CourseDto) -> Result<Course, AppError> {
        let url = self.url("admin/courses");
        self.send_json(self.client.post(&url).json(course), "POST", &url).await
    }

    async fn update_course(&self, id: CourseId, course: &CourseDto) -> Result<Course, AppError> {
        let url = self.url(&format!("admin/courses/{}", id));
        self.send_json(self.client.put(&url).json(course), "PUT", &url).await
    }

    async fn delete_course(&self, id: CourseId) -> Result<(), AppError> {
        let url = self.url(&format!("admin/courses/{}", id));
        self.send(self.client.delete(&url), "DELETE", &url).await?;
        Ok(())
    }

    async fn toggle_course_status(&self, id: CourseId) -> Result<Course, AppError> {
        let url = self.url(&format!("admin/courses/{}/toggle-status", id));
        let request = self.client.put(&url).json(&serde_json::json!({}));
        self.send_json(request, "PUT", &url).await
    }

    async fn add_quiz(&self, course_id: CourseId, quiz: &Quiz) -> Result<Quiz, AppError> {
        let url = self.url(&format!("admin/courses/{}/quizzes", course_id));
        let mut created: Quiz = self.send_json(self.client.post(&url).json(quiz), "POST", &url).await?;
        created.course_id = Some(course_id);
        Ok(created)
    }

    async fn update_quiz(
        &self,
        course_id: CourseId,
        quiz_id: QuizId,
        quiz: &Quiz,
    ) -> Result<Quiz, AppError> {
        let url = self.url(&format!("admin/courses/{}/quizzes/{}", course_id, quiz_id));
        let mut updated: Quiz = self.send_json(self.client.put(&url).json(quiz), "PUT", &url).await?;
        updated.course_id = Some(course_id);
        Ok(updated)
    }

    async fn delete_quiz(&self, course_id: CourseId, quiz_id: QuizId) -> Result<(), AppError> {
        let url = self.url(&format!("admin/courses/{}/quizzes/{}", course_id, quiz_id));
        self.send(self.client.delete(&url), "DELETE", &url).await?;
        Ok(())
    }
}
