use std::sync::Arc;

use crate::error::AppError;
use crate::remote::{CourseStore, HttpCourseStore, RemoteConfig};
use crate::session::SessionContext;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionContext>,
    pub http: Arc<HttpCourseStore>,
}

impl AppState {
    pub fn new(config: RemoteConfig) -> Result<Self, AppError> {
        let session = Arc::new(SessionContext::new());
        let http = Arc::new(HttpCourseStore::new(config, session.clone())?);
        Ok(Self { session, http })
    }

    pub fn store(&self) -> Arc<dyn CourseStore> {
        self.http.clone()
    }
}
