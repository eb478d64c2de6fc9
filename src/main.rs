use std::env;

use admin_console::error::AppError;
use admin_console::models::{Category, CourseFilter, Language, LoginRequest};
use admin_console::remote::RemoteConfig;
use admin_console::services::{CourseManager, Outcome};
use admin_console::state::AppState;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "admin_console=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RemoteConfig::new_from_env()?;
    info!("using remote store at {}", config.base_url);
    let state = AppState::new(config)?;

    let credentials = LoginRequest {
        username: required_env("ADMIN_USERNAME")?,
        password: required_env("ADMIN_PASSWORD")?,
    };
    let session = state.http.login(&credentials).await?;
    info!("signed in as {}", session.username);

    let mut courses = CourseManager::new(state.store());
    let outcome = courses.set_filter(filter_from_env()?).await;
    report(&outcome);

    for course in courses.courses() {
        info!(
            "#{} {} [{} / {} / {}] {} min, {}",
            course.id,
            course.title,
            course.category,
            course.difficulty,
            course.language,
            course.duration_minutes,
            if course.is_active { "active" } else { "inactive" }
        );
    }

    if let Some(course_id) = optional_env("COURSE_ID").and_then(|raw| raw.parse::<i64>().ok()) {
        match courses.courses().iter().find(|c| c.id == course_id).cloned() {
            Some(course) => {
                let mut quizzes = courses.open_quizzes(&course);
                report(&quizzes.load_quizzes().await);
                info!("quizzes of {}", quizzes.course_title());
                for quiz in quizzes.quizzes() {
                    info!(
                        "  quiz {:?}: {} ({} options, answer #{})",
                        quiz.id,
                        quiz.question,
                        quiz.options.len(),
                        quiz.correct_answer_index
                    );
                }
                report(&courses.close_quizzes(quizzes).await);
            }
            None => warn!("course {} is not in the current list", course_id),
        }
    }

    state.session.end().await;
    Ok(())
}

fn report(outcome: &Outcome) {
    match outcome.message() {
        Some(msg) if outcome.is_done() => info!("{}", msg),
        Some(msg) => error!("{}", msg),
        None => info!("{:?}", outcome),
    }
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn required_env(key: &str) -> Result<String, AppError> {
    optional_env(key).ok_or_else(|| AppError::Config(format!("{} is not set", key)))
}

fn filter_from_env() -> Result<CourseFilter, AppError> {
    let category = optional_env("COURSE_CATEGORY")
        .map(|raw| raw.parse::<Category>())
        .transpose()
        .map_err(AppError::Config)?;
    let language = optional_env("COURSE_LANGUAGE")
        .map(|raw| raw.parse::<Language>())
        .transpose()
        .map_err(AppError::Config)?;
    let is_active = optional_env("COURSE_ACTIVE")
        .map(|raw| {
            raw.parse::<bool>()
                .map_err(|_| AppError::Config(format!("COURSE_ACTIVE must be true or false: {}", raw)))
        })
        .transpose()?;

    Ok(CourseFilter {
        category,
        language,
        is_active,
    })
}
