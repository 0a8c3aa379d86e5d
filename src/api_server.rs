// Axum API Server Module
//
// Purpose: HTTP surface over the lesson resolver, syllabus catalog and grade book.
// All lesson work is synchronous and CPU-bound (no I/O), so handlers call the
// resolver inline.

#[cfg(feature = "api")]
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer};

#[cfg(feature = "api")]
use std::path::PathBuf;

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use crate::config::ServerConfig;

#[cfg(feature = "api")]
use crate::enforcer::LengthEnforcer;

#[cfg(feature = "api")]
use crate::grading::{GradeBook, GradeError};

#[cfg(feature = "api")]
use crate::lesson::ProviderRegistry;

#[cfg(feature = "api")]
use crate::resolver::{ErrorCategory, LessonError, LessonNote, LessonResolver, LessonResult};

#[cfg(feature = "api")]
use crate::syllabus::SyllabusCatalog;

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<LessonResolver>,
    pub grades: Arc<GradeBook>,
    pub grades_csv_path: PathBuf,
    pub static_dir: PathBuf,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let catalog = match &config.syllabus_path {
            Some(path) => {
                tracing::info!("Loading syllabus from {}", path.display());
                SyllabusCatalog::from_path(path)?
            }
            None => {
                tracing::info!("Using built-in syllabus");
                SyllabusCatalog::builtin()?
            }
        };

        Ok(Self::with_catalog(catalog, config))
    }

    /// State over an already-built catalog (used by tests with synthetic catalogs).
    pub fn with_catalog(catalog: SyllabusCatalog, config: &ServerConfig) -> Self {
        let resolver = LessonResolver::new(
            Arc::new(catalog),
            Arc::new(ProviderRegistry::builtin()),
            LengthEnforcer::new(config.min_words),
        )
        .with_placeholder_padding(config.pad_placeholders);

        for subject in resolver.unregistered_subjects() {
            tracing::warn!(
                "Catalog subject '{}' has no content provider; lesson requests for it will fail",
                subject
            );
        }

        Self {
            resolver: Arc::new(resolver),
            grades: Arc::new(GradeBook::default()),
            grades_csv_path: config.grades_csv_path.clone(),
            static_dir: config.static_dir.clone(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Syllabus endpoints
        .route("/api/exams", get(list_exams))
        .route("/api/topics", get(get_topics))

        // Lesson notes (POST body or GET query)
        .route("/api/generate_note", post(generate_note).get(generate_note_query))

        // Grade book
        .route("/api/grades", get(list_grades).post(add_grade))
        .route("/api/grades/save", post(save_grades))
        .route("/api/grades/clear", post(clear_grades))

        // Static frontend (index.html at /)
        .fallback_service(static_files)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive()) // Allow all origins
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn list_exams(State(state): State<AppState>) -> Json<serde_json::Value> {
    let catalog = state.resolver.catalog();
    let exams: Vec<serde_json::Value> = catalog
        .exams()
        .map(|exam| {
            serde_json::json!({
                "exam": exam,
                "subjects": catalog.subjects(exam),
            })
        })
        .collect();

    Json(serde_json::json!({ "exams": exams }))
}

#[cfg(feature = "api")]
async fn get_topics(
    State(state): State<AppState>,
    Query(params): Query<TopicsQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let exam = params.exam.unwrap_or_default();
    let subject = params.subject.unwrap_or_default();

    if exam.is_empty() || subject.is_empty() {
        return Err(AppError::BadRequest(
            "Both exam and subject parameters are required".to_string(),
        ));
    }

    let catalog = state.resolver.catalog();
    if !catalog.has_exam(&exam) {
        return Err(AppError::NotFound(format!("Exam body '{}' not found", exam)));
    }

    let topics = catalog
        .topics_for(&exam, &subject)
        .map_err(|_| AppError::NotFound(format!("Subject '{}' not found for {}", subject, exam)))?;

    Ok(Json(serde_json::json!({
        "exam": exam,
        "subject": subject,
        "topics": topics,
    })))
}

#[cfg(feature = "api")]
async fn generate_note(
    State(state): State<AppState>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<Json<LessonResult>, AppError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected note request body: {}", e);
        AppError::BadRequest("No data received".to_string())
    })?;

    resolve_note(&state, request)
}

#[cfg(feature = "api")]
async fn generate_note_query(
    State(state): State<AppState>,
    Query(request): Query<NoteRequest>,
) -> Result<Json<LessonResult>, AppError> {
    resolve_note(&state, request)
}

#[cfg(feature = "api")]
fn resolve_note(state: &AppState, request: NoteRequest) -> Result<Json<LessonResult>, AppError> {
    let exam = request.exam.unwrap_or_default();
    let subject = request.subject.unwrap_or_default();
    let topic = request.topic.unwrap_or_default();

    let start = std::time::Instant::now();
    let note = state.resolver.resolve(&exam, &subject, &topic)?;

    tracing::debug!(
        "Resolved {} {} '{}' ({} words, curated: {}) in {:?}",
        note.exam,
        note.subject,
        note.topic,
        note.word_count,
        note.curated,
        start.elapsed()
    );

    Ok(Json(LessonResult::Note(note)))
}

#[cfg(feature = "api")]
async fn list_grades(State(state): State<AppState>) -> Json<serde_json::Value> {
    let summary = state.grades.summary();
    Json(serde_json::json!({
        "average": summary.average_label(),
        "grades": summary.grades,
    }))
}

#[cfg(feature = "api")]
async fn add_grade(
    State(state): State<AppState>,
    payload: Result<Json<GradeRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(request) = payload.map_err(|_| AppError::BadRequest("No data received".to_string()))?;
    let summary = state.grades.add(request.name.as_deref().unwrap_or(""), request.score)?;

    Ok(Json(serde_json::json!({
        "message": "Grade added",
        "average": summary.average_label(),
        "grades": summary.grades,
    })))
}

#[cfg(feature = "api")]
async fn save_grades(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let written = state.grades.save_csv(&state.grades_csv_path)?;
    Ok(Json(serde_json::json!({
        "message": format!("Grades saved to {}", state.grades_csv_path.display()),
        "rows": written,
    })))
}

#[cfg(feature = "api")]
async fn clear_grades(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.grades.clear();
    Json(serde_json::json!({ "message": "All grades cleared" }))
}

// ============================================================================
// Request Types
// ============================================================================

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
struct TopicsQuery {
    exam: Option<String>,
    subject: Option<String>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
struct NoteRequest {
    exam: Option<String>,
    subject: Option<String>,
    topic: Option<String>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
struct GradeRequest {
    name: Option<String>,
    score: f64,
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    Lesson(LessonError),
    Grade(GradeError),
    BadRequest(String),
    NotFound(String),
}

#[cfg(feature = "api")]
impl From<LessonError> for AppError {
    fn from(e: LessonError) -> Self {
        AppError::Lesson(e)
    }
}

#[cfg(feature = "api")]
impl From<GradeError> for AppError {
    fn from(e: GradeError) -> Self {
        AppError::Grade(e)
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Lesson(e) => {
                let status = match e.category() {
                    ErrorCategory::UnknownTopic => StatusCode::NOT_FOUND,
                    ErrorCategory::InternalDispatchFault => StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCategory::MissingParameter
                    | ErrorCategory::UnknownExam
                    | ErrorCategory::UnknownSubject => StatusCode::BAD_REQUEST,
                };
                let body = LessonResult::from(Err::<LessonNote, _>(e));
                (status, Json(body)).into_response()
            }
            AppError::Grade(e) => {
                let status = match &e {
                    GradeError::Csv(_) | GradeError::Io(_) => {
                        tracing::error!("Grade export failed: {}", e);
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, Json(serde_json::json!({ "error": e.to_string() }))).into_response()
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": msg }))).into_response()
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": msg }))).into_response()
            }
        }
    }
}
