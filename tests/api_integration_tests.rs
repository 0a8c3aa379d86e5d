// API Integration Tests
//
// Purpose: Exercise every endpoint through the router with tower's oneshot
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use lesson_generator_rust::{create_router, AppState, ServerConfig, SyllabusCatalog, MIN_WORDS};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app with the built-in catalog
    fn create_test_app() -> axum::Router {
        let config = ServerConfig::default();
        let state = AppState::new(&config).expect("built-in state should initialize");
        create_router(state)
    }

    fn create_test_app_with(config: ServerConfig) -> axum::Router {
        let state = AppState::new(&config).expect("state should initialize");
        create_router(state)
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = create_test_app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Syllabus
    // =========================================================================

    #[tokio::test]
    async fn test_list_exams() {
        let response = create_test_app().oneshot(get("/api/exams")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let exams = body["exams"].as_array().unwrap();
        assert_eq!(exams.len(), 3);
        assert_eq!(exams[0]["exam"], "JAMB");
        assert_eq!(exams[0]["subjects"][0], "Mathematics");
    }

    #[tokio::test]
    async fn test_topics() {
        let response = create_test_app()
            .oneshot(get("/api/topics?exam=WAEC&subject=Mathematics"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["exam"], "WAEC");
        assert_eq!(body["topics"][0], "Algebra");
        assert_eq!(body["topics"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_topics_missing_parameter() {
        let response = create_test_app()
            .oneshot(get("/api/topics?exam=WAEC"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("required"));
    }

    #[tokio::test]
    async fn test_topics_unknown_exam_and_subject() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(get("/api/topics?exam=XYZ&subject=Mathematics"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_response(response).await;
        assert_eq!(body["error"], "Exam body 'XYZ' not found");

        let response = app
            .oneshot(get("/api/topics?exam=NECO&subject=Music"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_response(response).await;
        assert_eq!(body["error"], "Subject 'Music' not found for NECO");
    }

    // =========================================================================
    // Section 3: Lesson notes
    // =========================================================================

    #[tokio::test]
    async fn test_generate_note_post() {
        let response = create_test_app()
            .oneshot(post_json(
                "/api/generate_note",
                serde_json::json!({"exam": "JAMB", "subject": "Mathematics", "topic": "Number bases"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["exam"], "JAMB");
        assert_eq!(body["subject"], "Mathematics");
        assert_eq!(body["topic"], "Number bases");
        assert_eq!(body["curated"], true);
        let note = body["note"].as_str().unwrap();
        assert!(note.contains("Number Bases"));
        assert!(note.split_whitespace().count() >= MIN_WORDS);
        assert!(body["word_count"].as_u64().unwrap() >= MIN_WORDS as u64);
    }

    #[tokio::test]
    async fn test_generate_note_query() {
        let response = create_test_app()
            .oneshot(get("/api/generate_note?exam=WAEC&subject=Mathematics&topic=Algebra"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert!(body["note"].as_str().unwrap().contains("(WAEC)"));
    }

    #[tokio::test]
    async fn test_generate_note_error_statuses() {
        let app = create_test_app();
        let cases = [
            (serde_json::json!({"exam": "JAMB", "subject": "Mathematics"}), StatusCode::BAD_REQUEST, "MissingParameter"),
            (serde_json::json!({"exam": "XYZ", "subject": "Mathematics", "topic": "Algebra"}), StatusCode::BAD_REQUEST, "UnknownExam"),
            (serde_json::json!({"exam": "WAEC", "subject": "Music", "topic": "Scales"}), StatusCode::BAD_REQUEST, "UnknownSubject"),
            (serde_json::json!({"exam": "JAMB", "subject": "Mathematics", "topic": "Nonexistent Topic"}), StatusCode::NOT_FOUND, "UnknownTopic"),
        ];

        for (payload, status, category) in cases {
            let response = app
                .clone()
                .oneshot(post_json("/api/generate_note", payload))
                .await
                .unwrap();
            assert_eq!(response.status(), status, "{}", category);
            let body = json_response(response).await;
            assert_eq!(body["error_category"], category);
            assert!(body["message"].is_string());
            assert!(body.get("note").is_none());
        }
    }

    #[tokio::test]
    async fn test_generate_note_rejects_malformed_body() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/generate_note")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_response(response).await;
        assert_eq!(body["error"], "No data received");
    }

    #[tokio::test]
    async fn test_placeholder_note_unpadded_by_default() {
        let response = create_test_app()
            .oneshot(get("/api/generate_note?exam=WAEC&subject=Physics&topic=Kinematics"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["curated"], false);
        assert!(body["word_count"].as_u64().unwrap() < MIN_WORDS as u64);
    }

    #[tokio::test]
    async fn test_placeholder_padding_from_config() {
        let config = ServerConfig {
            pad_placeholders: true,
            min_words: 120,
            ..ServerConfig::default()
        };
        let response = create_test_app_with(config)
            .oneshot(get("/api/generate_note?exam=WAEC&subject=Physics&topic=Kinematics"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["curated"], false);
        assert!(body["word_count"].as_u64().unwrap() >= 120);
    }

    #[tokio::test]
    async fn test_dispatch_fault_is_500() {
        let catalog = SyllabusCatalog::from_json_str(
            r#"[{"exam": "MOCK", "subject": "Agriculture", "topics": ["Soil"]}]"#,
        )
        .unwrap();
        let state = AppState::with_catalog(catalog, &ServerConfig::default());

        let response = create_router(state)
            .oneshot(get("/api/generate_note?exam=MOCK&subject=Agriculture&topic=Soil"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_response(response).await;
        assert_eq!(body["error_category"], "InternalDispatchFault");
    }

    #[tokio::test]
    async fn test_syllabus_path_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("syllabus.json");
        std::fs::write(
            &path,
            r#"[{"exam": "MOCK", "subject": "Mathematics", "topics": ["Algebra"]}]"#,
        )
        .unwrap();

        let config = ServerConfig {
            syllabus_path: Some(path),
            ..ServerConfig::default()
        };
        let response = create_test_app_with(config)
            .oneshot(get("/api/topics?exam=MOCK&subject=Mathematics"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["topics"], serde_json::json!(["Algebra"]));
    }

    // =========================================================================
    // Section 4: Grades
    // =========================================================================

    #[tokio::test]
    async fn test_grade_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("grades.csv");
        let config = ServerConfig {
            grades_csv_path: csv_path.clone(),
            ..ServerConfig::default()
        };
        let app = create_test_app_with(config);

        // Saving an empty book is rejected
        let response = app
            .clone()
            .oneshot(post_json("/api/grades/save", Value::Null))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(post_json("/api/grades", serde_json::json!({"name": "Ada", "score": 85})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["message"], "Grade added");
        assert_eq!(body["average"], "85.00");
        assert_eq!(body["grades"][0]["grade"], "A");

        let response = app
            .clone()
            .oneshot(post_json("/api/grades", serde_json::json!({"name": "Tunde", "score": 50})))
            .await
            .unwrap();
        let body = json_response(response).await;
        assert_eq!(body["average"], "67.50");
        assert_eq!(body["grades"][1]["grade"], "D");

        let response = app
            .clone()
            .oneshot(post_json("/api/grades/save", Value::Null))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let contents = std::fs::read_to_string(&csv_path).unwrap();
        assert_eq!(contents.lines().count(), 3);

        let response = app
            .clone()
            .oneshot(post_json("/api/grades/clear", Value::Null))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/api/grades")).await.unwrap();
        let body = json_response(response).await;
        assert_eq!(body["average"], "N/A");
        assert_eq!(body["grades"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_grade_validation() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(post_json("/api/grades", serde_json::json!({"name": "Ada", "score": 101})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_response(response).await;
        assert_eq!(body["error"], "Score must be between 0 and 100");

        let response = app
            .oneshot(post_json("/api/grades", serde_json::json!({"name": "", "score": 50})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_response(response).await;
        assert_eq!(body["error"], "Name cannot be empty");
    }

    // =========================================================================
    // Section 5: Static files
    // =========================================================================

    #[tokio::test]
    async fn test_static_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Lessons</h1>").unwrap();
        let config = ServerConfig {
            static_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };

        let response = create_test_app_with(config).oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<h1>Lessons</h1>");
    }
}
