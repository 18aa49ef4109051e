//! Drives the real HTTP client against an in-process mock of the quiz API.

use std::{path::PathBuf, sync::Arc};

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};

use quiz_link_client::{
    api::{ApiClient, AuthApi, QuizApi, UserApi},
    auth::{MemorySessionStore, Route, SessionGuard, SessionStore},
    config::Config,
    errors::AppError,
    models::{
        domain::{OptionKey, Role},
        dto::request::{AssignQuizRequest, LoginRequest},
    },
    services::{AuthService, StudentDashboard},
};

const TOKEN: &str = "jwt-abc";

fn authorized(req: &HttpRequest) -> bool {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        == Some(TOKEN)
}

fn token_rejected() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({ "msg": "Token is not valid" }))
}

async fn login(body: web::Json<Value>) -> HttpResponse {
    if body["password"] != "secret" {
        return HttpResponse::BadRequest().json(json!({ "msg": "Invalid credentials" }));
    }
    HttpResponse::Ok().json(json!({
        "token": TOKEN,
        "user": {
            "_id": "st-1",
            "name": "Sam",
            "email": body["email"],
            "role": "student"
        }
    }))
}

async fn logout() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "msg": "Logged out" }))
}

async fn pending(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return token_rejected();
    }
    let options: Vec<Value> = ["a", "b", "c", "d"]
        .iter()
        .map(|k| json!({ "key": k, "text": format!("Option {}", k) }))
        .collect();
    HttpResponse::Ok().json(json!([{
        "assignmentId": "as-1",
        "quizId": "qz-1",
        "title": "Ownership basics",
        "questions": [
            { "_id": "q1", "questionText": "First?", "options": options },
            { "_id": "q2", "questionText": "Second?", "options": options }
        ]
    }]))
}

async fn submit(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if !authorized(&req) {
        return token_rejected();
    }
    let answers = body["answers"].as_array().cloned().unwrap_or_default();
    if body["quizId"] != "qz-1" || answers.len() != 2 {
        return HttpResponse::BadRequest().json(json!({ "msg": "Please answer all questions" }));
    }
    HttpResponse::Ok().json(json!({
        "score": 50,
        "correctAnswers": 1,
        "totalQuestions": 2,
        "results": [
            { "questionId": "q1", "selectedKey": answers[0]["selectedKey"], "isCorrect": false, "correctAnswer": "b" },
            { "questionId": "q2", "selectedKey": answers[1]["selectedKey"], "isCorrect": true, "correctAnswer": "a" }
        ]
    }))
}

async fn assign() -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "msg": "Quiz already assigned to this student" }))
}

async fn departments() -> HttpResponse {
    HttpResponse::InternalServerError().body("boom")
}

async fn delete_quiz(path: web::Path<String>) -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "msg": format!("Quiz {} not found", path.into_inner()) }))
}

async fn results_echo_path(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "msg": req.uri().path() }))
}

async fn start_mock_api() -> String {
    let server = HttpServer::new(|| {
        App::new().service(
            web::scope("/api")
                .route("/auth/login", web::post().to(login))
                .route("/auth/logout", web::post().to(logout))
                .route("/departments", web::get().to(departments))
                .route("/quizzes/student/pending", web::get().to(pending))
                .route("/quizzes/student/submit", web::post().to(submit))
                .route("/quizzes/assign", web::post().to(assign))
                .route("/quizzes/delete/{id}", web::delete().to(delete_quiz))
                .route("/quizzes/results/{id}", web::get().to(results_echo_path)),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("mock server should bind");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}/api", addr)
}

fn config_for(base_url: &str) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        session_file: PathBuf::from("unused.json"),
        request_timeout_secs: 5,
    }
}

fn client_with(base_url: &str, store: Arc<dyn SessionStore>) -> ApiClient {
    ApiClient::new(&config_for(base_url), store).expect("client should build")
}

#[actix_web::test]
async fn test_login_persists_session_used_by_later_calls() {
    let base = start_mock_api().await;
    let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let client = Arc::new(client_with(&base, Arc::clone(&store)));
    let guard = Arc::new(SessionGuard::new(Arc::clone(&store)));
    let auth = AuthService::new(client.clone(), Arc::clone(&guard));

    let route = auth
        .login(&LoginRequest::new("sam@example.com", "secret"))
        .await
        .expect("login should succeed");
    assert_eq!(route, Route::Student);
    assert_eq!(guard.current_role(), Some(Role::Student));

    let quizzes = client.pending_quizzes().await.expect("pending should load");
    assert_eq!(quizzes.len(), 1);
    assert_eq!(quizzes[0].questions[1].text, "Second?");
}

#[actix_web::test]
async fn test_wrong_password_is_invalid_credentials() {
    let base = start_mock_api().await;
    let store = Arc::new(MemorySessionStore::new());
    let client = client_with(&base, store.clone());

    let result = client
        .login(&LoginRequest::new("sam@example.com", "nope"))
        .await;

    assert_eq!(
        result.unwrap_err(),
        AppError::InvalidCredentials("Invalid credentials".into())
    );
    assert!(store.load().unwrap().is_none());
}

#[actix_web::test]
async fn test_missing_token_is_unauthorized() {
    let base = start_mock_api().await;
    let client = client_with(&base, Arc::new(MemorySessionStore::new()));

    let result = client.pending_quizzes().await;

    assert_eq!(
        result.unwrap_err(),
        AppError::Unauthorized("Token is not valid".into())
    );
}

#[actix_web::test]
async fn test_student_takes_and_submits_quiz() {
    let base = start_mock_api().await;
    let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let client = Arc::new(client_with(&base, Arc::clone(&store)));
    client
        .login(&LoginRequest::new("sam@example.com", "secret"))
        .await
        .and_then(|auth| {
            SessionGuard::new(Arc::clone(&store))
                .login(auth.token.into(), auth.user)
        })
        .expect("login should succeed");

    let mut dashboard = StudentDashboard::new(client.clone());
    dashboard.refresh_pending().await.expect("pending should load");
    dashboard.start("as-1").expect("quiz should start");
    dashboard
        .session_mut()
        .select_answer("q1", OptionKey::C)
        .unwrap();
    dashboard
        .session_mut()
        .select_answer("q2", OptionKey::A)
        .unwrap();

    let result = dashboard.submit().await.expect("submit should succeed");

    assert_eq!(result.score, 50.0);
    assert_eq!(result.correct_count, 1);
    assert_eq!(result.results[0].revealed_answer(), Some(OptionKey::B));
    assert_eq!(result.results[1].revealed_answer(), None);
    assert!(dashboard.pending().is_empty());
}

#[actix_web::test]
async fn test_server_msg_is_carried_verbatim() {
    let base = start_mock_api().await;
    let client = client_with(&base, Arc::new(MemorySessionStore::new()));

    let assign = client
        .assign_quiz(&AssignQuizRequest {
            quiz_id: "qz-1".to_string(),
            student_id: "st-1".to_string(),
        })
        .await;
    assert_eq!(
        assign.unwrap_err(),
        AppError::ValidationRejected("Quiz already assigned to this student".into())
    );

    let delete = client.delete_quiz("qz-404").await;
    assert_eq!(
        delete.unwrap_err(),
        AppError::NotFound("Quiz qz-404 not found".into())
    );
}

#[actix_web::test]
async fn test_ids_are_escaped_into_a_single_path_segment() {
    let base = start_mock_api().await;
    let client = client_with(&base, Arc::new(MemorySessionStore::new()));

    let results = client.quiz_results("a/b c").await;
    assert_eq!(
        results.unwrap_err(),
        AppError::NotFound("/api/quizzes/results/a%2Fb%20c".into())
    );

    let delete = client.delete_quiz("a/b c").await.unwrap_err();
    let AppError::NotFound(msg) = delete else {
        panic!("expected the delete route to answer, got {:?}", delete);
    };
    assert!(msg.starts_with("Quiz a"), "{}", msg);
    assert!(msg.ends_with("b c not found"), "{}", msg);
}

#[actix_web::test]
async fn test_non_json_error_body_falls_back_to_status_reason() {
    let base = start_mock_api().await;
    let client = client_with(&base, Arc::new(MemorySessionStore::new()));

    let result = client.departments().await;

    assert_eq!(
        result.unwrap_err(),
        AppError::ServerError("Internal Server Error".into())
    );
}

#[actix_web::test]
async fn test_unreachable_server_is_network_error() {
    let client = client_with(
        "http://127.0.0.1:1/api",
        Arc::new(MemorySessionStore::new()),
    );

    let result = client.departments().await;

    assert!(matches!(result, Err(AppError::NetworkError(_))));
}
