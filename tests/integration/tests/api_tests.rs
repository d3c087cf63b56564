//! API Integration Tests
//!
//! Each test starts the full router (middleware included) on an ephemeral
//! port, backed by an in-memory repository and the real Argon2 hasher.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer, TEST_JWT_SECRET,
};
use jobs_common::JwtService;
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");

    assert!(response.headers().contains_key("x-request-id"));
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");

    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_health_ready_when_database_down() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.repository.set_unavailable(true);

    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body["status"], "not_ready");
}

// ============================================================================
// Signup Tests
// ============================================================================

#[tokio::test]
async fn test_signup() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/signup", &request).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body["name"], request.name.as_str());
    assert_eq!(body["email"], request.email.as_str());
    assert!(body["id"].as_i64().is_some());
    assert!(body.get("password_hash").is_none());
    assert!(!body.to_string().contains(&request.password));
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/v1/signup", &request).await.unwrap();
    assert_error(response, StatusCode::CONFLICT, "EMAIL_ALREADY_EXISTS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_signup_validation() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest {
        name: String::new(),
        email: "not-an-email".to_string(),
        password: "123".to_string(),
    };

    let response = server.post("/api/v1/signup", &request).await.unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();

    let details = &error["details"];
    assert!(details.get("name").is_some());
    assert!(details.get("email").is_some());
    assert!(details.get("password").is_some());
}

#[tokio::test]
async fn test_signup_malformed_body() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .client
        .post(format!("{}/api/v1/signup", server.base_url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_BODY")
        .await
        .unwrap();
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login_issues_token() {
    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();

    let response = server.post("/api/v1/signup", &register).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/v1/login", &LoginRequest::from_register(&register))
        .await
        .unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);

    let claims = JwtService::new(TEST_JWT_SECRET)
        .verify(&token.access_token)
        .expect("Token should verify");
    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.iss, "service project");
    assert_eq!(claims.aud, vec!["users".to_string()]);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/api/v1/signup", &register).await.unwrap();

    let login = LoginRequest {
        email: register.email.clone(),
        password: "definitely-wrong".to_string(),
    };
    let response = server.post("/api/v1/login", &login).await.unwrap();
    let error = assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        .await
        .unwrap();

    assert_eq!(error["message"], "entered password is wrong");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let login = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/v1/login", &login).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_USER")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_database_down() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.repository.set_unavailable(true);

    let login = LoginRequest {
        email: "hr@gmail.com".to_string(),
        password: "12345678".to_string(),
    };
    let response = server.post("/api/v1/login", &login).await.unwrap();
    let error = assert_error(response, StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR")
        .await
        .unwrap();

    assert_eq!(error["message"], "Internal server error");
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_protected_route_requires_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/companies").await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "MISSING_AUTHORIZATION")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_protected_route_rejects_bad_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_auth("/api/v1/jobs", "invalid.token.here")
        .await
        .unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_TOKEN")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_protected_route_rejects_foreign_secret() {
    let server = TestServer::start().await.expect("Failed to start server");
    let claims = jobs_common::Claims::issue(1);
    let token = JwtService::new("some-other-secret-entirely-1234")
        .sign(&claims)
        .unwrap();

    let response = server.get_auth("/api/v1/companies", &token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Company Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_company() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.signup_and_login().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/companies",
            &token,
            &CreateCompanyRequest::new("byju", "gurgaon"),
        )
        .await
        .unwrap();
    let created: CompanyResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.name, "byju");
    assert_eq!(created.location, "gurgaon");

    let response = server
        .get_auth(&format!("/api/v1/companies/{}", created.id), &token)
        .await
        .unwrap();
    let fetched: CompanyResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "byju");
}

#[tokio::test]
async fn test_list_companies_is_ordered_and_stable() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.signup_and_login().await.unwrap();

    for (name, location) in [("airtel", "kolkata"), ("byju", "gurgaon")] {
        let response = server
            .post_auth(
                "/api/v1/companies",
                &token,
                &CreateCompanyRequest::new(name, location),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let first: Vec<CompanyResponse> =
        assert_json(server.get_auth("/api/v1/companies", &token).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    let second: Vec<CompanyResponse> =
        assert_json(server.get_auth("/api/v1/companies", &token).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first[0].name, "airtel");
    assert_eq!(first[1].name, "byju");
    assert_eq!(
        first.iter().map(|c| c.id).collect::<Vec<_>>(),
        second.iter().map(|c| c.id).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_get_missing_company() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.signup_and_login().await.unwrap();

    let response = server
        .get_auth("/api/v1/companies/999", &token)
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_COMPANY")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_malformed_company_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.signup_and_login().await.unwrap();

    let response = server
        .get_auth("/api/v1/companies/abc", &token)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_PATH_PARAMETER")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_company_validation() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.signup_and_login().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/companies",
            &token,
            &CreateCompanyRequest::new("byju", ""),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
}

// ============================================================================
// Job Tests
// ============================================================================

async fn create_company(server: &TestServer, token: &str, name: &str) -> CompanyResponse {
    let response = server
        .post_auth(
            "/api/v1/companies",
            token,
            &CreateCompanyRequest::new(name, "kolkata"),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

#[tokio::test]
async fn test_jobs_by_company() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.signup_and_login().await.unwrap();
    let airtel = create_company(&server, &token, "airtel").await;
    let byju = create_company(&server, &token, "byju").await;

    for (company_id, role) in [(byju.id, "xyz"), (airtel.id, "ops"), (byju.id, "abc")] {
        let response = server
            .post_auth(
                &format!("/api/v1/companies/{company_id}/jobs"),
                &token,
                &CreateJobRequest::new(role, "abcd"),
            )
            .await
            .unwrap();
        let job: JobResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(job.company_id, company_id);
    }

    let response = server
        .get_auth(&format!("/api/v1/companies/{}/jobs", byju.id), &token)
        .await
        .unwrap();
    let jobs: Vec<JobResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].role, "xyz");
    assert_eq!(jobs[1].role, "abc");
    assert!(jobs.iter().all(|j| j.company_id == byju.id));

    let response = server.get_auth("/api/v1/jobs", &token).await.unwrap();
    let all: Vec<JobResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_jobs_for_unknown_company_is_empty() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.signup_and_login().await.unwrap();

    let response = server
        .get_auth("/api/v1/companies/42/jobs", &token)
        .await
        .unwrap();
    let jobs: Vec<JobResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn test_create_job_for_missing_company() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.signup_and_login().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/companies/77/jobs",
            &token,
            &CreateJobRequest::new("xyz", "abcd"),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_COMPANY")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_job() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.signup_and_login().await.unwrap();
    let company = create_company(&server, &token, "airtel").await;

    let response = server
        .post_auth(
            &format!("/api/v1/companies/{}/jobs", company.id),
            &token,
            &CreateJobRequest::new("xyz", "abcd"),
        )
        .await
        .unwrap();
    let created: JobResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/jobs/{}", created.id), &token)
        .await
        .unwrap();
    let job: JobResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(job.role, "xyz");
    assert_eq!(job.description, "abcd");

    let response = server.get_auth("/api/v1/jobs/15", &token).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_JOB")
        .await
        .unwrap();
}
