mod common;

use axum::body::Body;
use axum::http::StatusCode;
use chrono::NaiveDate;
use common::{
    ADMIN_PASSWORD, admin_token, bearer, get, json_request, seed_admin, seed_intern, send,
    setup_test_app,
};
use interntrack::interntrack_db::InternRepository;
use interntrack::interntrack_models::NewLogEntry;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_admin_login_sets_cookie() {
    let app = setup_test_app();
    seed_admin(&app.repository, "coordinator").await;

    let request = json_request(
        "POST",
        "/api/admin/login",
        None,
        json!({ "username": "coordinator", "password": ADMIN_PASSWORD }),
    );
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::OK);

    let cookie = response.headers["set-cookie"].to_str().unwrap().to_string();
    assert!(cookie.starts_with("auth-token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=604800"));

    let body = response.json();
    let token = body["token"].as_str().unwrap();
    assert!(cookie.contains(token));
    assert_eq!(body["user"]["username"], "coordinator");
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_admin_login_wrong_password() {
    let app = setup_test_app();
    seed_admin(&app.repository, "coordinator").await;

    for (username, password) in [("coordinator", "wrong-password"), ("nobody", ADMIN_PASSWORD)] {
        let request = json_request(
            "POST",
            "/api/admin/login",
            None,
            json!({ "username": username, "password": password }),
        );
        let response = send(&app, request).await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.json(), json!({ "error": "Invalid credentials" }));
        assert!(response.headers.get("set-cookie").is_none());
    }
}

#[tokio::test]
async fn test_admin_login_missing_field() {
    let app = setup_test_app();

    let request = json_request(
        "POST",
        "/api/admin/login",
        None,
        json!({ "username": "coordinator" }),
    );
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "error": "password is required" }));
}

#[tokio::test]
async fn test_admin_logout_clears_cookie() {
    let app = setup_test_app();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/admin/logout")
        .header("cookie", "auth-token=previous-session")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.headers["set-cookie"].to_str().unwrap();
    assert!(cookie.starts_with("auth-token="));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_intern_lifecycle() {
    let app = setup_test_app();
    let admin = seed_admin(&app.repository, "coordinator").await;
    let token = admin_token(&app, &admin);

    let create = json_request(
        "POST",
        "/api/admin/interns",
        Some(&token),
        json!({
            "student_id": "S-200",
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace@example.com",
            "password": "initial-pass",
            "company": "Navy",
            "start_date": "2025-06-01",
            "end_date": "2025-08-31"
        }),
    );
    let response = send(&app, create).await;
    assert_eq!(response.status, StatusCode::CREATED);
    let created = response.json();
    assert!(created.get("password").is_none());
    assert!(created.get("password_hash").is_none());
    let id = created["id"].as_str().unwrap().to_string();

    let list = send(
        &app,
        bearer(get("/api/admin/interns"), &token)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.json().as_array().unwrap().len(), 1);

    let update = json_request(
        "PUT",
        &format!("/api/admin/interns/{id}"),
        Some(&token),
        json!({ "department": "Compilers" }),
    );
    let response = send(&app, update).await;
    assert_eq!(response.status, StatusCode::OK);
    let updated = response.json();
    assert_eq!(updated["department"], "Compilers");
    assert_eq!(updated["company"], "Navy");

    let fetched = send(
        &app,
        bearer(get(&format!("/api/admin/interns/{id}")), &token)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json()["student_id"], "S-200");

    let delete = bearer(
        axum::http::Request::builder()
            .method("DELETE")
            .uri(format!("/api/admin/interns/{id}")),
        &token,
    )
    .body(Body::empty())
    .unwrap();
    let response = send(&app, delete).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());

    let gone = send(
        &app,
        bearer(get(&format!("/api/admin/interns/{id}")), &token)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.json(), json!({ "error": "Intern not found" }));
}

#[tokio::test]
async fn test_create_intern_rejects_duplicate_student_id() {
    let app = setup_test_app();
    let admin = seed_admin(&app.repository, "coordinator").await;
    let token = admin_token(&app, &admin);
    seed_intern(&app.repository, "S-201", "first@example.com").await;

    let request = json_request(
        "POST",
        "/api/admin/interns",
        Some(&token),
        json!({
            "student_id": "S-201",
            "first_name": "Second",
            "last_name": "Intern",
            "email": "second@example.com",
            "password": "another-pass"
        }),
    );
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_intern_validation() {
    let app = setup_test_app();
    let admin = seed_admin(&app.repository, "coordinator").await;
    let token = admin_token(&app, &admin);

    let short_password = json_request(
        "POST",
        "/api/admin/interns",
        Some(&token),
        json!({
            "student_id": "S-202",
            "first_name": "Short",
            "last_name": "Password",
            "email": "short@example.com",
            "password": "short"
        }),
    );
    let response = send(&app, short_password).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json(),
        json!({ "error": "password must be at least 8 characters" })
    );

    let reversed_dates = json_request(
        "POST",
        "/api/admin/interns",
        Some(&token),
        json!({
            "student_id": "S-203",
            "first_name": "Reversed",
            "last_name": "Dates",
            "email": "reversed@example.com",
            "password": "long-enough",
            "start_date": "2025-09-01",
            "end_date": "2025-06-01"
        }),
    );
    let response = send(&app, reversed_dates).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_and_delete_missing_intern() {
    let app = setup_test_app();
    let admin = seed_admin(&app.repository, "coordinator").await;
    let token = admin_token(&app, &admin);
    let missing = Uuid::new_v4();

    let update = json_request(
        "PUT",
        &format!("/api/admin/interns/{missing}"),
        Some(&token),
        json!({ "company": "Nowhere" }),
    );
    assert_eq!(send(&app, update).await.status, StatusCode::NOT_FOUND);

    let delete = bearer(
        axum::http::Request::builder()
            .method("DELETE")
            .uri(format!("/api/admin/interns/{missing}")),
        &token,
    )
    .body(Body::empty())
    .unwrap();
    assert_eq!(send(&app, delete).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_log_review() {
    let app = setup_test_app();
    let admin = seed_admin(&app.repository, "coordinator").await;
    let token = admin_token(&app, &admin);
    let first = seed_intern(&app.repository, "S-210", "s210@example.com").await;
    let second = seed_intern(&app.repository, "S-211", "s211@example.com").await;

    for (intern_id, day) in [(first.id, 2), (first.id, 5), (second.id, 3)] {
        app.repository
            .create_log(NewLogEntry {
                intern_id,
                log_date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
                hours: 7.5,
                tasks: format!("Day {day}"),
                remarks: None,
            })
            .await
            .unwrap();
    }

    let all = send(
        &app,
        bearer(get("/api/admin/logs"), &token)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(all.status, StatusCode::OK);
    let tasks: Vec<String> = all
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|log| log["tasks"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(tasks, vec!["Day 5", "Day 3", "Day 2"]);

    let own = send(
        &app,
        bearer(get(&format!("/api/admin/interns/{}/logs", first.id)), &token)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.json().as_array().unwrap().len(), 2);

    let missing = send(
        &app,
        bearer(
            get(&format!("/api/admin/interns/{}/logs", Uuid::new_v4())),
            &token,
        )
        .body(Body::empty())
        .unwrap(),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_intern_id_returns_json_error() {
    let app = setup_test_app();
    let admin = seed_admin(&app.repository, "coordinator").await;
    let token = admin_token(&app, &admin);

    for uri in ["/api/admin/interns/42", "/api/admin/interns/42/logs"] {
        let response = send(&app, bearer(get(uri), &token).body(Body::empty()).unwrap()).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            response.headers["content-type"],
            "application/json"
        );
        assert_eq!(response.json(), json!({ "error": "Invalid path parameter" }));
    }
}

#[tokio::test]
async fn test_unknown_username_rejected_like_wrong_password() {
    let app = setup_test_app();

    let request = json_request(
        "POST",
        "/api/admin/login",
        None,
        json!({ "username": "nobody", "password": "whatever-pass" }),
    );
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json(), json!({ "error": "Invalid credentials" }));
}
