#![cfg(feature = "ssr")]

use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{extract::Path, Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use voting_app::domain::{Mutation, NewCandidate, Role, SignupInput};
use voting_app::infrastructure::backend::BackendClient;
use voting_app::infrastructure::identity::IdentityClaims;
use voting_errors::AppError;

type Seen = Arc<Mutex<Vec<Value>>>;

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn bearer(headers: &HeaderMap) -> Value {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| Value::String(v.to_string()))
        .unwrap_or(Value::Null)
}

#[tokio::test]
async fn test_tallies_normalized_with_bearer_token() {
    let seen: Seen = Arc::default();
    let recorder = seen.clone();
    let router = Router::new().route(
        "/candidate/vote/count",
        get(move |headers: HeaderMap| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(bearer(&headers));
                Json(json!([
                    {"party": "Green", "votes": 3},
                    {"name": "Ravi", "voteCount": 1},
                    {"candidate": "Meera", "vote_count": "2"},
                    {"name": "Nobody"}
                ]))
            }
        }),
    );
    let client = BackendClient::new(&spawn(router).await);

    let tallies = client.tallies(Some("tok-1")).await.unwrap();

    let counts: Vec<(String, u64)> = tallies.iter().map(|t| (t.label.clone(), t.votes)).collect();
    assert_eq!(
        counts,
        vec![
            ("Green".to_string(), 3),
            ("Ravi".to_string(), 1),
            ("Meera".to_string(), 2),
            ("Nobody".to_string(), 0),
        ]
    );
    assert_eq!(seen.lock().unwrap()[0], json!("Bearer tok-1"));
}

#[tokio::test]
async fn test_missing_token_sends_no_header() {
    let router = Router::new().route(
        "/candidate/",
        get(|headers: HeaderMap| async move {
            if headers.contains_key("authorization") {
                (StatusCode::OK, Json(json!([])))
            } else {
                (StatusCode::UNAUTHORIZED, Json(json!({"error": "Token not found"})))
            }
        }),
    );
    let client = BackendClient::new(&spawn(router).await);

    let err = client.candidates(None).await.unwrap_err();

    assert_eq!(
        err,
        AppError::Backend {
            status: 401,
            message: "Token not found".to_string()
        }
    );
    assert_eq!(err.user_message(), "Token not found");
}

#[tokio::test]
async fn test_cast_vote_success_and_backend_message() {
    let router = Router::new().route(
        "/candidate/vote/{id}",
        get(|Path(id): Path<String>| async move {
            if id == "c1" {
                (StatusCode::OK, Json(json!({"message": "Vote recorded successfully"})))
            } else {
                (StatusCode::FORBIDDEN, Json(json!({"message": "You have already voted"})))
            }
        }),
    );
    let client = BackendClient::new(&spawn(router).await);

    assert_eq!(client.cast_vote(Some("t"), "c1").await.unwrap(), Mutation::CastVote);

    let err = client.cast_vote(Some("t"), "c2").await.unwrap_err();
    assert_eq!(err.user_message(), "You have already voted");
}

#[tokio::test]
async fn test_error_without_json_body_uses_fallback() {
    let router = Router::new().route(
        "/user/admin/reset",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = BackendClient::new(&spawn(router).await);

    let err = client.reset_voting(Some("t")).await.unwrap_err();

    assert_eq!(err.user_message(), "Failed to reset voting");
}

#[tokio::test]
async fn test_google_login_exchanges_name_and_email() {
    let seen: Seen = Arc::default();
    let recorder = seen.clone();
    let router = Router::new().route(
        "/user/google-login",
        post(move |Json(body): Json<Value>| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(body);
                Json(json!({
                    "token": "jwt-abc",
                    "user": {"_id": "u1", "name": "Asha", "email": "asha@gmail.com", "role": "admin", "isVoted": false}
                }))
            }
        }),
    );
    let client = BackendClient::new(&spawn(router).await);
    let identity = IdentityClaims {
        email: "asha@gmail.com".into(),
        name: "Asha".into(),
    };

    let session = client.google_login(&identity).await.unwrap();

    assert_eq!(session.token, "jwt-abc");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.role.dashboard_path(), "/admin/dashboard");
    assert_eq!(
        seen.lock().unwrap()[0],
        json!({"name": "Asha", "email": "asha@gmail.com"})
    );
}

#[tokio::test]
async fn test_login_failure_surfaces_backend_error() {
    let router = Router::new().route(
        "/user/google-login",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({"error": "Email not allowed"}))) }),
    );
    let client = BackendClient::new(&spawn(router).await);
    let identity = IdentityClaims {
        email: "x@y.z".into(),
        name: "X".into(),
    };

    let err = client.google_login(&identity).await.unwrap_err();

    assert_eq!(err.user_message(), "Email not allowed");
}

#[tokio::test]
async fn test_signup_uses_backend_field_names() {
    let seen: Seen = Arc::default();
    let recorder = seen.clone();
    let router = Router::new().route(
        "/user/signup",
        post(move |Json(body): Json<Value>| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(body);
                Json(json!({"token": "t-new", "role": "voter", "user": {"name": "Ravi"}}))
            }
        }),
    );
    let client = BackendClient::new(&spawn(router).await);
    let form = SignupInput {
        name: "Ravi".into(),
        aadhar_card_number: "123412341234".into(),
        password: "pw".into(),
        age: "30".into(),
        address: "Pune".into(),
        role: "voter".into(),
    }
    .validate()
    .unwrap();

    let session = client.signup(&form).await.unwrap();

    assert_eq!(session.role, Role::Voter);
    let body = seen.lock().unwrap()[0].clone();
    assert_eq!(body["aadharCardNumber"], "123412341234");
    assert_eq!(body["age"], 30);
}

#[tokio::test]
async fn test_add_candidate_and_roster() {
    let seen: Seen = Arc::default();
    let recorder = seen.clone();
    let router = Router::new()
        .route(
            "/candidate",
            post(move |Json(body): Json<Value>| {
                let recorder = recorder.clone();
                async move {
                    recorder.lock().unwrap().push(body);
                    (StatusCode::CREATED, Json(json!({"response": "ok"})))
                }
            }),
        )
        .route(
            "/user/users/voters",
            get(|| async {
                Json(json!([
                    {"_id": "v1", "name": "Asha", "email": "a@x.io", "isVoted": true},
                    {"_id": "v2", "name": "Ravi", "email": "r@x.io", "is_voted": 0}
                ]))
            }),
        );
    let client = BackendClient::new(&spawn(router).await);

    let candidate = NewCandidate {
        name: "Meera".into(),
        party: "Independent".into(),
        age: 41,
    };
    let mutation = client.add_candidate(Some("t"), &candidate).await.unwrap();
    assert_eq!(mutation, Mutation::AddCandidate);
    assert_eq!(
        seen.lock().unwrap()[0],
        json!({"name": "Meera", "party": "Independent", "age": 41})
    );

    let voters = client.voters(Some("t")).await.unwrap();
    assert!(voters[0].has_voted);
    assert!(!voters[1].has_voted);
}

#[tokio::test]
async fn test_profile_requires_user() {
    let router = Router::new().route("/user/profile", get(|| async { Json(json!({})) }));
    let client = BackendClient::new(&spawn(router).await);

    let err = client.profile(Some("t")).await.unwrap_err();

    assert!(matches!(err, AppError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = BackendClient::new(&format!("http://{}", addr));

    let err = client.tallies(None).await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
}
