//! Throttle-window behavior across sequential calls

use std::time::{Duration, Instant};

use serde_json::json;
use stackex_client::{BackoffPolicy, Error, Parameters};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[path = "support.rs"]
mod support;

use support::{blocking, client_for};

fn backoff_body(seconds: u64) -> serde_json::Value {
    json!({ "items": [], "has_more": false, "backoff": seconds })
}

#[tokio::test]
async fn wait_policy_delays_until_the_window_elapses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(backoff_body(2)))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let elapsed = blocking(move || {
        let parameters = Parameters::new();
        client
            .fetch_questions(&parameters, BackoffPolicy::Wait)
            .expect("first call should succeed");

        let started = Instant::now();
        client
            .fetch_questions(&parameters, BackoffPolicy::Wait)
            .expect("second call should succeed");
        started.elapsed()
    })
    .await;

    assert!(
        elapsed >= Duration::from_millis(1900),
        "second call was issued after only {:?}",
        elapsed
    );
}

#[tokio::test]
async fn fail_policy_surfaces_in_backoff_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(backoff_body(5)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = blocking(move || {
        let parameters = Parameters::new();
        client
            .fetch_questions(&parameters, BackoffPolicy::Wait)
            .expect("first call should succeed");
        client.fetch_questions(&parameters, BackoffPolicy::Fail)
    })
    .await;

    match result {
        Err(Error::InBackoff { remaining }) => {
            assert!(remaining > Duration::from_secs(3));
            assert!(remaining <= Duration::from_secs(5));
        }
        other => panic!("expected InBackoff, got {:?}", other),
    }

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn ignore_policy_proceeds_through_an_active_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(backoff_body(5)))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let elapsed = blocking(move || {
        let parameters = Parameters::new();
        client
            .fetch_questions(&parameters, BackoffPolicy::Wait)
            .expect("first call should succeed");

        let started = Instant::now();
        client
            .fetch_questions(&parameters, BackoffPolicy::Ignore)
            .expect("ignore call should succeed");
        started.elapsed()
    })
    .await;

    assert!(elapsed < Duration::from_secs(1), "ignore waited {:?}", elapsed);
}

#[tokio::test]
async fn batched_requests_share_the_throttle_signature() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(backoff_body(5)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = blocking(move || {
        let parameters = Parameters::new();
        client
            .fetch_questions(&parameters, BackoffPolicy::Wait)
            .expect("first call should succeed");

        // questions/1;2 strips to the same signature as questions.
        client.fetch_questions_by_ids(&[1, 2], &parameters, BackoffPolicy::Fail)
    })
    .await;

    assert!(matches!(result, Err(Error::InBackoff { .. })));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn unrelated_signatures_are_not_throttled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(backoff_body(5)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/answers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "items": [], "has_more": false })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = blocking(move || {
        let parameters = Parameters::new();
        client
            .fetch_questions(&parameters, BackoffPolicy::Wait)
            .expect("questions call should succeed");

        // The questions window does not gate the answers endpoint.
        client.fetch_answers(&parameters, BackoffPolicy::Fail)
    })
    .await;

    assert!(result.is_ok());
}
