#![allow(dead_code)]

use beget_client::Client;
use httpmock::prelude::*;
use httpmock::Mock;

pub const LOGIN: &str = "test";
pub const PASSWORD: &str = "test";

pub const OK_TRUE: &str = r#"{"status": "success", "answer": {"status": "success", "result": true}}"#;

/// Mount a mock for `endpoint` that only answers when the query carries the
/// test credentials and exactly `input` as payload.
pub async fn mock_endpoint<'a>(
    server: &'a MockServer,
    endpoint: &str,
    input: &str,
    output: &str,
) -> Mock<'a> {
    let path = format!("/api/{endpoint}");
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(path)
                .query_param("login", LOGIN)
                .query_param("passwd", PASSWORD)
                .query_param("input_format", "json")
                .query_param("output_format", "json")
                .query_param("input_data", input);
            then.status(200)
                .header("content-type", "application/json")
                .body(output);
        })
        .await
}

pub fn test_client(server: &MockServer) -> Client {
    Client::builder()
        .login(LOGIN)
        .password(PASSWORD)
        .base_url(server.url("/api"))
        .build()
        .unwrap()
}
