/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_mcp_server::tools::handle_call;
use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_sdk_s3::operation::head_bucket::HeadBucketOutput;
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{Bucket, CommonPrefix, Object};
use aws_smithy_mocks_experimental::{mock, mock_client, Rule, RuleMode};
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::http::StatusCode;
use aws_smithy_types::DateTime;
use bytes::Bytes;
use serde_json::json;

fn test_client(s3_client: aws_sdk_s3::Client) -> aws_s3_mcp_server::Client {
    let config = aws_s3_mcp_server::Config::builder()
        .client(s3_client)
        .build();
    aws_s3_mcp_server::Client::new(config)
}

fn empty_client() -> aws_s3_mcp_server::Client {
    let rules: Vec<Rule> = vec![];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    test_client(s3_client)
}

#[tokio::test]
async fn test_list_buckets_text() {
    let list_rule = mock!(aws_sdk_s3::Client::list_buckets).then_output(|| {
        ListBucketsOutput::builder()
            .buckets(
                Bucket::builder()
                    .name("alpha")
                    .creation_date(DateTime::from_secs(1_704_067_200))
                    .build(),
            )
            .buckets(Bucket::builder().name("beta").build())
            .build()
    });

    let rules: Vec<Rule> = vec![list_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    let result = handle_call(&client, "list_buckets", json!({})).await;
    assert!(!result.is_error());
    assert_eq!(
        "Buckets (2):\n  • alpha (created: 2024-01-01T00:00:00Z)\n  • beta",
        result.text()
    );
}

/// Zero buckets is a valid, non-error result.
#[tokio::test]
async fn test_list_buckets_empty_text() {
    let list_rule = mock!(aws_sdk_s3::Client::list_buckets)
        .then_output(|| ListBucketsOutput::builder().build());

    let rules: Vec<Rule> = vec![list_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    let result = handle_call(&client, "list_buckets", json!({})).await;
    assert!(!result.is_error());
    assert_eq!("No buckets found.", result.text());
}

#[tokio::test]
async fn test_list_objects_text() {
    let list_rule = mock!(aws_sdk_s3::Client::list_objects_v2).then_output(|| {
        ListObjectsV2Output::builder()
            .contents(
                Object::builder()
                    .key("uploads/file1.txt")
                    .size(100)
                    .last_modified(DateTime::from_secs(1_704_067_200))
                    .build(),
            )
            .contents(Object::builder().key("uploads/file2.txt").size(200).build())
            .common_prefixes(CommonPrefix::builder().prefix("uploads/img/").build())
            .build()
    });

    let rules: Vec<Rule> = vec![list_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    let result = handle_call(
        &client,
        "list_objects",
        json!({ "bucket": "test-bucket", "prefix": "uploads/" }),
    )
    .await;
    assert!(!result.is_error());
    assert_eq!(
        "Objects in s3://test-bucket/uploads/ (max 100):\n  📁 uploads/img/\n  📄 uploads/file1.txt (100 B) — 2024-01-01T00:00:00Z\n  📄 uploads/file2.txt (200 B)",
        result.text()
    );
}

#[tokio::test]
async fn test_get_object_text() {
    let get_rule = mock!(aws_sdk_s3::Client::get_object).then_output(|| {
        GetObjectOutput::builder()
            .body(ByteStream::from_static(b"hello"))
            .content_length(5)
            .build()
    });

    let rules: Vec<Rule> = vec![get_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    let result = handle_call(
        &client,
        "get_object",
        json!({ "bucket": "test-bucket", "key": "greeting.txt" }),
    )
    .await;
    assert!(!result.is_error());
    assert_eq!(
        "Content of s3://test-bucket/greeting.txt:\n\nhello",
        result.text()
    );
}

/// The reported upload size is the length of the input text, not the UTF-8
/// byte count.
#[tokio::test]
async fn test_put_object_reports_text_length() {
    let put_rule =
        mock!(aws_sdk_s3::Client::put_object).then_output(|| PutObjectOutput::builder().build());

    let rules: Vec<Rule> = vec![put_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    // "héllo 🚀" is 7 characters but 11 bytes of UTF-8
    let result = handle_call(
        &client,
        "put_object",
        json!({ "bucket": "test-bucket", "key": "note.txt", "content": "héllo 🚀" }),
    )
    .await;
    assert!(!result.is_error());
    assert_eq!(
        "✅ Uploaded 7 bytes to s3://test-bucket/note.txt",
        result.text()
    );
}

#[tokio::test]
async fn test_presign_url_text() {
    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};

    // Signing happens locally, so a real client with static test credentials
    // produces a URL without any network traffic.
    let sdk_config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .credentials_provider(Credentials::for_tests())
        .region(Region::new("us-east-1"))
        .build();
    let client = test_client(aws_sdk_s3::Client::from_conf(sdk_config));

    let result = handle_call(
        &client,
        "presign_url",
        json!({ "bucket": "test-bucket", "key": "report.txt", "expiresIn": 7200 }),
    )
    .await;
    assert!(!result.is_error(), "{}", result.text());
    assert!(
        result
            .text()
            .starts_with("Presigned URL for s3://test-bucket/report.txt (valid ~2h):\n\n"),
        "{}",
        result.text()
    );
    assert!(result.text().contains("X-Amz-Expires=7200"), "{}", result.text());
}

#[tokio::test]
async fn test_delete_object_text() {
    let delete_rule = mock!(aws_sdk_s3::Client::delete_object).then_output(|| {
        aws_sdk_s3::operation::delete_object::DeleteObjectOutput::builder().build()
    });

    let rules: Vec<Rule> = vec![delete_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    let result = handle_call(
        &client,
        "delete_object",
        json!({ "bucket": "test-bucket", "key": "old.txt" }),
    )
    .await;
    assert!(!result.is_error());
    assert_eq!("✅ Deleted s3://test-bucket/old.txt", result.text());
}

#[tokio::test]
async fn test_bucket_info_text() {
    let head_rule =
        mock!(aws_sdk_s3::Client::head_bucket).then_output(|| HeadBucketOutput::builder().build());

    let rules: Vec<Rule> = vec![head_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let config = aws_s3_mcp_server::Config::builder()
        .client(s3_client)
        .region("us-west-2")
        .build();
    let client = aws_s3_mcp_server::Client::new(config);

    let result = handle_call(&client, "bucket_info", json!({ "bucket": "data" })).await;
    assert!(!result.is_error());
    assert_eq!("Bucket: data\n✅ Exists\nRegion: us-west-2", result.text());
}

#[tokio::test]
async fn test_bucket_info_failure_text() {
    let head_rule = mock!(aws_sdk_s3::Client::head_bucket).then_http_response(|| {
        HttpResponse::new(StatusCode::try_from(403).unwrap(), Bytes::new().into())
    });

    let rules: Vec<Rule> = vec![head_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    let result = handle_call(&client, "bucket_info", json!({ "bucket": "data" })).await;
    assert!(!result.is_error());
    assert_eq!("Bucket: data\n❌ Not found / no access", result.text());
}

/// Every adapter failure becomes the uniform error envelope; nothing is ever
/// thrown past the tool boundary.
#[tokio::test]
async fn test_provider_failure_becomes_error_envelope() {
    let get_rule = mock!(aws_sdk_s3::Client::get_object).then_http_response(|| {
        HttpResponse::new(StatusCode::try_from(500).unwrap(), Bytes::new().into())
    });

    let rules: Vec<Rule> = vec![get_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    let result = handle_call(
        &client,
        "get_object",
        json!({ "bucket": "test-bucket", "key": "flaky.txt" }),
    )
    .await;
    assert!(result.is_error());
    assert!(result.text().starts_with("Error: "), "{}", result.text());
}

#[tokio::test]
async fn test_missing_body_message_names_the_body() {
    let get_rule =
        mock!(aws_sdk_s3::Client::get_object).then_output(|| GetObjectOutput::builder().build());

    let rules: Vec<Rule> = vec![get_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    let result = handle_call(
        &client,
        "get_object",
        json!({ "bucket": "test-bucket", "key": "ghost.txt" }),
    )
    .await;
    assert!(result.is_error());
    assert!(result.text().contains("body"), "{}", result.text());
}

#[tokio::test]
async fn test_unknown_tool_is_an_error_envelope() {
    let client = empty_client();

    let result = handle_call(&client, "explode", json!({})).await;
    assert!(result.is_error());
    assert!(result.text().contains("unknown tool"), "{}", result.text());
}

/// Argument validation failures block the adapter call; the mock client has
/// no rules, so reaching the provider would fail the test.
#[tokio::test]
async fn test_invalid_arguments_block_the_adapter_call() {
    let client = empty_client();

    // missing required bucket
    let result = handle_call(&client, "get_object", json!({ "key": "a.txt" })).await;
    assert!(result.is_error());

    // maxKeys out of declared bounds
    let result = handle_call(
        &client,
        "list_objects",
        json!({ "bucket": "test-bucket", "maxKeys": 2000 }),
    )
    .await;
    assert!(result.is_error());
    assert!(result.text().contains("maxKeys"), "{}", result.text());
}
