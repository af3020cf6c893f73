/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::head_bucket::HeadBucketOutput;
use aws_smithy_mocks_experimental::{mock, mock_client, Rule, RuleMode};
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::http::StatusCode;
use bytes::Bytes;

fn test_client(s3_client: aws_sdk_s3::Client, region: &str) -> aws_s3_mcp_server::Client {
    let config = aws_s3_mcp_server::Config::builder()
        .client(s3_client)
        .region(region)
        .build();
    aws_s3_mcp_server::Client::new(config)
}

/// A successful probe reports the configured region.
#[tokio::test]
async fn test_probe_success_reports_configured_region() {
    let head_rule =
        mock!(aws_sdk_s3::Client::head_bucket).then_output(|| HeadBucketOutput::builder().build());

    let rules: Vec<Rule> = vec![head_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client, "eu-central-1");

    let status = client
        .bucket_info()
        .bucket("test-bucket")
        .send()
        .await
        .unwrap();

    assert_eq!("test-bucket", status.name());
    assert!(status.exists());
    assert_eq!(Some("eu-central-1"), status.region());
}

/// Any probe failure, authorization failures included, collapses to a
/// non-existence result with no region. The operation itself still succeeds.
#[tokio::test]
async fn test_probe_failure_collapses_to_not_found() {
    for http_status in [403u16, 404, 500] {
        let head_rule = mock!(aws_sdk_s3::Client::head_bucket).then_http_response(move || {
            HttpResponse::new(
                StatusCode::try_from(http_status).unwrap(),
                Bytes::new().into(),
            )
        });

        let rules: Vec<Rule> = vec![head_rule];
        let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
        let client = test_client(s3_client, "eu-central-1");

        let status = client
            .bucket_info()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap();

        assert!(!status.exists(), "status {http_status} must collapse");
        assert_eq!(None, status.region());
    }
}
