/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_mcp_server::error::ErrorKind;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::types::{CommonPrefix, Object};
use aws_smithy_mocks_experimental::{mock, mock_client, Rule, RuleMode};
use aws_smithy_types::DateTime;

fn test_client(s3_client: aws_sdk_s3::Client) -> aws_s3_mcp_server::Client {
    let config = aws_s3_mcp_server::Config::builder()
        .client(s3_client)
        .build();
    aws_s3_mcp_server::Client::new(config)
}

/// Common prefixes come back first, then leaf objects, in provider order.
#[tokio::test]
async fn test_prefixes_ordered_before_leaves() {
    let last_modified = DateTime::from_secs(1_704_067_200); // 2024-01-01T00:00:00Z
    let list_rule = mock!(aws_sdk_s3::Client::list_objects_v2).then_output(move || {
        ListObjectsV2Output::builder()
            .contents(
                Object::builder()
                    .key("file1.txt")
                    .size(100)
                    .last_modified(last_modified)
                    .build(),
            )
            .contents(Object::builder().key("file2.txt").size(200).build())
            .common_prefixes(CommonPrefix::builder().prefix("uploads/").build())
            .build()
    });

    let rules: Vec<Rule> = vec![list_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    let output = client
        .list_objects()
        .bucket("test-bucket")
        .send()
        .await
        .unwrap();

    let entries = output.entries();
    assert_eq!(3, entries.len());
    assert_eq!("uploads/", entries[0].key());
    assert!(entries[0].is_prefix());
    assert_eq!(None, entries[0].size());
    assert_eq!("file1.txt", entries[1].key());
    assert_eq!(Some(100), entries[1].size());
    assert_eq!("file2.txt", entries[2].key());
    assert_eq!(Some(200), entries[2].size());
    assert!(entries[2].last_modified().is_none());
}

/// When the caller does not set maxKeys the provider request carries the
/// default of 100, with the "/" grouping delimiter.
#[tokio::test]
async fn test_default_max_keys_and_delimiter_sent_to_provider() {
    let list_rule = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.max_keys() == Some(100) && r.delimiter() == Some("/"))
        .then_output(|| ListObjectsV2Output::builder().build());

    let rules: Vec<Rule> = vec![list_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    let output = client
        .list_objects()
        .bucket("test-bucket")
        .send()
        .await
        .unwrap();

    assert!(output.entries().is_empty());
}

/// The prefix is forwarded to the provider verbatim.
#[tokio::test]
async fn test_prefix_forwarded_to_provider() {
    let list_rule = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.prefix() == Some("photos/2024/"))
        .then_output(|| ListObjectsV2Output::builder().build());

    let rules: Vec<Rule> = vec![list_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    client
        .list_objects()
        .bucket("test-bucket")
        .prefix("photos/2024/")
        .send()
        .await
        .unwrap();
}

/// Even when the provider over-returns, the caller never sees more entries
/// than the requested maxKeys.
#[tokio::test]
async fn test_entries_truncated_to_max_keys() {
    let list_rule = mock!(aws_sdk_s3::Client::list_objects_v2).then_output(|| {
        ListObjectsV2Output::builder()
            .common_prefixes(CommonPrefix::builder().prefix("uploads/").build())
            .contents(Object::builder().key("a.txt").size(1).build())
            .contents(Object::builder().key("b.txt").size(2).build())
            .contents(Object::builder().key("c.txt").size(3).build())
            .build()
    });

    let rules: Vec<Rule> = vec![list_rule];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    let output = client
        .list_objects()
        .bucket("test-bucket")
        .max_keys(2)
        .send()
        .await
        .unwrap();

    let entries = output.entries();
    assert_eq!(2, entries.len());
    // prefixes still come first within the truncated window
    assert_eq!("uploads/", entries[0].key());
    assert!(entries[0].is_prefix());
    assert_eq!("a.txt", entries[1].key());
}

/// An out-of-range maxKeys never reaches the provider.
#[tokio::test]
async fn test_max_keys_bounds_block_the_provider_call() {
    let rules: Vec<Rule> = vec![];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    for max_keys in [0, -5, 1001] {
        let err = client
            .list_objects()
            .bucket("test-bucket")
            .max_keys(max_keys)
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }
}

/// A missing bucket is a build-time input error, not a provider failure.
#[tokio::test]
async fn test_missing_bucket_is_invalid_input() {
    let rules: Vec<Rule> = vec![];
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, rules.as_slice());
    let client = test_client(s3_client);

    let err = client.list_objects().send().await.unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}
