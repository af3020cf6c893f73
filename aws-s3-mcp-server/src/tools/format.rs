/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Text renderings of operation results.
//!
//! These strings are the wire contract consumed by assistant callers; the
//! exact shapes (headers, bullets, emoji markers, omitted clauses) must stay
//! stable.

use std::fmt::Write;

use aws_smithy_types::date_time::Format;
use aws_smithy_types::DateTime;

use crate::types::{BucketStatus, BucketSummary, ObjectEntry};

fn timestamp(value: &DateTime) -> Option<String> {
    value.fmt(Format::DateTime).ok()
}

pub(super) fn bucket_list(buckets: &[BucketSummary]) -> String {
    if buckets.is_empty() {
        return "No buckets found.".to_owned();
    }

    let mut text = format!("Buckets ({}):", buckets.len());
    for bucket in buckets {
        match bucket.creation_date().and_then(timestamp) {
            Some(created) => write!(text, "\n  • {} (created: {created})", bucket.name())
                .expect("write to string"),
            None => write!(text, "\n  • {}", bucket.name()).expect("write to string"),
        }
    }
    text
}

pub(super) fn object_list(
    bucket: &str,
    prefix: &str,
    max_keys: i32,
    entries: &[ObjectEntry],
) -> String {
    if entries.is_empty() {
        return "No objects found.".to_owned();
    }

    let mut text = format!("Objects in s3://{bucket}/{prefix} (max {max_keys}):");
    for entry in entries {
        if entry.is_prefix() {
            write!(text, "\n  📁 {}", entry.key()).expect("write to string");
        } else {
            write!(text, "\n  📄 {}", entry.key()).expect("write to string");
            if let Some(size) = entry.size() {
                write!(text, " ({size} B)").expect("write to string");
            }
            if let Some(modified) = entry.last_modified().and_then(timestamp) {
                write!(text, " — {modified}").expect("write to string");
            }
        }
    }
    text
}

pub(super) fn object_content(bucket: &str, key: &str, content: &str) -> String {
    format!("Content of s3://{bucket}/{key}:\n\n{content}")
}

pub(super) fn upload_receipt(bucket: &str, key: &str, length: usize) -> String {
    format!("✅ Uploaded {length} bytes to s3://{bucket}/{key}")
}

pub(super) fn delete_receipt(bucket: &str, key: &str) -> String {
    format!("✅ Deleted s3://{bucket}/{key}")
}

pub(super) fn presigned_url(bucket: &str, key: &str, expires_in: u64, url: &str) -> String {
    // expiry reported rounded to the nearest whole hour
    let hours = (expires_in + 1800) / 3600;
    format!("Presigned URL for s3://{bucket}/{key} (valid ~{hours}h):\n\n{url}")
}

pub(super) fn bucket_status(status: &BucketStatus) -> String {
    let mut text = format!("Bucket: {}", status.name());
    if status.exists() {
        text.push_str("\n✅ Exists");
        if let Some(region) = status.region() {
            write!(text, "\nRegion: {region}").expect("write to string");
        }
    } else {
        text.push_str("\n❌ Not found / no access");
    }
    text
}
