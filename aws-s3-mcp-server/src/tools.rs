/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Tool front end.
//!
//! One schema-described tool per storage operation. [`handle_call`] is the
//! single catch-all boundary: it validates arguments, invokes the operation,
//! formats the result as human-readable text, and converts every failure into
//! the uniform [`ToolResult`] envelope. A tool invocation never propagates a
//! failure past this boundary and never affects subsequent invocations.

mod format;

mod schema;
pub use schema::{tool_specs, ToolSpec};

use aws_smithy_types::error::display::DisplayErrorContext;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{self, Error};
use crate::Client;

/// Uniform result envelope returned for every tool invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    text: String,
    is_error: bool,
}

impl ToolResult {
    fn ok(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    fn error(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }

    /// The human-readable result text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the invocation failed
    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

/// Dispatch a tool invocation by name.
///
/// Returns a [`ToolResult`] for every input: unknown tool names, argument
/// validation failures, and operation failures all yield `is_error == true`
/// with an `Error: `-prefixed message carrying the full cause chain.
pub async fn handle_call(client: &Client, name: &str, args: Value) -> ToolResult {
    let result = match name {
        "list_buckets" => list_buckets(client).await,
        "list_objects" => list_objects(client, args).await,
        "get_object" => get_object(client, args).await,
        "put_object" => put_object(client, args).await,
        "delete_object" => delete_object(client, args).await,
        "presign_url" => presign_url(client, args).await,
        "bucket_info" => bucket_info(client, args).await,
        _ => Err(error::invalid_input(format!("unknown tool: {name}"))),
    };

    match result {
        Ok(text) => ToolResult::ok(text),
        Err(err) => ToolResult::error(format!("Error: {}", DisplayErrorContext(&err))),
    }
}

fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, Error> {
    serde_json::from_value(args).map_err(error::invalid_input)
}

async fn list_buckets(client: &Client) -> Result<String, Error> {
    let output = client.list_buckets().send().await?;
    Ok(format::bucket_list(output.buckets()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListObjectsArgs {
    bucket: String,
    #[serde(default)]
    prefix: Option<String>,
    #[serde(default)]
    max_keys: Option<i32>,
}

async fn list_objects(client: &Client, args: Value) -> Result<String, Error> {
    let args: ListObjectsArgs = parse_args(args)?;
    let output = client
        .list_objects()
        .bucket(&args.bucket)
        .set_prefix(args.prefix.clone())
        .set_max_keys(args.max_keys)
        .send()
        .await?;
    Ok(format::object_list(
        &args.bucket,
        args.prefix.as_deref().unwrap_or(""),
        args.max_keys.unwrap_or(crate::DEFAULT_MAX_KEYS),
        output.entries(),
    ))
}

#[derive(Debug, Deserialize)]
struct ObjectArgs {
    bucket: String,
    key: String,
}

async fn get_object(client: &Client, args: Value) -> Result<String, Error> {
    let args: ObjectArgs = parse_args(args)?;
    let output = client
        .get_object()
        .bucket(&args.bucket)
        .key(&args.key)
        .send()
        .await?;
    Ok(format::object_content(
        &args.bucket,
        &args.key,
        output.content(),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PutObjectArgs {
    bucket: String,
    key: String,
    content: String,
    #[serde(default)]
    content_type: Option<String>,
}

async fn put_object(client: &Client, args: Value) -> Result<String, Error> {
    let args: PutObjectArgs = parse_args(args)?;
    // The receipt reports the length of the input text, not the encoded byte
    // count; the wording is part of the stable wire text.
    let reported_len = args.content.chars().count();
    client
        .put_object()
        .bucket(&args.bucket)
        .key(&args.key)
        .content(args.content)
        .set_content_type(args.content_type)
        .send()
        .await?;
    Ok(format::upload_receipt(&args.bucket, &args.key, reported_len))
}

async fn delete_object(client: &Client, args: Value) -> Result<String, Error> {
    let args: ObjectArgs = parse_args(args)?;
    client
        .delete_object()
        .bucket(&args.bucket)
        .key(&args.key)
        .send()
        .await?;
    Ok(format::delete_receipt(&args.bucket, &args.key))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PresignUrlArgs {
    bucket: String,
    key: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

async fn presign_url(client: &Client, args: Value) -> Result<String, Error> {
    let args: PresignUrlArgs = parse_args(args)?;
    let output = client
        .presign_url()
        .bucket(&args.bucket)
        .key(&args.key)
        .set_expires_in(args.expires_in)
        .send()
        .await?;
    Ok(format::presigned_url(
        &args.bucket,
        &args.key,
        output.expires_in(),
        output.url(),
    ))
}

#[derive(Debug, Deserialize)]
struct BucketInfoArgs {
    bucket: String,
}

async fn bucket_info(client: &Client, args: Value) -> Result<String, Error> {
    let args: BucketInfoArgs = parse_args(args)?;
    let status = client.bucket_info().bucket(&args.bucket).send().await?;
    Ok(format::bucket_status(&status))
}
