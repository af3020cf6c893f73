/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Amazon S3 object-storage operations exposed as MCP tools.
//!
//! The crate has two halves. The `operation` modules wrap individual Amazon S3
//! [service API] calls (bucket listing, delimited object listing, reads, writes,
//! deletes, presigned URL generation, and bucket existence probes) behind fluent
//! builders on [`Client`]. The [`tools`] module declares one schema-described
//! tool per operation and converts operation results, and failures, into the
//! uniform `ToolResult { text, is_error }` envelope an MCP transport returns to
//! the calling assistant.
//!
//! The transport itself (stdio JSON-RPC or otherwise) is not part of this crate;
//! embedders route each incoming tool invocation through
//! [`tools::handle_call`].
//!
//! [service API]: https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations_Amazon_Simple_Storage_Service.html
//!
//! # Examples
//!
//! Load the default configuration and invoke a tool:
//!
//! ```no_run
//! # async fn example() {
//! use serde_json::json;
//!
//! let config = aws_s3_mcp_server::from_env().load().await;
//! let client = aws_s3_mcp_server::Client::new(config);
//!
//! let result = aws_s3_mcp_server::tools::handle_call(
//!     &client,
//!     "list_objects",
//!     json!({ "bucket": "my-bucket", "prefix": "uploads/" }),
//! )
//! .await;
//!
//! println!("{}", result.text());
//! # }
//! ```

/// Region used when `AWS_REGION` is not set in the environment.
pub(crate) const DEFAULT_REGION: &str = "us-east-1";

/// Default number of entries returned by a single object listing.
pub(crate) const DEFAULT_MAX_KEYS: i32 = 100;

/// Upper bound on the number of entries a single object listing may return.
pub(crate) const MAX_KEYS_LIMIT: i32 = 1000;

/// Default presigned URL validity in seconds (one hour).
pub(crate) const DEFAULT_EXPIRES_IN_SECS: u64 = 3600;

/// Minimum presigned URL validity in seconds.
pub(crate) const MIN_EXPIRES_IN_SECS: u64 = 60;

/// Maximum presigned URL validity in seconds (seven days).
pub(crate) const MAX_EXPIRES_IN_SECS: u64 = 604_800;

/// Error types emitted by `aws-s3-mcp-server`
pub mod error;

/// Common types used by `aws-s3-mcp-server`
pub mod types;

/// Storage adapter client
pub mod client;

/// Storage adapter operations
pub mod operation;

/// Tool front end: schemas, dispatch, and result formatting
pub mod tools;

/// Client configuration
pub mod config;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
