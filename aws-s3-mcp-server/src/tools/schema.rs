/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    DEFAULT_EXPIRES_IN_SECS, DEFAULT_MAX_KEYS, MAX_EXPIRES_IN_SECS, MAX_KEYS_LIMIT,
    MIN_EXPIRES_IN_SECS,
};

/// Declaration of a single callable tool: a stable name, a human-readable
/// description, and a JSON schema for its arguments.
#[derive(Clone, Debug, Serialize)]
pub struct ToolSpec {
    /// The stable tool name
    pub name: &'static str,
    /// Human-readable description shown to the calling assistant
    pub description: &'static str,
    /// JSON schema describing the recognized arguments
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// The full set of tools this server exposes, one per storage operation.
pub fn tool_specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "list_buckets",
            description: "List all S3 buckets visible to the configured credentials",
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        ToolSpec {
            name: "list_objects",
            description: "List objects in an S3 bucket, grouping keys on the '/' delimiter. \
                          Returns at most maxKeys entries; narrow the prefix to see more.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "bucket": {
                        "type": "string",
                        "description": "Bucket name"
                    },
                    "prefix": {
                        "type": "string",
                        "description": "Only list keys beginning with this prefix"
                    },
                    "maxKeys": {
                        "type": "integer",
                        "description": "Maximum number of entries to return",
                        "minimum": 1,
                        "maximum": MAX_KEYS_LIMIT,
                        "default": DEFAULT_MAX_KEYS
                    }
                },
                "required": ["bucket"]
            }),
        },
        ToolSpec {
            name: "get_object",
            description: "Read an entire S3 object as UTF-8 text",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "bucket": {
                        "type": "string",
                        "description": "Bucket name"
                    },
                    "key": {
                        "type": "string",
                        "description": "Object key"
                    }
                },
                "required": ["bucket", "key"]
            }),
        },
        ToolSpec {
            name: "put_object",
            description: "Write text content to an S3 object",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "bucket": {
                        "type": "string",
                        "description": "Bucket name"
                    },
                    "key": {
                        "type": "string",
                        "description": "Object key"
                    },
                    "content": {
                        "type": "string",
                        "description": "Text content to write"
                    },
                    "contentType": {
                        "type": "string",
                        "description": "Content type recorded on the object",
                        "default": "text/plain"
                    }
                },
                "required": ["bucket", "key", "content"]
            }),
        },
        ToolSpec {
            name: "delete_object",
            description: "Delete an S3 object. Deleting a key that does not exist is not an error.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "bucket": {
                        "type": "string",
                        "description": "Bucket name"
                    },
                    "key": {
                        "type": "string",
                        "description": "Object key"
                    }
                },
                "required": ["bucket", "key"]
            }),
        },
        ToolSpec {
            name: "presign_url",
            description: "Generate a time-limited presigned URL granting access to an S3 object",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "bucket": {
                        "type": "string",
                        "description": "Bucket name"
                    },
                    "key": {
                        "type": "string",
                        "description": "Object key"
                    },
                    "expiresIn": {
                        "type": "integer",
                        "description": "URL validity in seconds",
                        "minimum": MIN_EXPIRES_IN_SECS,
                        "maximum": MAX_EXPIRES_IN_SECS,
                        "default": DEFAULT_EXPIRES_IN_SECS
                    }
                },
                "required": ["bucket", "key"]
            }),
        },
        ToolSpec {
            name: "bucket_info",
            description: "Check whether an S3 bucket exists and is reachable",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "bucket": {
                        "type": "string",
                        "description": "Bucket name"
                    }
                },
                "required": ["bucket"]
            }),
        },
    ]
}
