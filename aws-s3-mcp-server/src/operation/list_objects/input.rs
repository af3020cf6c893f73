/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::DEFAULT_MAX_KEYS;

/// Input type for listing objects under a prefix
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct ListObjectsInput {
    /// The bucket to list
    pub bucket: String,

    /// Limit the response to keys that begin with the given prefix
    pub prefix: Option<String>,

    /// Upper bound on the number of entries returned (prefixes plus leaves)
    pub max_keys: i32,
}

impl ListObjectsInput {
    /// Creates a new builder-style object to manufacture [`ListObjectsInput`]
    pub fn builder() -> ListObjectsInputBuilder {
        ListObjectsInputBuilder::default()
    }

    /// The bucket to list
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Upper bound on the number of entries returned (prefixes plus leaves)
    pub fn max_keys(&self) -> i32 {
        self.max_keys
    }
}

/// A builder for [`ListObjectsInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct ListObjectsInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) prefix: Option<String>,
    pub(crate) max_keys: Option<i32>,
}

impl ListObjectsInputBuilder {
    /// Set the bucket to list.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket to list.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to list
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.prefix = Some(input.into());
        self
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.prefix = input;
        self
    }

    /// The prefix to limit the response to
    pub fn get_prefix(&self) -> &Option<String> {
        &self.prefix
    }

    /// Upper bound on the number of entries returned. Defaults to 100.
    pub fn max_keys(mut self, input: i32) -> Self {
        self.max_keys = Some(input);
        self
    }

    /// Upper bound on the number of entries returned. Defaults to 100.
    pub fn set_max_keys(mut self, input: Option<i32>) -> Self {
        self.max_keys = input;
        self
    }

    /// The configured entry bound, if any
    pub fn get_max_keys(&self) -> &Option<i32> {
        &self.max_keys
    }

    /// Consumes the builder and constructs a [`ListObjectsInput`]
    pub fn build(self) -> Result<ListObjectsInput, BuildError> {
        Ok(ListObjectsInput {
            bucket: self
                .bucket
                .ok_or_else(|| BuildError::missing_field("bucket", "a bucket name is required"))?,
            prefix: self.prefix,
            max_keys: self.max_keys.unwrap_or(DEFAULT_MAX_KEYS),
        })
    }
}
