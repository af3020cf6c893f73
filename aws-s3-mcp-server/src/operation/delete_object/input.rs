/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for deleting an object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DeleteObjectInput {
    /// The bucket containing the object
    pub bucket: String,

    /// The key locating the object within the bucket
    pub key: String,
}

impl DeleteObjectInput {
    /// Creates a new builder-style object to manufacture [`DeleteObjectInput`]
    pub fn builder() -> DeleteObjectInputBuilder {
        DeleteObjectInputBuilder::default()
    }

    /// The bucket containing the object
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key locating the object within the bucket
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A builder for [`DeleteObjectInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct DeleteObjectInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
}

impl DeleteObjectInputBuilder {
    /// Set the bucket containing the object.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket containing the object
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the key locating the object.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Set the key locating the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// The key locating the object
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Consumes the builder and constructs a [`DeleteObjectInput`]
    pub fn build(self) -> Result<DeleteObjectInput, BuildError> {
        Ok(DeleteObjectInput {
            bucket: self
                .bucket
                .ok_or_else(|| BuildError::missing_field("bucket", "a bucket name is required"))?,
            key: self
                .key
                .ok_or_else(|| BuildError::missing_field("key", "an object key is required"))?,
        })
    }
}
