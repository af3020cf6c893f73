/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Content type used when the caller does not supply one.
const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Input type for writing an object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct PutObjectInput {
    /// The bucket to write into
    pub bucket: String,

    /// The key to write the object under
    pub key: String,

    /// The text content; UTF-8 encoded before transfer
    pub content: String,

    /// The content type recorded on the object
    pub content_type: String,
}

impl PutObjectInput {
    /// Creates a new builder-style object to manufacture [`PutObjectInput`]
    pub fn builder() -> PutObjectInputBuilder {
        PutObjectInputBuilder::default()
    }

    /// The bucket to write into
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key to write the object under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The text content; UTF-8 encoded before transfer
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The content type recorded on the object
    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}

/// A builder for [`PutObjectInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct PutObjectInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) content: Option<String>,
    pub(crate) content_type: Option<String>,
}

impl PutObjectInputBuilder {
    /// Set the bucket to write into.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket to write into.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to write into
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the key to write the object under.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Set the key to write the object under.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// The key to write the object under
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Set the text content to write.
    ///
    /// NOTE: Content is required.
    pub fn content(mut self, input: impl Into<String>) -> Self {
        self.content = Some(input.into());
        self
    }

    /// Set the text content to write.
    pub fn set_content(mut self, input: Option<String>) -> Self {
        self.content = input;
        self
    }

    /// The text content to write
    pub fn get_content(&self) -> &Option<String> {
        &self.content
    }

    /// Set the content type recorded on the object. Defaults to `text/plain`.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.content_type = Some(input.into());
        self
    }

    /// Set the content type recorded on the object. Defaults to `text/plain`.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.content_type = input;
        self
    }

    /// The configured content type, if any
    pub fn get_content_type(&self) -> &Option<String> {
        &self.content_type
    }

    /// Consumes the builder and constructs a [`PutObjectInput`]
    pub fn build(self) -> Result<PutObjectInput, BuildError> {
        Ok(PutObjectInput {
            bucket: self
                .bucket
                .ok_or_else(|| BuildError::missing_field("bucket", "a bucket name is required"))?,
            key: self
                .key
                .ok_or_else(|| BuildError::missing_field("key", "an object key is required"))?,
            content: self
                .content
                .ok_or_else(|| BuildError::missing_field("content", "content is required"))?,
            content_type: self
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_owned()),
        })
    }
}
