/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::DEFAULT_EXPIRES_IN_SECS;

/// Input type for generating a presigned URL
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct PresignUrlInput {
    /// The bucket containing the object
    pub bucket: String,

    /// The key locating the object within the bucket
    pub key: String,

    /// How long the URL stays valid, in seconds
    pub expires_in: u64,
}

impl PresignUrlInput {
    /// Creates a new builder-style object to manufacture [`PresignUrlInput`]
    pub fn builder() -> PresignUrlInputBuilder {
        PresignUrlInputBuilder::default()
    }

    /// The bucket containing the object
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key locating the object within the bucket
    pub fn key(&self) -> &str {
        &self.key
    }

    /// How long the URL stays valid, in seconds
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }
}

/// A builder for [`PresignUrlInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct PresignUrlInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) expires_in: Option<u64>,
}

impl PresignUrlInputBuilder {
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

    /// Set how long the URL stays valid, in seconds. Defaults to 3600 (one hour).
    pub fn expires_in(mut self, input: u64) -> Self {
        self.expires_in = Some(input);
        self
    }

    /// Set how long the URL stays valid, in seconds. Defaults to 3600 (one hour).
    pub fn set_expires_in(mut self, input: Option<u64>) -> Self {
        self.expires_in = input;
        self
    }

    /// The configured validity, if any
    pub fn get_expires_in(&self) -> &Option<u64> {
        &self.expires_in
    }

    /// Consumes the builder and constructs a [`PresignUrlInput`]
    pub fn build(self) -> Result<PresignUrlInput, BuildError> {
        Ok(PresignUrlInput {
            bucket: self
                .bucket
                .ok_or_else(|| BuildError::missing_field("bucket", "a bucket name is required"))?,
            key: self
                .key
                .ok_or_else(|| BuildError::missing_field("key", "an object key is required"))?,
            expires_in: self.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_defaults_to_one_hour() {
        let input = PresignUrlInput::builder()
            .bucket("b")
            .key("k")
            .build()
            .unwrap();
        assert_eq!(3600, input.expires_in());
    }
}
