/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for probing a bucket
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct BucketInfoInput {
    /// The bucket to probe
    pub bucket: String,
}

impl BucketInfoInput {
    /// Creates a new builder-style object to manufacture [`BucketInfoInput`]
    pub fn builder() -> BucketInfoInputBuilder {
        BucketInfoInputBuilder::default()
    }

    /// The bucket to probe
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

/// A builder for [`BucketInfoInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct BucketInfoInputBuilder {
    pub(crate) bucket: Option<String>,
}

impl BucketInfoInputBuilder {
    /// Set the bucket to probe.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket to probe.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to probe
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Consumes the builder and constructs a [`BucketInfoInput`]
    pub fn build(self) -> Result<BucketInfoInput, BuildError> {
        Ok(BucketInfoInput {
            bucket: self
                .bucket
                .ok_or_else(|| BuildError::missing_field("bucket", "a bucket name is required"))?,
        })
    }
}
