/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::types::BucketStatus;

use super::BucketInfoInputBuilder;

/// Fluent builder for constructing a bucket existence probe
#[derive(Debug)]
pub struct BucketInfoFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: BucketInfoInputBuilder,
}

impl BucketInfoFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Send the bucket probe.
    ///
    /// Probe failures are not errors; they produce a [`BucketStatus`] with
    /// `exists == false`.
    pub async fn send(self) -> Result<BucketStatus, Error> {
        let input = self.inner.build()?;
        crate::operation::bucket_info::BucketInfo::orchestrate(self.handle, input).await
    }

    /// Set the bucket to probe.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket to probe.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to probe
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }
}
