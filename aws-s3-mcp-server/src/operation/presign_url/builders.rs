/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{PresignUrlInputBuilder, PresignUrlOutput};

/// Fluent builder for constructing a presigned URL
#[derive(Debug)]
pub struct PresignUrlFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: PresignUrlInputBuilder,
}

impl PresignUrlFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Sign and return the URL
    pub async fn send(self) -> Result<PresignUrlOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::presign_url::PresignUrl::orchestrate(self.handle, input).await
    }

    /// Set the bucket containing the object.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket containing the object
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set the key locating the object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Set the key locating the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// The key locating the object
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// Set how long the URL stays valid, in seconds. Defaults to 3600,
    /// bounded to 60..=604800.
    pub fn expires_in(mut self, input: u64) -> Self {
        self.inner = self.inner.expires_in(input);
        self
    }

    /// Set how long the URL stays valid, in seconds.
    pub fn set_expires_in(mut self, input: Option<u64>) -> Self {
        self.inner = self.inner.set_expires_in(input);
        self
    }

    /// The configured validity, if any
    pub fn get_expires_in(&self) -> &Option<u64> {
        self.inner.get_expires_in()
    }
}
