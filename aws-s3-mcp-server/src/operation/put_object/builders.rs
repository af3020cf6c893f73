/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{PutObjectInputBuilder, PutObjectOutput};

/// Fluent builder for constructing a single object write
#[derive(Debug)]
pub struct PutObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: PutObjectInputBuilder,
}

impl PutObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Send the object write request
    pub async fn send(self) -> Result<PutObjectOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::put_object::PutObject::orchestrate(self.handle, input).await
    }

    /// Set the bucket to write into.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket to write into.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to write into
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set the key to write the object under.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Set the key to write the object under.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// The key to write the object under
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// Set the text content to write.
    pub fn content(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.content(input);
        self
    }

    /// Set the text content to write.
    pub fn set_content(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_content(input);
        self
    }

    /// The text content to write
    pub fn get_content(&self) -> &Option<String> {
        self.inner.get_content()
    }

    /// Set the content type recorded on the object. Defaults to `text/plain`.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.content_type(input);
        self
    }

    /// Set the content type recorded on the object.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_content_type(input);
        self
    }

    /// The configured content type, if any
    pub fn get_content_type(&self) -> &Option<String> {
        self.inner.get_content_type()
    }
}
