/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{GetObjectInputBuilder, GetObjectOutput};

/// Fluent builder for constructing a single object read
#[derive(Debug)]
pub struct GetObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: GetObjectInputBuilder,
}

impl GetObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Send the object read request
    pub async fn send(self) -> Result<GetObjectOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::get_object::GetObject::orchestrate(self.handle, input).await
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
}
