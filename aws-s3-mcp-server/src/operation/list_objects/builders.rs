/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{ListObjectsInputBuilder, ListObjectsOutput};

/// Fluent builder for constructing a delimited object listing
#[derive(Debug)]
pub struct ListObjectsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListObjectsInputBuilder,
}

impl ListObjectsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Send the object listing request
    pub async fn send(self) -> Result<ListObjectsOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::list_objects::ListObjects::orchestrate(self.handle, input).await
    }

    /// Set the bucket to list.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket to list.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to list
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.prefix(input);
        self
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_prefix(input);
        self
    }

    /// The prefix to limit the response to
    pub fn get_prefix(&self) -> &Option<String> {
        self.inner.get_prefix()
    }

    /// Upper bound on the number of entries returned. Defaults to 100,
    /// bounded to 1..=1000.
    pub fn max_keys(mut self, input: i32) -> Self {
        self.inner = self.inner.max_keys(input);
        self
    }

    /// Upper bound on the number of entries returned.
    pub fn set_max_keys(mut self, input: Option<i32>) -> Self {
        self.inner = self.inner.set_max_keys(input);
        self
    }

    /// The configured entry bound, if any
    pub fn get_max_keys(&self) -> &Option<i32> {
        self.inner.get_max_keys()
    }
}
