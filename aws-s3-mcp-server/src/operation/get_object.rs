/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for reading an object
pub use input::{GetObjectInput, GetObjectInputBuilder};
mod output;
/// Output type for reading an object
pub use output::GetObjectOutput;

use std::sync::Arc;

use crate::error::{self, Error};

/// Operation struct for reading a single object as text
#[derive(Clone, Default, Debug)]
pub(crate) struct GetObject;

impl GetObject {
    /// Execute a single `GetObject` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: GetObjectInput,
    ) -> Result<GetObjectOutput, Error> {
        tracing::debug!(bucket = input.bucket(), key = input.key(), "reading object");

        let resp = handle
            .config
            .client()
            .get_object()
            .bucket(input.bucket())
            .key(input.key())
            .send()
            .await?;

        // The entire object is materialized in memory; there is no streaming
        // contract at this boundary.
        let content_length = resp.content_length();
        let data = resp.body.collect().await.map_err(error::provider)?.into_bytes();

        if data.is_empty() && content_length.is_none() {
            return Err(error::missing_body(input.bucket(), input.key()));
        }

        // Contract is text transfer only: the decode always proceeds and may
        // produce replacement characters for non-UTF-8 payloads.
        let content = String::from_utf8_lossy(&data).into_owned();
        Ok(GetObjectOutput { content })
    }
}
