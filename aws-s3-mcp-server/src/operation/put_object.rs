/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for writing an object
pub use input::{PutObjectInput, PutObjectInputBuilder};
mod output;
/// Output type for writing an object
pub use output::PutObjectOutput;

use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;

use crate::error::Error;

/// Operation struct for writing a single object from text content
#[derive(Clone, Default, Debug)]
pub(crate) struct PutObject;

impl PutObject {
    /// Execute a single `PutObject` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: PutObjectInput,
    ) -> Result<PutObjectOutput, Error> {
        tracing::debug!(
            bucket = input.bucket(),
            key = input.key(),
            content_type = input.content_type(),
            "writing object"
        );

        let PutObjectInput {
            bucket,
            key,
            content,
            content_type,
            ..
        } = input;

        let resp = handle
            .config
            .client()
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(content.into_bytes()))
            .send()
            .await?;

        Ok(PutObjectOutput {
            e_tag: resp.e_tag().map(str::to_owned),
        })
    }
}
