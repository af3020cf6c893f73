/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for generating a presigned URL
pub use input::{PresignUrlInput, PresignUrlInputBuilder};
mod output;
/// Output type for generating a presigned URL
pub use output::PresignUrlOutput;

use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::presigning::PresigningConfig;

use crate::error::{self, Error};
use crate::{MAX_EXPIRES_IN_SECS, MIN_EXPIRES_IN_SECS};

/// Operation struct for generating a presigned object URL
#[derive(Clone, Default, Debug)]
pub(crate) struct PresignUrl;

impl PresignUrl {
    /// Execute a single `PresignUrl` operation.
    ///
    /// The URL is signed locally without a network round trip; the object is
    /// not checked for existence.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: PresignUrlInput,
    ) -> Result<PresignUrlOutput, Error> {
        let expires_in = input.expires_in();
        if !(MIN_EXPIRES_IN_SECS..=MAX_EXPIRES_IN_SECS).contains(&expires_in) {
            return Err(error::invalid_input(format!(
                "expiresIn must be between {MIN_EXPIRES_IN_SECS} and {MAX_EXPIRES_IN_SECS} seconds, got {expires_in}"
            )));
        }

        let presigning_config = PresigningConfig::expires_in(Duration::from_secs(expires_in))
            .map_err(error::invalid_input)?;

        let presigned = handle
            .config
            .client()
            .get_object()
            .bucket(input.bucket())
            .key(input.key())
            .presigned(presigning_config)
            .await?;

        tracing::debug!(
            bucket = input.bucket(),
            key = input.key(),
            expires_in,
            "generated presigned URL"
        );

        Ok(PresignUrlOutput {
            url: presigned.uri().to_string(),
            expires_in,
        })
    }
}
