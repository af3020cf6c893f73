/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for probing a bucket
pub use input::{BucketInfoInput, BucketInfoInputBuilder};

use std::sync::Arc;

use crate::error::Error;
use crate::types::BucketStatus;

/// Operation struct for probing bucket existence
#[derive(Clone, Default, Debug)]
pub(crate) struct BucketInfo;

impl BucketInfo {
    /// Execute a single `HeadBucket` probe.
    ///
    /// Any probe failure, authorization failures included, collapses to
    /// `exists == false` with no region; the cause is not distinguished.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: BucketInfoInput,
    ) -> Result<BucketStatus, Error> {
        let probe = handle
            .config
            .client()
            .head_bucket()
            .bucket(input.bucket())
            .send()
            .await;

        let status = match probe {
            Ok(_) => BucketStatus::found(input.bucket(), handle.config.region()),
            Err(err) => {
                tracing::debug!(
                    bucket = input.bucket(),
                    error = %aws_smithy_types::error::display::DisplayErrorContext(&err),
                    "bucket probe failed"
                );
                BucketStatus::missing(input.bucket())
            }
        };

        Ok(status)
    }
}
