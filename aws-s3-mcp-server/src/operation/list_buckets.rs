/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod output;
/// Output type for listing buckets
pub use output::ListBucketsOutput;

use std::sync::Arc;

use crate::error::Error;
use crate::types::BucketSummary;

/// Operation struct for listing buckets
#[derive(Clone, Default, Debug)]
pub(crate) struct ListBuckets;

impl ListBuckets {
    /// Execute a single `ListBuckets` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
    ) -> Result<ListBucketsOutput, Error> {
        let resp = handle.config.client().list_buckets().send().await?;

        // provider order, not separately sorted
        let buckets = resp
            .buckets()
            .iter()
            .filter_map(|bucket| {
                bucket
                    .name()
                    .map(|name| BucketSummary::new(name, bucket.creation_date().cloned()))
            })
            .collect::<Vec<_>>();

        tracing::debug!("listed {} bucket(s)", buckets.len());
        Ok(ListBucketsOutput { buckets })
    }
}
