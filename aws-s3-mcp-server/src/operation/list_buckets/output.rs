/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::BucketSummary;

/// Output type for listing buckets
#[non_exhaustive]
#[derive(Debug)]
pub struct ListBucketsOutput {
    /// The buckets visible to the configured credentials, in provider order
    pub buckets: Vec<BucketSummary>,
}

impl ListBucketsOutput {
    /// The buckets visible to the configured credentials, in provider order.
    ///
    /// An empty slice is a valid, non-error result.
    pub fn buckets(&self) -> &[BucketSummary] {
        &self.buckets
    }
}
