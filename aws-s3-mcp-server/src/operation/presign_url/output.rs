/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for generating a presigned URL
#[non_exhaustive]
#[derive(Debug)]
pub struct PresignUrlOutput {
    /// The signed URL
    pub url: String,

    /// The validity the URL was signed with, in seconds
    pub expires_in: u64,
}

impl PresignUrlOutput {
    /// The signed URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The validity the URL was signed with, in seconds
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }
}
