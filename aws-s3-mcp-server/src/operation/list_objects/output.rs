/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::ObjectEntry;

/// Output type for listing objects under a prefix
#[non_exhaustive]
#[derive(Debug)]
pub struct ListObjectsOutput {
    /// The returned entries: prefix groupings first, then leaf objects
    pub entries: Vec<ObjectEntry>,
}

impl ListObjectsOutput {
    /// The returned entries: prefix groupings first, then leaf objects.
    ///
    /// Never longer than the requested `max_keys`. An empty slice is a valid,
    /// non-error result.
    pub fn entries(&self) -> &[ObjectEntry] {
        &self.entries
    }
}
