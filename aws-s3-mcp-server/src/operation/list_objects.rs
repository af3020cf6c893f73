/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for listing objects under a prefix
pub use input::{ListObjectsInput, ListObjectsInputBuilder};
mod output;
/// Output type for listing objects under a prefix
pub use output::ListObjectsOutput;

use std::sync::Arc;

use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;

use crate::error::{self, Error};
use crate::types::ObjectEntry;
use crate::MAX_KEYS_LIMIT;

/// Delimiter used to group keys into synthetic "folder" entries.
const GROUPING_DELIMITER: &str = "/";

/// Operation struct for listing objects under a prefix
#[derive(Clone, Default, Debug)]
pub(crate) struct ListObjects;

impl ListObjects {
    /// Execute a single `ListObjects` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ListObjectsInput,
    ) -> Result<ListObjectsOutput, Error> {
        let max_keys = input.max_keys();
        if !(1..=MAX_KEYS_LIMIT).contains(&max_keys) {
            return Err(error::invalid_input(format!(
                "maxKeys must be between 1 and {MAX_KEYS_LIMIT}, got {max_keys}"
            )));
        }

        tracing::debug!(
            bucket = input.bucket(),
            prefix = input.prefix().unwrap_or(""),
            max_keys,
            "listing objects"
        );

        let resp = handle
            .config
            .client()
            .list_objects_v2()
            .bucket(input.bucket())
            .set_prefix(input.prefix().map(str::to_owned))
            .delimiter(GROUPING_DELIMITER)
            .max_keys(max_keys)
            .send()
            .await?;

        let mut entries = collect_entries(&resp);
        entries.truncate(max_keys as usize);
        Ok(ListObjectsOutput { entries })
    }
}

/// Convert a single `ListObjectsV2` page into the entry sequence: common
/// prefixes first (as grouping entries), then leaf objects, each in provider
/// order.
fn collect_entries(resp: &ListObjectsV2Output) -> Vec<ObjectEntry> {
    let mut entries = Vec::new();

    for common in resp.common_prefixes() {
        if let Some(prefix) = common.prefix() {
            entries.push(ObjectEntry::prefix(prefix));
        }
    }

    for object in resp.contents() {
        if let Some(key) = object.key() {
            entries.push(ObjectEntry::object(
                key,
                object.size(),
                object.last_modified().cloned(),
            ));
        }
    }

    entries
}
