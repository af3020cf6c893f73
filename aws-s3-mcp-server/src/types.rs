/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::DateTime;

/// A single bucket returned by a bucket listing call.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketSummary {
    name: String,
    creation_date: Option<DateTime>,
}

impl BucketSummary {
    pub(crate) fn new(name: impl Into<String>, creation_date: Option<DateTime>) -> Self {
        Self {
            name: name.into(),
            creation_date,
        }
    }

    /// The bucket name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the bucket was created, if reported by the provider
    pub fn creation_date(&self) -> Option<&DateTime> {
        self.creation_date.as_ref()
    }
}

/// A single entry returned by a delimited object listing.
///
/// An entry is either an addressable object (a "leaf") or a synthetic prefix
/// grouping produced by delimiting keys on `/`. Prefix entries never carry a
/// size or last-modified timestamp; the constructors enforce this.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectEntry {
    key: String,
    size: Option<i64>,
    last_modified: Option<DateTime>,
    is_prefix: bool,
}

impl ObjectEntry {
    /// Create an entry representing a prefix grouping ("folder")
    pub(crate) fn prefix(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            size: None,
            last_modified: None,
            is_prefix: true,
        }
    }

    /// Create an entry representing an addressable object
    pub(crate) fn object(
        key: impl Into<String>,
        size: Option<i64>,
        last_modified: Option<DateTime>,
    ) -> Self {
        Self {
            key: key.into(),
            size,
            last_modified,
            is_prefix: false,
        }
    }

    /// The object key, or the common prefix for grouping entries
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Object size in bytes, if reported. Always `None` for prefix entries.
    pub fn size(&self) -> Option<i64> {
        self.size
    }

    /// Last modification time, if reported. Always `None` for prefix entries.
    pub fn last_modified(&self) -> Option<&DateTime> {
        self.last_modified.as_ref()
    }

    /// Whether this entry is a prefix grouping rather than an addressable object
    pub fn is_prefix(&self) -> bool {
        self.is_prefix
    }
}

/// Result of a bucket existence probe.
///
/// A failed probe, for any reason (not found, no access, network), is collapsed
/// to `exists == false` with no region.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketStatus {
    name: String,
    exists: bool,
    region: Option<String>,
}

impl BucketStatus {
    /// Status for a bucket the probe reached
    pub(crate) fn found(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exists: true,
            region: Some(region.into()),
        }
    }

    /// Status for a bucket the probe could not reach
    pub(crate) fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exists: false,
            region: None,
        }
    }

    /// The bucket name that was probed
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the probe succeeded
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// The bucket region. `None` whenever `exists` is false.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
