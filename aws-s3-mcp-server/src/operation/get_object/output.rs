/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for reading an object
#[non_exhaustive]
#[derive(Debug)]
pub struct GetObjectOutput {
    /// The object content decoded as UTF-8 text
    pub content: String,
}

impl GetObjectOutput {
    /// The object content decoded as UTF-8 text.
    ///
    /// Binary payloads are not distinguished; non-UTF-8 byte sequences are
    /// replaced rather than rejected.
    pub fn content(&self) -> &str {
        &self.content
    }
}
