/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for writing an object
#[non_exhaustive]
#[derive(Debug)]
pub struct PutObjectOutput {
    /// Entity tag reported by the provider for the written object, if any
    pub e_tag: Option<String>,
}

impl PutObjectOutput {
    /// Entity tag reported by the provider for the written object, if any
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }
}
