/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for deleting an object
pub use input::{DeleteObjectInput, DeleteObjectInputBuilder};
mod output;
/// Output type for deleting an object
pub use output::DeleteObjectOutput;

use std::sync::Arc;

use crate::error::Error;

/// Operation struct for deleting a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct DeleteObject;

impl DeleteObject {
    /// Execute a single `DeleteObject` operation.
    ///
    /// Deleting a key that does not exist succeeds; the provider does not
    /// distinguish the two cases.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DeleteObjectInput,
    ) -> Result<DeleteObjectOutput, Error> {
        tracing::debug!(bucket = input.bucket(), key = input.key(), "deleting object");

        handle
            .config
            .client()
            .delete_object()
            .bucket(input.bucket())
            .key(input.key())
            .send()
            .await?;

        Ok(DeleteObjectOutput {})
    }
}
