/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for deleting an object.
///
/// Carries no fields: the provider does not report whether the key existed
/// before the delete.
#[non_exhaustive]
#[derive(Debug)]
pub struct DeleteObjectOutput {}
