/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Each operation is a single request/response cycle against the storage
//! provider. No state is shared between calls and there is no retry, caching,
//! or pagination logic here; callers wanting more listing results re-invoke
//! with a narrower prefix.

/// Types for the bucket listing operation
pub mod list_buckets;

/// Types for the delimited object listing operation
pub mod list_objects;

/// Types for the single object read operation
pub mod get_object;

/// Types for the single object write operation
pub mod put_object;

/// Types for the single object delete operation
pub mod delete_object;

/// Types for the presigned URL operation
pub mod presign_url;

/// Types for the bucket existence probe
pub mod bucket_info;
