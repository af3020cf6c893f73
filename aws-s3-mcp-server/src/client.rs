/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::Config;
use std::sync::Arc;

/// Storage adapter client for Amazon Simple Storage Service.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// List the buckets the configured credentials can see.
    ///
    /// Constructs a fluent builder for the
    /// [`ListBuckets`](crate::operation::list_buckets::builders::ListBucketsFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &aws_s3_mcp_server::Client) -> Result<(), aws_s3_mcp_server::error::Error> {
    /// let output = client.list_buckets().send().await?;
    /// for bucket in output.buckets() {
    ///     println!("{}", bucket.name());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_buckets(&self) -> crate::operation::list_buckets::builders::ListBucketsFluentBuilder {
        crate::operation::list_buckets::builders::ListBucketsFluentBuilder::new(self.handle.clone())
    }

    /// List objects under a prefix, grouping keys on the `/` delimiter.
    ///
    /// Constructs a fluent builder for the
    /// [`ListObjects`](crate::operation::list_objects::builders::ListObjectsFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &aws_s3_mcp_server::Client) -> Result<(), aws_s3_mcp_server::error::Error> {
    /// let output = client
    ///     .list_objects()
    ///     .bucket("my-bucket")
    ///     .prefix("uploads/")
    ///     .max_keys(50)
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_objects(&self) -> crate::operation::list_objects::builders::ListObjectsFluentBuilder {
        crate::operation::list_objects::builders::ListObjectsFluentBuilder::new(self.handle.clone())
    }

    /// Read an entire object as UTF-8 text.
    ///
    /// Constructs a fluent builder for the
    /// [`GetObject`](crate::operation::get_object::builders::GetObjectFluentBuilder) operation.
    pub fn get_object(&self) -> crate::operation::get_object::builders::GetObjectFluentBuilder {
        crate::operation::get_object::builders::GetObjectFluentBuilder::new(self.handle.clone())
    }

    /// Write text content to an object.
    ///
    /// Constructs a fluent builder for the
    /// [`PutObject`](crate::operation::put_object::builders::PutObjectFluentBuilder) operation.
    pub fn put_object(&self) -> crate::operation::put_object::builders::PutObjectFluentBuilder {
        crate::operation::put_object::builders::PutObjectFluentBuilder::new(self.handle.clone())
    }

    /// Delete an object. Deleting a key that does not exist is not an error.
    ///
    /// Constructs a fluent builder for the
    /// [`DeleteObject`](crate::operation::delete_object::builders::DeleteObjectFluentBuilder) operation.
    pub fn delete_object(
        &self,
    ) -> crate::operation::delete_object::builders::DeleteObjectFluentBuilder {
        crate::operation::delete_object::builders::DeleteObjectFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Generate a presigned URL granting temporary access to an object.
    ///
    /// The URL is signed locally; no request is made to check that the object
    /// exists.
    ///
    /// Constructs a fluent builder for the
    /// [`PresignUrl`](crate::operation::presign_url::builders::PresignUrlFluentBuilder) operation.
    pub fn presign_url(&self) -> crate::operation::presign_url::builders::PresignUrlFluentBuilder {
        crate::operation::presign_url::builders::PresignUrlFluentBuilder::new(self.handle.clone())
    }

    /// Probe whether a bucket exists and is reachable.
    ///
    /// Constructs a fluent builder for the
    /// [`BucketInfo`](crate::operation::bucket_info::builders::BucketInfoFluentBuilder) operation.
    pub fn bucket_info(&self) -> crate::operation::bucket_info::builders::BucketInfoFluentBuilder {
        crate::operation::bucket_info::builders::BucketInfoFluentBuilder::new(self.handle.clone())
    }
}
