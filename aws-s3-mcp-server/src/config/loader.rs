/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::Region;

use crate::config::Builder;
use crate::{Config, DEFAULT_REGION};

/// Environment variable consulted for the storage region.
const REGION_ENV_VAR: &str = "AWS_REGION";

/// Load [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    region: Option<String>,
}

impl ConfigLoader {
    /// Override the storage region instead of reading it from the environment.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Load the default configuration
    ///
    /// The region comes from the builder override if set, then the `AWS_REGION`
    /// environment variable, then a fixed `us-east-1` fallback. Credential
    /// resolution is delegated entirely to `aws-config` provider chains.
    pub async fn load(self) -> Config {
        let region = self
            .region
            .or_else(|| std::env::var(REGION_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_REGION.to_owned());

        let shared_config = aws_config::from_env()
            .region(Region::new(region.clone()))
            .load()
            .await;
        let s3_client = aws_sdk_s3::Client::new(&shared_config);

        Builder::default().region(region).client(s3_client).build()
    }
}
