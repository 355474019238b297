/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{Endpoint, EndpointParams, ResolveEndpoint, ResolveEndpointError};
use std::borrow::Cow;

/// Resolves regional endpoints of the form `https://{prefix}.{region}.{dns suffix}`.
///
/// The DNS suffix depends on the partition: `amazonaws.com.cn` for `cn-` regions,
/// `api.aws` for dual stack endpoints, `amazonaws.com` otherwise. FIPS endpoints append `-fips`
/// to the prefix.
#[derive(Clone, Debug)]
pub struct AwsEndpointResolver {
    endpoint_prefix: Cow<'static, str>,
}

impl AwsEndpointResolver {
    /// Resolver for the service addressed by `endpoint_prefix`, e.g. `qldb`.
    pub fn new(endpoint_prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            endpoint_prefix: endpoint_prefix.into(),
        }
    }
}

fn is_valid_host_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

impl ResolveEndpoint for AwsEndpointResolver {
    fn resolve_endpoint(&self, params: &EndpointParams) -> Result<Endpoint, ResolveEndpointError> {
        let region = params
            .region()
            .ok_or_else(|| ResolveEndpointError::message("no region was configured"))?;
        if !is_valid_host_label(region.as_ref()) {
            return Err(ResolveEndpointError::message(format!(
                "`{}` is not a valid region",
                region
            )));
        }
        let suffix = match (region.is_china(), params.use_dual_stack()) {
            (true, true) => "api.amazonwebservices.com.cn",
            (true, false) => "amazonaws.com.cn",
            (false, true) => "api.aws",
            (false, false) => "amazonaws.com",
        };
        let fips = if params.use_fips() { "-fips" } else { "" };
        let endpoint = Endpoint::new(format!(
            "https://{}{}.{}.{}",
            self.endpoint_prefix, fips, region, suffix
        ));
        tracing::debug!(endpoint = ?endpoint, base_region = %region, "resolved endpoint");
        Ok(endpoint)
    }
}
