/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! AWS Endpoint Support
//!
//! Resolves the base URL a request is sent to. Operation paths are joined onto the resolved
//! endpoint with [`Endpoint::join`].

mod partition;

pub use partition::AwsEndpointResolver;

use aws_types::region::Region;
use http::uri::{PathAndQuery, Uri};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt::Debug;
use std::sync::Arc;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Endpoint resolution failed.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ResolveEndpointError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl ResolveEndpointError {
    /// Creates an error with a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying cause.
    pub fn with_source(self, source: Option<BoxError>) -> Self {
        Self { source, ..self }
    }
}

/// Inputs to endpoint resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EndpointParams {
    region: Option<Region>,
    use_fips: bool,
    use_dual_stack: bool,
    account_id: Option<String>,
    extra: HashMap<String, String>,
}

impl EndpointParams {
    /// Params with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the region.
    pub fn with_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    /// Requests a FIPS compliant endpoint.
    pub fn with_use_fips(mut self, use_fips: bool) -> Self {
        self.use_fips = use_fips;
        self
    }

    /// Requests a dual stack (IPv4 and IPv6) endpoint.
    pub fn with_use_dual_stack(mut self, use_dual_stack: bool) -> Self {
        self.use_dual_stack = use_dual_stack;
        self
    }

    /// Sets the account the request is made for.
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Sets a service specific parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Fills every unset value from `defaults`. Values already set win.
    pub fn or(mut self, defaults: &EndpointParams) -> Self {
        if self.region.is_none() {
            self.region = defaults.region.clone();
        }
        self.use_fips |= defaults.use_fips;
        self.use_dual_stack |= defaults.use_dual_stack;
        if self.account_id.is_none() {
            self.account_id = defaults.account_id.clone();
        }
        for (k, v) in &defaults.extra {
            self.extra.entry(k.clone()).or_insert_with(|| v.clone());
        }
        self
    }

    /// The region, if set.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// True if a FIPS endpoint was requested.
    pub fn use_fips(&self) -> bool {
        self.use_fips
    }

    /// True if a dual stack endpoint was requested.
    pub fn use_dual_stack(&self) -> bool {
        self.use_dual_stack
    }

    /// The account ID, if set.
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    /// A service specific parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }
}

/// A resolved endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
}

impl Endpoint {
    /// An endpoint at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The base URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Joins `path_and_query` onto this endpoint.
    ///
    /// Any path in the base URL is kept: `https://host/base` joined with `/ledgers` yields
    /// `https://host/base/ledgers`. A query in the base URL comes first, followed by the
    /// operation's own parameters.
    pub fn join(&self, path_and_query: &str) -> Result<Uri, ResolveEndpointError> {
        let base = self.url.parse::<Uri>().map_err(|err| {
            ResolveEndpointError::message(format!("endpoint `{}` is not a valid URI", self.url))
                .with_source(Some(err.into()))
        })?;
        let (scheme, authority) = match (base.scheme(), base.authority()) {
            (Some(scheme), Some(authority)) => (scheme.clone(), authority.clone()),
            _ => {
                return Err(ResolveEndpointError::message(format!(
                    "endpoint `{}` must be absolute",
                    self.url
                )))
            }
        };
        let base_path = base.path().trim_end_matches('/');
        let (path, query) = match path_and_query.split_once('?') {
            Some((path, query)) => (path, query),
            None => (path_and_query, ""),
        };
        let mut joined = format!("{}{}", base_path, path);
        let queries = [base.query().unwrap_or_default(), query];
        let mut queries = queries.iter().filter(|query| !query.is_empty());
        if let Some(first) = queries.next() {
            joined.push('?');
            joined.push_str(first);
            for query in queries {
                joined.push('&');
                joined.push_str(query);
            }
        }
        let path_and_query = joined.parse::<PathAndQuery>().map_err(|err| {
            ResolveEndpointError::message(format!("`{}` is not a valid request path", joined))
                .with_source(Some(err.into()))
        })?;
        Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query(path_and_query)
            .build()
            .map_err(|err| {
                ResolveEndpointError::message("failed to build request URI")
                    .with_source(Some(err.into()))
            })
    }
}

/// Resolves an [`Endpoint`] from [`EndpointParams`].
pub trait ResolveEndpoint: Debug + Send + Sync {
    /// Resolve the endpoint for a request.
    fn resolve_endpoint(&self, params: &EndpointParams) -> Result<Endpoint, ResolveEndpointError>;
}

impl<T: ResolveEndpoint + ?Sized> ResolveEndpoint for Box<T> {
    fn resolve_endpoint(&self, params: &EndpointParams) -> Result<Endpoint, ResolveEndpointError> {
        T::resolve_endpoint(self, params)
    }
}

impl<T: ResolveEndpoint + ?Sized> ResolveEndpoint for Arc<T> {
    fn resolve_endpoint(&self, params: &EndpointParams) -> Result<Endpoint, ResolveEndpointError> {
        T::resolve_endpoint(self, params)
    }
}

/// Shared endpoint resolver.
#[derive(Clone, Debug)]
pub struct SharedEndpointResolver(Arc<dyn ResolveEndpoint>);

impl SharedEndpointResolver {
    /// Wraps `resolver`.
    pub fn new(resolver: impl ResolveEndpoint + 'static) -> Self {
        Self(Arc::new(resolver))
    }
}

impl ResolveEndpoint for SharedEndpointResolver {
    fn resolve_endpoint(&self, params: &EndpointParams) -> Result<Endpoint, ResolveEndpointError> {
        self.0.resolve_endpoint(params)
    }
}

/// An endpoint resolver that uses a static URI.
#[derive(Clone, Debug)]
pub struct StaticUriEndpointResolver {
    endpoint: String,
}

impl StaticUriEndpointResolver {
    /// Create a resolver that resolves to `http://localhost:{port}`.
    pub fn http_localhost(port: u16) -> Self {
        Self {
            endpoint: format!("http://localhost:{}", port),
        }
    }

    /// Create a resolver that resolves to the given URI.
    pub fn uri(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ResolveEndpoint for StaticUriEndpointResolver {
    fn resolve_endpoint(&self, _params: &EndpointParams) -> Result<Endpoint, ResolveEndpointError> {
        Ok(Endpoint::new(self.endpoint.clone()))
    }
}
