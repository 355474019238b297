/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client configuration.

use aws_endpoint::{ResolveEndpoint, SharedEndpointResolver, StaticUriEndpointResolver};
use aws_types::env::Env;
use aws_types::region::{EnvironmentVariableRegionProvider, ProvideRegion, Region};
use smithy_async::rt::executor::{Executor, SharedExecutor};
use smithy_http::connector::{HttpConnector, SharedHttpConnector};
use std::borrow::Cow;

/// Configuration shared by every call made through a [`Client`](crate::Client).
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) endpoint_resolver: Option<SharedEndpointResolver>,
    pub(crate) use_fips: bool,
    pub(crate) use_dual_stack: bool,
    pub(crate) http_connector: Option<SharedHttpConnector>,
    pub(crate) executor: Option<SharedExecutor>,
    pub(crate) app_name: Option<Cow<'static, str>>,
    pub(crate) env: Env,
}

impl Config {
    /// Returns a builder with nothing set.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns a builder populated from the process environment.
    ///
    /// | variable | setting |
    /// |---|---|
    /// | `AWS_REGION`, then `AWS_DEFAULT_REGION` | region |
    /// | `AWS_ENDPOINT_URL` | endpoint URL |
    /// | `AWS_USE_FIPS_ENDPOINT` | FIPS endpoints |
    /// | `AWS_USE_DUALSTACK_ENDPOINT` | dual stack endpoints |
    pub fn from_env() -> Builder {
        Builder::default().load_env(Env::real())
    }

    /// The region requests are sent to.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// True if FIPS endpoints are used.
    pub fn use_fips(&self) -> bool {
        self.use_fips
    }

    /// True if dual stack endpoints are used.
    pub fn use_dual_stack(&self) -> bool {
        self.use_dual_stack
    }

    /// The application name reported in the user agent.
    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint_resolver: Option<SharedEndpointResolver>,
    use_fips: Option<bool>,
    use_dual_stack: Option<bool>,
    http_connector: Option<SharedHttpConnector>,
    executor: Option<SharedExecutor>,
    app_name: Option<Cow<'static, str>>,
    env: Option<Env>,
}

impl Builder {
    /// Fills every setting that was not set explicitly from `env`.
    ///
    /// Settings made after this call override the environment.
    pub fn load_env(mut self, env: Env) -> Self {
        if self.region.is_none() {
            self.region = EnvironmentVariableRegionProvider::with_env(env.clone()).region();
        }
        if self.endpoint_resolver.is_none() {
            if let Some(url) = env.var("AWS_ENDPOINT_URL") {
                if !url.is_empty() {
                    self.endpoint_resolver =
                        Some(SharedEndpointResolver::new(StaticUriEndpointResolver::uri(url)));
                }
            }
        }
        if self.use_fips.is_none() {
            self.use_fips = env.flag("AWS_USE_FIPS_ENDPOINT");
        }
        if self.use_dual_stack.is_none() {
            self.use_dual_stack = env.flag("AWS_USE_DUALSTACK_ENDPOINT");
        }
        self.env = Some(env);
        self
    }

    /// Sets the region.
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.set_region(region.into());
        self
    }

    /// Sets the region.
    pub fn set_region(&mut self, region: Option<Region>) -> &mut Self {
        self.region = region;
        self
    }

    /// Sends every request to `url` instead of the regional endpoint.
    pub fn endpoint_url(self, url: impl Into<String>) -> Self {
        self.endpoint_resolver(StaticUriEndpointResolver::uri(url))
    }

    /// Sets the endpoint resolver.
    pub fn endpoint_resolver(mut self, resolver: impl ResolveEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(SharedEndpointResolver::new(resolver));
        self
    }

    /// Use FIPS compliant endpoints.
    pub fn use_fips(mut self, use_fips: bool) -> Self {
        self.use_fips = Some(use_fips);
        self
    }

    /// Use dual stack endpoints.
    pub fn use_dual_stack(mut self, use_dual_stack: bool) -> Self {
        self.use_dual_stack = Some(use_dual_stack);
        self
    }

    /// Sets the connector that signs and sends requests.
    pub fn http_connector(mut self, connector: impl HttpConnector + 'static) -> Self {
        self.set_http_connector(Some(SharedHttpConnector::new(connector)));
        self
    }

    /// Sets the connector that signs and sends requests.
    pub fn set_http_connector(&mut self, connector: Option<SharedHttpConnector>) -> &mut Self {
        self.http_connector = connector;
        self
    }

    /// Sets the executor used by the callable and callback call forms.
    ///
    /// When unset, each client gets its own [`PooledThreadExecutor`](smithy_async::rt::pooled::PooledThreadExecutor).
    pub fn executor(mut self, executor: impl Executor + 'static) -> Self {
        self.set_executor(Some(SharedExecutor::new(executor)));
        self
    }

    /// Sets the executor used by the callable and callback call forms.
    pub fn set_executor(&mut self, executor: Option<SharedExecutor>) -> &mut Self {
        self.executor = executor;
        self
    }

    /// Sets the application name reported in the user agent.
    pub fn app_name(mut self, app_name: impl Into<Cow<'static, str>>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint_resolver: self.endpoint_resolver,
            use_fips: self.use_fips.unwrap_or_default(),
            use_dual_stack: self.use_dual_stack.unwrap_or_default(),
            http_connector: self.http_connector,
            executor: self.executor,
            app_name: self.app_name,
            env: self.env.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use aws_endpoint::EndpointParams;

    #[test]
    fn environment_settings() {
        let conf = Config::builder()
            .load_env(Env::from_slice(&[
                ("AWS_DEFAULT_REGION", "eu-west-1"),
                ("AWS_USE_FIPS_ENDPOINT", "true"),
                ("AWS_ENDPOINT_URL", "http://localhost:4566"),
            ]))
            .build();
        assert_eq!(conf.region(), Some(&Region::from_static("eu-west-1")));
        assert!(conf.use_fips());
        assert!(!conf.use_dual_stack());
        let endpoint = conf
            .endpoint_resolver
            .as_ref()
            .expect("endpoint url was set")
            .resolve_endpoint(&EndpointParams::new())
            .unwrap();
        assert_eq!(endpoint.url(), "http://localhost:4566");
    }

    #[test]
    fn explicit_settings_win() {
        let conf = Config::builder()
            .region(Region::from_static("us-west-2"))
            .use_fips(false)
            .load_env(Env::from_slice(&[
                ("AWS_REGION", "eu-west-1"),
                ("AWS_USE_FIPS_ENDPOINT", "true"),
            ]))
            .build();
        assert_eq!(conf.region(), Some(&Region::from_static("us-west-2")));
        assert!(!conf.use_fips());
    }

    #[test]
    fn nothing_set() {
        let conf = Config::builder().build();
        assert_eq!(conf.region(), None);
        assert!(conf.http_connector.is_none());
        assert!(conf.executor.is_none());
        assert_eq!(conf.app_name(), None);
    }
}
