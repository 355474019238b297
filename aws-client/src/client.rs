/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::dispatch::{self, Delivery};
use crate::operation::{Operation, ServiceMetadata};
use aws_endpoint::{AwsEndpointResolver, EndpointParams, SharedEndpointResolver};
use aws_http::user_agent::{ApiMetadata, AwsUserAgent};
use smithy_async::future::deferred::{self, Abandoned, DeferredResult};
use smithy_async::rt::executor::{default_executor, SharedExecutor};
use smithy_http::connector::{MissingConnector, SharedHttpConnector};
use smithy_types::{Error, Outcome};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) service: &'static ServiceMetadata,
    pub(crate) conf: Config,
    pub(crate) endpoint_resolver: SharedEndpointResolver,
    pub(crate) endpoint_params: EndpointParams,
    pub(crate) connector: SharedHttpConnector,
    pub(crate) executor: SharedExecutor,
    pub(crate) user_agent: AwsUserAgent,
}

/// Client for one AWS service.
///
/// Cloning a client is cheap: clones share the configuration, the connector, and the executor.
#[derive(Clone, Debug)]
pub struct Client {
    handle: Arc<Handle>,
}

impl Client {
    /// Creates a client for `service`.
    ///
    /// Without an endpoint resolver in `conf`, regional endpoints are resolved from the service's
    /// endpoint prefix. Without an executor, the client starts its own thread pool. Without a
    /// connector, every call fails with a transport error.
    pub fn from_conf(service: &'static ServiceMetadata, conf: Config) -> Self {
        let endpoint_resolver = conf.endpoint_resolver.clone().unwrap_or_else(|| {
            SharedEndpointResolver::new(AwsEndpointResolver::new(service.endpoint_prefix))
        });
        let connector = conf.http_connector.clone().unwrap_or_else(|| {
            tracing::warn!(
                service = service.name,
                "no HTTP connector was configured, every call will fail"
            );
            SharedHttpConnector::new(MissingConnector::default())
        });
        let executor = conf.executor.clone().unwrap_or_else(default_executor);
        let endpoint_params = EndpointParams::new()
            .with_region(conf.region.clone())
            .with_use_fips(conf.use_fips)
            .with_use_dual_stack(conf.use_dual_stack);
        let mut user_agent = AwsUserAgent::new_from_environment(
            &conf.env,
            ApiMetadata::new(service.name, service.api_version),
        );
        if let Some(app_name) = &conf.app_name {
            user_agent = user_agent.with_app_name(app_name.clone());
        }
        tracing::debug!(service = service.name, region = ?conf.region, "created client");
        Client {
            handle: Arc::new(Handle {
                service,
                conf,
                endpoint_resolver,
                endpoint_params,
                connector,
                executor,
                user_agent,
            }),
        }
    }

    /// The configuration the client was created with.
    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }

    /// The service this client calls.
    pub fn service(&self) -> &'static ServiceMetadata {
        self.handle.service
    }

    /// Calls `O` on the current thread and returns its outcome.
    ///
    /// Nothing is submitted to the executor.
    pub fn call<O: Operation>(&self, input: &O::Input) -> Outcome<O::Output> {
        dispatch::invoke::<O>(&self.handle, input)
    }

    /// Submits a call of `O` to the executor and returns a handle to its outcome.
    ///
    /// `input` is cloned before this returns; later changes to it do not affect the call.
    pub fn call_callable<O: Operation>(&self, input: &O::Input) -> OutcomeFuture<O::Output> {
        let (promise, result) = deferred::channel();
        let delivery = Delivery::new(move |outcome| {
            if promise.complete(outcome).is_err() {
                tracing::trace!("outcome was discarded, the caller dropped its future");
            }
        });
        dispatch::spawn::<O>(&self.handle, Arc::new(input.clone()), delivery);
        OutcomeFuture { inner: result }
    }

    /// Submits a call of `O` to the executor and returns immediately.
    ///
    /// `handler` is invoked exactly once with `facade`, the client's own copy of `input`, the
    /// outcome, and `context`. It normally runs on an executor thread. If the executor refuses the
    /// task, it runs on the calling thread, before this returns, with a
    /// [`Dispatch`](smithy_types::ErrorKind::Dispatch) error.
    pub fn call_async<O, F, H, C>(&self, facade: F, input: &O::Input, handler: H, context: C)
    where
        O: Operation,
        F: Send + 'static,
        H: FnOnce(&F, &O::Input, Outcome<O::Output>, C) + Send + 'static,
        C: Send + 'static,
    {
        let input = Arc::new(input.clone());
        let handler_input = input.clone();
        let delivery = Delivery::new(move |outcome| handler(&facade, &handler_input, outcome, context));
        dispatch::spawn::<O>(&self.handle, input, delivery);
    }
}

/// The outcome of a call made with [`Client::call_callable`].
///
/// It can be awaited or blocked on with [`wait`](OutcomeFuture::wait).
#[derive(Debug)]
#[must_use]
pub struct OutcomeFuture<T> {
    inner: DeferredResult<Outcome<T>>,
}

fn abandoned<T>(_: Abandoned) -> Outcome<T> {
    Err(Error::dispatch_failure(
        "the operation task ended without producing an outcome",
    ))
}

impl<T> OutcomeFuture<T> {
    /// Block the current thread until the outcome is available.
    ///
    /// # Panics
    /// If called from within an asynchronous execution context. Use `.await` there instead.
    pub fn wait(self) -> Outcome<T> {
        self.inner.wait().unwrap_or_else(abandoned)
    }

    /// Take the outcome if it is available, without blocking.
    pub fn try_take(&mut self) -> Option<Outcome<T>> {
        self.inner
            .try_take()
            .map(|result| result.unwrap_or_else(abandoned))
    }
}

impl<T> Future for OutcomeFuture<T> {
    type Output = Outcome<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner)
            .poll(cx)
            .map(|result| result.unwrap_or_else(abandoned))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::operation::{parse_json, require};
    use crate::test_util::{capture_test_logs, CaptureConnector, FailingConnector};
    use aws_types::region::Region;
    use http::Method;
    use smithy_async::test_util::InlineExecutor;
    use smithy_http::connector::HttpResponse;
    use smithy_http::operation::Protocol;
    use smithy_types::ErrorKind;

    static TEST_SERVICE: ServiceMetadata = ServiceMetadata {
        name: "TestService",
        endpoint_prefix: "test",
        signing_name: "test",
        api_version: "2020-01-01",
        protocol: Protocol::AwsJson1_1,
        target_prefix: Some("TestService_20200101"),
    };

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Echo {
        #[serde(rename = "Value")]
        value: String,
    }

    struct EchoOperation;

    impl Operation for EchoOperation {
        type Input = Option<String>;
        type Output = Echo;

        const NAME: &'static str = "Echo";
        const METHOD: Method = Method::POST;
        const PATH: &'static str = "/";

        fn validate(input: &Self::Input) -> Result<(), Error> {
            require("Value", input.as_ref())
        }

        fn serialize_body(input: &Self::Input) -> Result<bytes::Bytes, Error> {
            crate::operation::serialize_json(&serde_json::json!({ "Value": input }))
        }

        fn parse_response(response: &HttpResponse) -> Outcome<Self::Output> {
            parse_json(response)
        }
    }

    fn client(connector: impl smithy_http::connector::HttpConnector + 'static) -> Client {
        Client::from_conf(
            &TEST_SERVICE,
            Config::builder()
                .region(Region::from_static("us-west-2"))
                .http_connector(connector)
                .executor(InlineExecutor::new())
                .build(),
        )
    }

    #[test]
    fn json_protocol_headers() {
        let connector = CaptureConnector::ok(r#"{"Value":"hi"}"#);
        let client = client(connector.clone());
        let output = client.call::<EchoOperation>(&Some("hi".into())).unwrap();
        assert_eq!(output.value, "hi");

        let request = connector.expect_request();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.uri().to_string(),
            "https://test.us-west-2.amazonaws.com/"
        );
        assert_eq!(
            request.headers()["x-amz-target"],
            "TestService_20200101.Echo"
        );
        assert_eq!(
            request.headers()["content-type"],
            "application/x-amz-json-1.1"
        );
        assert_eq!(request.body().as_ref(), br#"{"Value":"hi"}"#);
        let ua = request.headers()["x-amz-user-agent"].to_str().unwrap();
        assert!(ua.contains("api/TestService/2020-01-01"), "{}", ua);
        assert_eq!(
            request.headers()["amz-sdk-invocation-id"].len(),
            "00000000-0000-4000-8000-000000000000".len()
        );
    }

    #[test]
    fn service_errors_are_parsed() {
        let connector = CaptureConnector::with_status(
            400,
            "req-42",
            r#"{"__type":"com.amazon#ThrottlingException","message":"slow down"}"#,
        );
        let err = client(connector)
            .call::<EchoOperation>(&Some("hi".into()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.message(), Some("slow down"));
        assert_eq!(err.request_id(), Some("req-42"));
        assert!(err.is_retryable());
    }

    #[test]
    fn connector_failures_are_transport_errors() {
        let err = client(FailingConnector::Timeout)
            .call::<EchoOperation>(&Some("hi".into()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.code(), Some("RequestTimeout"));
        assert!(err.is_retryable());

        let no_connector = Client::from_conf(
            &TEST_SERVICE,
            Config::builder()
                .region(Region::from_static("us-west-2"))
                .executor(InlineExecutor::new())
                .build(),
        );
        let err = no_connector
            .call::<EchoOperation>(&Some("hi".into()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(!err.is_retryable());
    }

    #[test]
    fn callable_delivers_on_the_executor() {
        let executor = InlineExecutor::new();
        let connector = CaptureConnector::ok(r#"{"Value":"hi"}"#);
        let client = Client::from_conf(
            &TEST_SERVICE,
            Config::builder()
                .region(Region::from_static("us-west-2"))
                .http_connector(connector.clone())
                .executor(executor.clone())
                .build(),
        );
        let mut future = client.call_callable::<EchoOperation>(&Some("hi".into()));
        assert_eq!(executor.submitted(), 1);
        assert_eq!(
            future.try_take(),
            Some(Ok(Echo {
                value: "hi".into()
            }))
        );
        assert_eq!(connector.calls(), 1);

        client.call::<EchoOperation>(&None).unwrap_err();
        assert_eq!(executor.submitted(), 1);
    }

    #[test]
    fn failures_are_logged_in_the_operation_span() {
        let (_guard, rx) = capture_test_logs();
        let client = client(CaptureConnector::ok("{}"));
        let err = client.call::<EchoOperation>(&None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingParameter);
        let logs = rx.contents();
        assert!(logs.contains("invoke"), "{}", logs);
        assert!(logs.contains("operation=\"Echo\""), "{}", logs);
        assert!(logs.contains("operation failed"), "{}", logs);
        assert!(logs.contains("Missing required field [Value]"), "{}", logs);
    }
}
