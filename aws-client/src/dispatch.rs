/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The single synchronous implementation behind every call form, and the plumbing that runs it
//! on an executor.

use crate::client::Handle;
use crate::invocation_id::{random_uuid, AMZ_SDK_INVOCATION_ID};
use crate::operation::Operation;
use aws_endpoint::ResolveEndpoint;
use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use smithy_async::rt::executor::{Executor, Task};
use smithy_http::connector::{HttpConnector, HttpRequest};
use smithy_http::operation::Metadata;
use smithy_http::path::PathTemplate;
use smithy_http::query;
use smithy_types::{Error, ErrorKind, Outcome};
use std::error::Error as StdError;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, debug_span, trace, warn, Span};

const X_AMZ_TARGET: HeaderName = HeaderName::from_static("x-amz-target");

/// Renders an error followed by its sources.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(err) = source {
        out.push_str(": ");
        out.push_str(&err.to_string());
        source = err.source();
    }
    out
}

/// Runs `O` to completion on the current thread.
pub(crate) fn invoke<O: Operation>(handle: &Handle, input: &O::Input) -> Outcome<O::Output> {
    let span = debug_span!("invoke", service = handle.service.name, operation = O::NAME);
    let _entered = span.enter();
    let outcome = build_request::<O>(handle, input).and_then(|request| send::<O>(handle, request));
    match &outcome {
        Ok(_) => debug!("operation succeeded"),
        Err(err) => debug!(error = %err, "operation failed"),
    }
    outcome
}

fn build_request<O: Operation>(handle: &Handle, input: &O::Input) -> Result<HttpRequest, Error> {
    O::validate(input)?;

    let params = O::endpoint_params(input).or(&handle.endpoint_params);
    let endpoint = handle
        .endpoint_resolver
        .resolve_endpoint(&params)
        .map_err(|err| Error::endpoint_resolution(error_chain(&err)))?;
    trace!(endpoint = endpoint.url(), "resolved endpoint");

    let template = PathTemplate::parse(O::PATH)
        .map_err(|err| Error::construction_failure(err.to_string()))?;
    let path = template
        .expand(|label| O::label(input, label))
        .map_err(|err| {
            Error::builder(ErrorKind::MissingParameter)
                .code("MissingParameter")
                .message(err.to_string())
                .build()
        })?;
    let mut path_and_query = query::Writer::new(path);
    for (key, value) in O::query(input) {
        path_and_query.push_kv(key, &value);
    }
    let uri = endpoint
        .join(&path_and_query.build())
        .map_err(|err| Error::endpoint_resolution(error_chain(&err)))?;

    let body = O::serialize_body(input)?;
    let protocol = handle.service.protocol;
    let needs_content_type = protocol.uses_target_header() || !body.is_empty();

    let mut request = http::Request::new(body);
    *request.method_mut() = O::METHOD;
    *request.uri_mut() = uri;
    let headers = request.headers_mut();
    handle
        .user_agent
        .apply(headers)
        .map_err(|err| Error::construction_failure(err.to_string()))?;
    headers.insert(AMZ_SDK_INVOCATION_ID, header_value(random_uuid())?);
    if needs_content_type {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(protocol.content_type()));
    }
    if protocol.uses_target_header() {
        if let Some(prefix) = handle.service.target_prefix {
            headers.insert(X_AMZ_TARGET, header_value(format!("{}.{}", prefix, O::NAME))?);
        }
    }
    request.extensions_mut().insert(Metadata::new(
        O::NAME,
        handle.service.name,
        handle.service.signing_name,
        O::SIGNING,
    ));
    Ok(request)
}

fn header_value(value: String) -> Result<HeaderValue, Error> {
    HeaderValue::try_from(value).map_err(|err| Error::construction_failure(err.to_string()))
}

fn send<O: Operation>(handle: &Handle, request: HttpRequest) -> Outcome<O::Output> {
    trace!(method = %request.method(), uri = %request.uri(), "dispatching request");
    let response = handle.connector.call(request).map_err(|err| {
        debug!(error = %error_chain(&err), "connector failed");
        Error::from(err)
    })?;
    debug!(status = %response.status(), "received response");
    O::parse_response(&response)
}

type Completion<T> = Box<dyn FnOnce(Outcome<T>) + Send>;

/// Hands an outcome to its consumer at most once, whichever path gets there first.
pub(crate) struct Delivery<T> {
    slot: Arc<Mutex<Option<Completion<T>>>>,
}

impl<T> Clone for Delivery<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> Delivery<T> {
    pub(crate) fn new(completion: impl FnOnce(Outcome<T>) + Send + 'static) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(Box::new(completion)))),
        }
    }

    /// Returns false if the outcome was already delivered.
    pub(crate) fn deliver(&self, outcome: Outcome<T>) -> bool {
        // the lock is released before the completion runs
        let completion = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match completion {
            Some(completion) => {
                completion(outcome);
                true
            }
            None => false,
        }
    }
}

/// Delivers a dispatch failure if the task is dropped before it delivered its outcome.
struct DeliverOnDrop<T>(Delivery<T>);

impl<T> DeliverOnDrop<T> {
    fn deliver(&self, outcome: Outcome<T>) -> bool {
        self.0.deliver(outcome)
    }
}

impl<T> Drop for DeliverOnDrop<T> {
    fn drop(&mut self) {
        let dropped = Error::dispatch_failure(
            "the operation task was dropped before it produced an outcome",
        );
        if self.0.deliver(Err(dropped)) {
            warn!("operation task was dropped before it produced an outcome");
        }
    }
}

/// Submits one task that runs `O` and delivers the outcome.
///
/// If the executor refuses the task, a dispatch failure is delivered on the calling thread.
pub(crate) fn spawn<O: Operation>(
    handle: &Arc<Handle>,
    input: Arc<O::Input>,
    delivery: Delivery<O::Output>,
) {
    let guard = DeliverOnDrop(delivery.clone());
    let task_handle = handle.clone();
    let span = Span::current();
    let task = Task::new(move || {
        let _entered = span.enter();
        let outcome = invoke::<O>(&task_handle, &input);
        guard.deliver(outcome);
    });
    trace!(operation = O::NAME, "submitting operation task");
    if let Err(err) = handle.executor.submit(task) {
        warn!(operation = O::NAME, error = %err, "executor rejected the operation task");
        delivery.deliver(Err(Error::dispatch_failure(format!(
            "failed to submit {} to the executor: {}",
            O::NAME,
            err
        ))));
    }
}
