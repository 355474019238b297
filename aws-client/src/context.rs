/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::invocation_id::random_uuid;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Caller supplied context handed back, untouched, to a completion handler.
///
/// Cheap to clone: clones share the same identifier and payload. The dispatcher accepts any
/// `Send + 'static` value as a context; this type is a convenient default.
#[derive(Clone)]
pub struct CallerContext {
    inner: Arc<Inner>,
}

struct Inner {
    uuid: String,
    payload: Option<Arc<dyn Any + Send + Sync>>,
}

impl CallerContext {
    /// A context with a random UUID.
    pub fn new() -> Self {
        Self::with_uuid(random_uuid())
    }

    /// A context with the given identifier.
    pub fn with_uuid(uuid: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                uuid: uuid.into(),
                payload: None,
            }),
        }
    }

    /// Attaches an opaque payload, replacing any previous one.
    pub fn with_payload<T: Any + Send + Sync>(self, payload: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                uuid: self.inner.uuid.clone(),
                payload: Some(Arc::new(payload)),
            }),
        }
    }

    /// The context identifier.
    pub fn uuid(&self) -> &str {
        &self.inner.uuid
    }

    /// The payload, if one of type `T` was attached.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.inner.payload.as_deref()?.downcast_ref()
    }
}

impl Default for CallerContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CallerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallerContext")
            .field("uuid", &self.inner.uuid)
            .field("has_payload", &self.inner.payload.is_some())
            .finish()
    }
}
