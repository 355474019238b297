/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Process environment lookups that tests can replace with fixed variables.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Where client configuration reads environment variables from.
///
/// The process environment is shared by every test running in parallel, so configuration code
/// takes an `Env` instead of calling [`std::env::var`] directly.
#[derive(Clone, Default)]
pub struct Env {
    fixed: Option<Arc<HashMap<String, String>>>,
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fixed {
            None => f.write_str("Env(process)"),
            Some(vars) => write!(f, "Env({} fixed variables)", vars.len()),
        }
    }
}

impl Env {
    /// The environment of the running process.
    pub fn real() -> Self {
        Self::default()
    }

    /// An environment that holds exactly `vars`.
    ///
    /// ```rust
    /// use aws_types::env::Env;
    /// let env = Env::from_slice(&[("AWS_REGION", "eu-west-1")]);
    /// assert_eq!(env.var("AWS_REGION").as_deref(), Some("eu-west-1"));
    /// assert_eq!(env.var("HOME"), None);
    /// ```
    pub fn from_slice(vars: &[(&str, &str)]) -> Self {
        let vars = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self {
            fixed: Some(Arc::new(vars)),
        }
    }

    /// The value of `name`, if it is set and valid unicode.
    pub fn var(&self, name: &str) -> Option<String> {
        match &self.fixed {
            None => std::env::var(name).ok(),
            Some(vars) => vars.get(name).cloned(),
        }
    }

    /// The value of `name` read as a boolean.
    ///
    /// `true` and `false` match in any case. Anything else is logged and ignored.
    pub fn flag(&self, name: &str) -> Option<bool> {
        let value = self.var(name)?;
        match value.to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => {
                tracing::warn!(variable = name, value = %value, "ignoring flag that is neither `true` nor `false`");
                None
            }
        }
    }
}
