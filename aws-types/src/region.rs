/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Regions and region providers.

use crate::env::Env;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// The region to send requests to.
///
/// See <http://docs.aws.amazon.com/general/latest/gr/rande.html> for
/// information on AWS regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(Cow<'static, str>);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Region {
    /// Creates a region from an owned or borrowed name.
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    /// Creates a region from a static name.
    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }

    /// Returns true if the region belongs to the China partition.
    pub fn is_china(&self) -> bool {
        self.0.starts_with("cn-")
    }
}

/// Provides a [`Region`] to use with AWS requests.
pub trait ProvideRegion: Send + Sync {
    /// Returns the region, if one is known.
    fn region(&self) -> Option<Region>;
}

impl ProvideRegion for Region {
    fn region(&self) -> Option<Region> {
        Some(self.clone())
    }
}

impl ProvideRegion for Option<Region> {
    fn region(&self) -> Option<Region> {
        self.clone()
    }
}

/// Loads the region from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`.
#[derive(Debug, Default)]
pub struct EnvironmentVariableRegionProvider {
    env: Env,
}

impl EnvironmentVariableRegionProvider {
    /// Reads the real process environment.
    pub fn new() -> Self {
        EnvironmentVariableRegionProvider { env: Env::real() }
    }

    /// Reads from `env`.
    pub fn with_env(env: Env) -> Self {
        EnvironmentVariableRegionProvider { env }
    }
}

impl ProvideRegion for EnvironmentVariableRegionProvider {
    fn region(&self) -> Option<Region> {
        self.env
            .var("AWS_REGION")
            .or_else(|| self.env.var("AWS_DEFAULT_REGION"))
            .filter(|region| !region.is_empty())
            .map(Region::new)
    }
}
