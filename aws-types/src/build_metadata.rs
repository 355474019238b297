/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Facts about the build, used to describe the client in user agent headers.

include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

/// Operating system family the crate was compiled for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum OsFamily {
    /// Microsoft Windows
    Windows,
    /// Linux
    Linux,
    /// macOS
    Macos,
    /// Android
    Android,
    /// iOS
    Ios,
    /// Anything else
    Other,
}

impl OsFamily {
    const fn from_target() -> Self {
        if cfg!(target_os = "windows") {
            OsFamily::Windows
        } else if cfg!(target_os = "android") {
            OsFamily::Android
        } else if cfg!(target_os = "linux") {
            OsFamily::Linux
        } else if cfg!(target_os = "macos") {
            OsFamily::Macos
        } else if cfg!(target_os = "ios") {
            OsFamily::Ios
        } else {
            OsFamily::Other
        }
    }

    /// Lowercase name, as used in user agents.
    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Windows => "windows",
            OsFamily::Linux => "linux",
            OsFamily::Macos => "macos",
            OsFamily::Android => "android",
            OsFamily::Ios => "ios",
            OsFamily::Other => "other",
        }
    }
}

/// Build metadata.
#[derive(Debug)]
pub struct BuildMetadata {
    /// Version of the compiler that built this crate.
    pub rust_version: &'static str,
    /// Version of the client runtime.
    pub core_pkg_version: &'static str,
    /// Target operating system.
    pub os_family: OsFamily,
}

/// Metadata of the current build.
pub static BUILD_METADATA: BuildMetadata = BuildMetadata {
    rust_version: RUST_VERSION,
    core_pkg_version: env!("CARGO_PKG_VERSION"),
    os_family: OsFamily::from_target(),
};
