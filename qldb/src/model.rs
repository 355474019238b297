/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shapes shared by several QLDB operations.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Declares a string enum that keeps unrecognized values in `Unknown`.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+ }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this version of the client does not know about.
            Unknown(String),
        }

        impl $name {
            /// Returns the wire value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $value, )+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Every value known to this version of the client.
            pub fn values() -> &'static [&'static str] {
                &[$( $value, )+]
            }
        }

        impl<'a> From<&'a str> for $name {
            fn from(value: &'a str) -> Self {
                match value {
                    $( $value => $name::$variant, )+
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Ok($name::from(value.as_str()))
            }
        }
    };
}

string_enum! {
    /// Permissions mode of a ledger.
    PermissionsMode {
        /// Legacy mode: any user with `SendCommand` access may run any PartiQL command.
        AllowAll => "ALLOW_ALL",
        /// Table level and command level permissions are enforced.
        Standard => "STANDARD",
    }
}

string_enum! {
    /// Lifecycle state of a ledger.
    LedgerState {
        #[allow(missing_docs)]
        Creating => "CREATING",
        #[allow(missing_docs)]
        Active => "ACTIVE",
        #[allow(missing_docs)]
        Deleting => "DELETING",
        #[allow(missing_docs)]
        Deleted => "DELETED",
    }
}

string_enum! {
    /// Status of encryption at rest for a ledger.
    EncryptionStatus {
        #[allow(missing_docs)]
        Enabled => "ENABLED",
        #[allow(missing_docs)]
        Updating => "UPDATING",
        /// The customer managed key cannot be used; the ledger is impaired.
        KmsKeyInaccessible => "KMS_KEY_INACCESSIBLE",
    }
}

/// A ledger returned by `ListLedgers`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LedgerSummary {
    /// Name of the ledger.
    pub name: Option<String>,
    /// Current state of the ledger.
    pub state: Option<LedgerState>,
    /// Creation time, in seconds since the Unix epoch.
    pub creation_date_time: Option<f64>,
}

/// Encryption at rest settings of a ledger.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LedgerEncryptionDescription {
    /// ARN of the key used for encryption at rest.
    pub kms_key_arn: Option<String>,
    /// Current encryption status.
    pub encryption_status: Option<EncryptionStatus>,
    /// When the key became inaccessible, in seconds since the Unix epoch.
    pub inaccessible_kms_key_date_time: Option<f64>,
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_values_are_kept() {
        assert_eq!(PermissionsMode::from("STANDARD"), PermissionsMode::Standard);
        let mode: PermissionsMode = "SOMETHING_NEW".parse().unwrap();
        assert_eq!(mode, PermissionsMode::Unknown("SOMETHING_NEW".into()));
        assert_eq!(mode.as_str(), "SOMETHING_NEW");
        assert_eq!(PermissionsMode::values(), &["ALLOW_ALL", "STANDARD"]);
    }

    #[test]
    fn enums_use_wire_values() {
        assert_eq!(
            serde_json::to_string(&PermissionsMode::AllowAll).unwrap(),
            r#""ALLOW_ALL""#
        );
        let summary: LedgerSummary = serde_json::from_str(
            r#"{"Name":"a","State":"KMS_KEY_INACCESSIBLE","CreationDateTime":1.6E9}"#,
        )
        .unwrap();
        assert_eq!(
            summary.state,
            Some(LedgerState::Unknown("KMS_KEY_INACCESSIBLE".into()))
        );
        assert_eq!(summary.creation_date_time, Some(1.6e9));
    }
}
