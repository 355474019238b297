/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::operation::{
    CreateLedger, DeleteLedger, DescribeLedger, ListLedgers, ListTagsForResource, TagResource,
    UpdateLedger,
};
use aws_client::{Config, ServiceMetadata};
use smithy_http::operation::Protocol;

/// Static description of the QLDB service.
pub static SERVICE: ServiceMetadata = ServiceMetadata {
    name: "QLDB",
    endpoint_prefix: "qldb",
    signing_name: "qldb",
    api_version: "2019-01-02",
    protocol: Protocol::RestJson1,
    target_prefix: None,
};

/// Client for Amazon QLDB.
///
/// Cloning is cheap; clones share the connector and the executor.
#[derive(Clone, Debug)]
pub struct Client {
    inner: aws_client::Client,
}

impl Client {
    /// Creates a client from `conf`.
    pub fn from_conf(conf: Config) -> Self {
        Client {
            inner: aws_client::Client::from_conf(&SERVICE, conf),
        }
    }

    /// Creates a client configured from the environment.
    ///
    /// See [`Config::from_env`].
    pub fn from_env() -> Self {
        Self::from_conf(Config::from_env().build())
    }

    /// The configuration of this client.
    pub fn conf(&self) -> &Config {
        self.inner.conf()
    }
}

aws_client::operations! {
    Client {
        /// Creates a ledger. `Name` and `PermissionsMode` are required.
        create_ledger, create_ledger_callable, create_ledger_async => CreateLedger;
        /// Returns information about a ledger.
        describe_ledger, describe_ledger_callable, describe_ledger_async => DescribeLedger;
        /// Updates the deletion protection or encryption settings of a ledger.
        update_ledger, update_ledger_callable, update_ledger_async => UpdateLedger;
        /// Deletes a ledger. Deletion protection must be disabled first.
        delete_ledger, delete_ledger_callable, delete_ledger_async => DeleteLedger;
        /// Lists the ledgers of the account, one page at a time.
        list_ledgers, list_ledgers_callable, list_ledgers_async => ListLedgers;
        /// Adds tags to a ledger.
        tag_resource, tag_resource_callable, tag_resource_async => TagResource;
        /// Returns the tags of a ledger.
        list_tags_for_resource, list_tags_for_resource_callable, list_tags_for_resource_async => ListTagsForResource;
    }
}
