/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! One type per QLDB operation.

use crate::input::{
    CreateLedgerInput, DeleteLedgerInput, DescribeLedgerInput, ListLedgersInput,
    ListTagsForResourceInput, TagResourceInput, UpdateLedgerInput,
};
use crate::json_ser::{CreateLedgerBody, TagResourceBody, UpdateLedgerBody};
use crate::output::{
    CreateLedgerOutput, DeleteLedgerOutput, DescribeLedgerOutput, ListLedgersOutput,
    ListTagsForResourceOutput, TagResourceOutput, UpdateLedgerOutput,
};
use aws_client::operation::{parse_json, require, require_label, serialize_json};
use aws_client::Operation;
use bytes::Bytes;
use http::Method;
use smithy_http::connector::HttpResponse;
use smithy_types::{Error, Outcome};

/// Creates a ledger.
#[derive(Debug, Clone, Copy)]
pub struct CreateLedger;

impl Operation for CreateLedger {
    type Input = CreateLedgerInput;
    type Output = CreateLedgerOutput;

    const NAME: &'static str = "CreateLedger";
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/ledgers";

    fn validate(input: &CreateLedgerInput) -> Result<(), Error> {
        require("Name", input.name.as_ref())?;
        require("PermissionsMode", input.permissions_mode.as_ref())
    }

    fn serialize_body(input: &CreateLedgerInput) -> Result<Bytes, Error> {
        serialize_json(&CreateLedgerBody::from(input))
    }

    fn parse_response(response: &HttpResponse) -> Outcome<CreateLedgerOutput> {
        parse_json(response)
    }
}

/// Returns information about a ledger.
#[derive(Debug, Clone, Copy)]
pub struct DescribeLedger;

impl Operation for DescribeLedger {
    type Input = DescribeLedgerInput;
    type Output = DescribeLedgerOutput;

    const NAME: &'static str = "DescribeLedger";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/ledgers/{name}";

    fn validate(input: &DescribeLedgerInput) -> Result<(), Error> {
        require_label("Name", input.name.as_deref())
    }

    fn label(input: &DescribeLedgerInput, name: &str) -> Option<String> {
        match name {
            "name" => input.name.clone(),
            _ => None,
        }
    }

    fn parse_response(response: &HttpResponse) -> Outcome<DescribeLedgerOutput> {
        parse_json(response)
    }
}

/// Updates a ledger.
#[derive(Debug, Clone, Copy)]
pub struct UpdateLedger;

impl Operation for UpdateLedger {
    type Input = UpdateLedgerInput;
    type Output = UpdateLedgerOutput;

    const NAME: &'static str = "UpdateLedger";
    const METHOD: Method = Method::PATCH;
    const PATH: &'static str = "/ledgers/{name}";

    fn validate(input: &UpdateLedgerInput) -> Result<(), Error> {
        require_label("Name", input.name.as_deref())
    }

    fn label(input: &UpdateLedgerInput, name: &str) -> Option<String> {
        match name {
            "name" => input.name.clone(),
            _ => None,
        }
    }

    fn serialize_body(input: &UpdateLedgerInput) -> Result<Bytes, Error> {
        serialize_json(&UpdateLedgerBody::from(input))
    }

    fn parse_response(response: &HttpResponse) -> Outcome<UpdateLedgerOutput> {
        parse_json(response)
    }
}

/// Deletes a ledger.
#[derive(Debug, Clone, Copy)]
pub struct DeleteLedger;

impl Operation for DeleteLedger {
    type Input = DeleteLedgerInput;
    type Output = DeleteLedgerOutput;

    const NAME: &'static str = "DeleteLedger";
    const METHOD: Method = Method::DELETE;
    const PATH: &'static str = "/ledgers/{name}";

    fn validate(input: &DeleteLedgerInput) -> Result<(), Error> {
        require_label("Name", input.name.as_deref())
    }

    fn label(input: &DeleteLedgerInput, name: &str) -> Option<String> {
        match name {
            "name" => input.name.clone(),
            _ => None,
        }
    }

    fn parse_response(response: &HttpResponse) -> Outcome<DeleteLedgerOutput> {
        parse_json(response)
    }
}

/// Lists ledgers.
#[derive(Debug, Clone, Copy)]
pub struct ListLedgers;

impl Operation for ListLedgers {
    type Input = ListLedgersInput;
    type Output = ListLedgersOutput;

    const NAME: &'static str = "ListLedgers";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/ledgers";

    fn validate(_input: &ListLedgersInput) -> Result<(), Error> {
        Ok(())
    }

    fn query(input: &ListLedgersInput) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(max_results) = input.max_results {
            query.push(("max_results", max_results.to_string()));
        }
        if let Some(next_token) = &input.next_token {
            query.push(("next_token", next_token.clone()));
        }
        query
    }

    fn parse_response(response: &HttpResponse) -> Outcome<ListLedgersOutput> {
        parse_json(response)
    }
}

/// Tags a ledger.
#[derive(Debug, Clone, Copy)]
pub struct TagResource;

impl Operation for TagResource {
    type Input = TagResourceInput;
    type Output = TagResourceOutput;

    const NAME: &'static str = "TagResource";
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/tags/{resourceArn}";

    fn validate(input: &TagResourceInput) -> Result<(), Error> {
        require_label("ResourceArn", input.resource_arn.as_deref())?;
        require("Tags", input.tags.as_ref())
    }

    fn label(input: &TagResourceInput, name: &str) -> Option<String> {
        match name {
            "resourceArn" => input.resource_arn.clone(),
            _ => None,
        }
    }

    fn serialize_body(input: &TagResourceInput) -> Result<Bytes, Error> {
        serialize_json(&TagResourceBody::from(input))
    }

    fn parse_response(response: &HttpResponse) -> Outcome<TagResourceOutput> {
        parse_json(response)
    }
}

/// Lists the tags of a ledger.
#[derive(Debug, Clone, Copy)]
pub struct ListTagsForResource;

impl Operation for ListTagsForResource {
    type Input = ListTagsForResourceInput;
    type Output = ListTagsForResourceOutput;

    const NAME: &'static str = "ListTagsForResource";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/tags/{resourceArn}";

    fn validate(input: &ListTagsForResourceInput) -> Result<(), Error> {
        require_label("ResourceArn", input.resource_arn.as_deref())
    }

    fn label(input: &ListTagsForResourceInput, name: &str) -> Option<String> {
        match name {
            "resourceArn" => input.resource_arn.clone(),
            _ => None,
        }
    }

    fn parse_response(response: &HttpResponse) -> Outcome<ListTagsForResourceOutput> {
        parse_json(response)
    }
}
