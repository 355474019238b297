/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! One type per Service Quotas operation. All of them are `POST /` with a JSON body.

use crate::input::{
    GetAwsDefaultServiceQuotaInput, GetServiceQuotaInput, ListServicesInput,
    RequestServiceQuotaIncreaseInput,
};
use crate::output::{
    GetAwsDefaultServiceQuotaOutput, GetServiceQuotaOutput, ListServicesOutput,
    RequestServiceQuotaIncreaseOutput,
};
use aws_client::operation::{parse_json, require, serialize_json};
use aws_client::Operation;
use bytes::Bytes;
use http::Method;
use smithy_http::connector::HttpResponse;
use smithy_types::{Error, Outcome};

/// Returns the applied value of a quota.
#[derive(Debug, Clone, Copy)]
pub struct GetServiceQuota;

impl Operation for GetServiceQuota {
    type Input = GetServiceQuotaInput;
    type Output = GetServiceQuotaOutput;

    const NAME: &'static str = "GetServiceQuota";
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/";

    fn validate(input: &GetServiceQuotaInput) -> Result<(), Error> {
        require("ServiceCode", input.service_code.as_ref())?;
        require("QuotaCode", input.quota_code.as_ref())
    }

    fn serialize_body(input: &GetServiceQuotaInput) -> Result<Bytes, Error> {
        serialize_json(input)
    }

    fn parse_response(response: &HttpResponse) -> Outcome<GetServiceQuotaOutput> {
        parse_json(response)
    }
}

/// Returns the default value of a quota.
#[derive(Debug, Clone, Copy)]
pub struct GetAwsDefaultServiceQuota;

impl Operation for GetAwsDefaultServiceQuota {
    type Input = GetAwsDefaultServiceQuotaInput;
    type Output = GetAwsDefaultServiceQuotaOutput;

    const NAME: &'static str = "GetAWSDefaultServiceQuota";
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/";

    fn validate(input: &GetAwsDefaultServiceQuotaInput) -> Result<(), Error> {
        require("ServiceCode", input.service_code.as_ref())?;
        require("QuotaCode", input.quota_code.as_ref())
    }

    fn serialize_body(input: &GetAwsDefaultServiceQuotaInput) -> Result<Bytes, Error> {
        serialize_json(input)
    }

    fn parse_response(response: &HttpResponse) -> Outcome<GetAwsDefaultServiceQuotaOutput> {
        parse_json(response)
    }
}

/// Lists the services that have quotas.
#[derive(Debug, Clone, Copy)]
pub struct ListServices;

impl Operation for ListServices {
    type Input = ListServicesInput;
    type Output = ListServicesOutput;

    const NAME: &'static str = "ListServices";
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/";

    fn validate(_input: &ListServicesInput) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_body(input: &ListServicesInput) -> Result<Bytes, Error> {
        serialize_json(input)
    }

    fn parse_response(response: &HttpResponse) -> Outcome<ListServicesOutput> {
        parse_json(response)
    }
}

/// Requests a new value for a quota.
#[derive(Debug, Clone, Copy)]
pub struct RequestServiceQuotaIncrease;

impl Operation for RequestServiceQuotaIncrease {
    type Input = RequestServiceQuotaIncreaseInput;
    type Output = RequestServiceQuotaIncreaseOutput;

    const NAME: &'static str = "RequestServiceQuotaIncrease";
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/";

    fn validate(input: &RequestServiceQuotaIncreaseInput) -> Result<(), Error> {
        require("ServiceCode", input.service_code.as_ref())?;
        require("QuotaCode", input.quota_code.as_ref())?;
        require("DesiredValue", input.desired_value.as_ref())
    }

    fn serialize_body(input: &RequestServiceQuotaIncreaseInput) -> Result<Bytes, Error> {
        serialize_json(input)
    }

    fn parse_response(response: &HttpResponse) -> Outcome<RequestServiceQuotaIncreaseOutput> {
        parse_json(response)
    }
}
