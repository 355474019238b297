/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_client::test_util::CaptureConnector;
use http::Method;
use pretty_assertions::assert_eq;
use protocol_test_helpers::{
    assert_ok, validate_body, validate_headers, validate_method, validate_path,
};
use servicequotas::input::{
    GetAwsDefaultServiceQuotaInput, GetServiceQuotaInput, ListServicesInput,
    RequestServiceQuotaIncreaseInput,
};
use servicequotas::model::RequestStatus;
use servicequotas::output::GetServiceQuotaOutput;
use servicequotas::{Client, Config, ErrorKind, Outcome, Region};
use smithy_async::test_util::{InlineExecutor, RejectingExecutor};
use std::sync::mpsc;

const QUOTA: &str = r#"{"Quota":{
    "ServiceCode":"ec2","ServiceName":"Amazon Elastic Compute Cloud (Amazon EC2)",
    "QuotaCode":"L-1216C47A","QuotaName":"Running On-Demand Standard instances",
    "Value":1152.0,"Unit":"None","Adjustable":true,"GlobalQuota":false
}}"#;

fn config(connector: &CaptureConnector) -> aws_client::Builder {
    Config::builder()
        .region(Region::from_static("us-east-1"))
        .http_connector(connector.clone())
        .executor(InlineExecutor::new())
}

fn quota_input() -> GetServiceQuotaInput {
    GetServiceQuotaInput::builder()
        .service_code("ec2")
        .quota_code("L-1216C47A")
        .build()
}

#[test]
fn get_service_quota() {
    let connector = CaptureConnector::ok(QUOTA);
    let client = Client::from_conf(config(&connector).build());
    let quota = client.get_service_quota(&quota_input()).unwrap().quota.unwrap();
    assert_eq!(quota.quota_code.as_deref(), Some("L-1216C47A"));
    assert_eq!(quota.value, Some(1152.0));
    assert_eq!(quota.adjustable, Some(true));

    let request = connector.expect_request();
    assert_eq!(
        request.uri().to_string(),
        "https://servicequotas.us-east-1.amazonaws.com/"
    );
    assert_ok(validate_method(&request, Method::POST));
    assert_ok(validate_path(&request, "/"));
    assert_ok(validate_headers(
        &request,
        &[
            ("x-amz-target", "ServiceQuotasV20190624.GetServiceQuota"),
            ("content-type", "application/x-amz-json-1.1"),
        ],
    ));
    assert_ok(validate_body(
        request.body(),
        r#"{"ServiceCode":"ec2","QuotaCode":"L-1216C47A"}"#,
        "application/x-amz-json-1.1",
    ));
}

#[test]
fn default_quota_uses_the_wire_name() {
    let connector = CaptureConnector::ok(QUOTA);
    let client = Client::from_conf(config(&connector).build());
    client
        .get_aws_default_service_quota(
            &GetAwsDefaultServiceQuotaInput::builder()
                .service_code("ec2")
                .quota_code("L-1216C47A")
                .build(),
        )
        .unwrap();
    assert_ok(validate_headers(
        &connector.expect_request(),
        &[("x-amz-target", "ServiceQuotasV20190624.GetAWSDefaultServiceQuota")],
    ));
}

#[test]
fn list_services_without_members_sends_an_empty_object() {
    let connector = CaptureConnector::ok(
        r#"{"Services":[{"ServiceCode":"ec2","ServiceName":"Amazon EC2"}],"NextToken":"n"}"#,
    );
    let client = Client::from_conf(config(&connector).build());
    let output = client
        .list_services(&ListServicesInput::builder().build())
        .unwrap();
    assert_eq!(output.services.unwrap()[0].service_code.as_deref(), Some("ec2"));
    assert_eq!(output.next_token.as_deref(), Some("n"));
    let request = connector.expect_request();
    assert_ok(validate_body(request.body(), "{}", "application/x-amz-json-1.1"));
}

#[test]
fn required_members_are_checked_in_order() {
    let connector = CaptureConnector::ok("{}");
    let client = Client::from_conf(config(&connector).build());
    let input = RequestServiceQuotaIncreaseInput::builder()
        .service_code("ec2")
        .quota_code("L-1216C47A");

    let err = client
        .request_service_quota_increase(&input.clone().build())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingParameter);
    assert_eq!(err.message(), Some("Missing required field [DesiredValue]"));

    let err = client
        .get_service_quota(&GetServiceQuotaInput::builder().quota_code("q").build())
        .unwrap_err();
    assert_eq!(err.message(), Some("Missing required field [ServiceCode]"));
    assert_eq!(connector.calls(), 0);

    client
        .request_service_quota_increase(&input.desired_value(1500.0).build())
        .unwrap();
    assert_eq!(connector.calls(), 1);
}

#[test]
fn every_required_member_is_checked_before_sending() {
    let connector = CaptureConnector::ok("{}");
    let client = Client::from_conf(config(&connector).build());
    let cases: Vec<(&str, Outcome<()>)> = vec![
        (
            "ServiceCode",
            client
                .get_service_quota(&GetServiceQuotaInput::builder().quota_code("q").build())
                .map(drop),
        ),
        (
            "QuotaCode",
            client
                .get_service_quota(&GetServiceQuotaInput::builder().service_code("ec2").build())
                .map(drop),
        ),
        (
            "ServiceCode",
            client
                .get_aws_default_service_quota(
                    &GetAwsDefaultServiceQuotaInput::builder().quota_code("q").build(),
                )
                .map(drop),
        ),
        (
            "QuotaCode",
            client
                .get_aws_default_service_quota(
                    &GetAwsDefaultServiceQuotaInput::builder().service_code("ec2").build(),
                )
                .map(drop),
        ),
        (
            "ServiceCode",
            client
                .request_service_quota_increase(
                    &RequestServiceQuotaIncreaseInput::builder()
                        .quota_code("q")
                        .desired_value(10.0)
                        .build(),
                )
                .map(drop),
        ),
        (
            "QuotaCode",
            client
                .request_service_quota_increase(
                    &RequestServiceQuotaIncreaseInput::builder()
                        .service_code("ec2")
                        .desired_value(10.0)
                        .build(),
                )
                .map(drop),
        ),
    ];
    for (field, outcome) in cases {
        let err = outcome.expect_err(field);
        assert_eq!(err.kind(), ErrorKind::MissingParameter, "{}", field);
        assert_eq!(
            err.message(),
            Some(format!("Missing required field [{}]", field).as_str())
        );
        assert!(!err.is_retryable(), "{}", field);
    }
    assert_eq!(connector.calls(), 0);
}

#[test]
fn quota_increase_request_status() {
    let connector = CaptureConnector::ok(
        r#"{"RequestedQuota":{"Id":"r-1","ServiceCode":"ec2","QuotaCode":"L-1216C47A","DesiredValue":1500.0,"Status":"PENDING","Created":1.7E9}}"#,
    );
    let client = Client::from_conf(config(&connector).build());
    let input = RequestServiceQuotaIncreaseInput::builder()
        .service_code("ec2")
        .quota_code("L-1216C47A")
        .desired_value(1500.0)
        .build();
    let change = client
        .request_service_quota_increase(&input)
        .unwrap()
        .requested_quota
        .unwrap();
    assert_eq!(change.status, Some(RequestStatus::Pending));
    assert_eq!(change.desired_value, Some(1500.0));
    assert_ok(validate_body(
        connector.expect_request().body(),
        r#"{"ServiceCode":"ec2","QuotaCode":"L-1216C47A","DesiredValue":1500.0}"#,
        "application/x-amz-json-1.1",
    ));
}

#[test]
fn throttling_is_retryable() {
    let connector = CaptureConnector::with_status(
        400,
        "b2c3",
        r#"{"__type":"com.amazonaws.servicequotas#TooManyRequestsException","message":"Rate exceeded"}"#,
    );
    let client = Client::from_conf(config(&connector).build());
    let err = client.get_service_quota(&quota_input()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Service);
    assert_eq!(err.code(), Some("TooManyRequestsException"));
    assert_eq!(err.message(), Some("Rate exceeded"));
    assert_eq!(err.request_id(), Some("b2c3"));
    assert!(err.is_retryable());
}

#[test]
fn fips_endpoint() {
    let connector = CaptureConnector::ok(QUOTA);
    let client = Client::from_conf(config(&connector).use_fips(true).build());
    client.get_service_quota(&quota_input()).unwrap();
    assert_eq!(
        connector.expect_request().uri().host(),
        Some("servicequotas-fips.us-east-1.amazonaws.com")
    );
}

#[test]
fn rejected_callback_runs_on_the_caller() {
    let connector = CaptureConnector::ok(QUOTA);
    let client = Client::from_conf(
        config(&connector)
            .executor(RejectingExecutor::shut_down())
            .build(),
    );
    let (tx, rx) = mpsc::channel();
    client.get_service_quota_async(
        &quota_input(),
        move |_client, _input, outcome, tx: mpsc::Sender<Outcome<GetServiceQuotaOutput>>| {
            tx.send(outcome).unwrap()
        },
        tx,
    );
    let err = rx.try_recv().expect("handler ran before returning").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Dispatch);
    assert_eq!(connector.calls(), 0);
}
