/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_client::test_util::CaptureConnector;
use http::Method;
use pretty_assertions::assert_eq;
use protocol_test_helpers::{
    assert_ok, forbid_headers, forbid_query_params, validate_body, validate_headers,
    validate_method, validate_path, validate_query_string,
};
use qldb::input::{
    CreateLedgerInput, DeleteLedgerInput, DescribeLedgerInput, ListLedgersInput,
    ListTagsForResourceInput, TagResourceInput, UpdateLedgerInput,
};
use qldb::model::{EncryptionStatus, LedgerState, PermissionsMode};
use qldb::{Client, Config, ErrorKind, Outcome, Region};
use smithy_async::test_util::{InlineExecutor, ManualExecutor};
use std::sync::mpsc;

const LEDGER: &str = r#"{
    "Name": "my-ledger",
    "Arn": "arn:aws:qldb:us-east-1:123456789012:ledger/my-ledger",
    "State": "ACTIVE",
    "CreationDateTime": 1.625E9,
    "PermissionsMode": "STANDARD",
    "DeletionProtection": true,
    "EncryptionDescription": {
        "KmsKeyArn": "AWS_OWNED_KMS_KEY",
        "EncryptionStatus": "ENABLED"
    }
}"#;

fn client(connector: &CaptureConnector) -> Client {
    Client::from_conf(
        Config::builder()
            .region(Region::from_static("us-east-1"))
            .http_connector(connector.clone())
            .executor(InlineExecutor::new())
            .build(),
    )
}

#[test]
fn create_ledger() {
    let connector = CaptureConnector::ok(
        r#"{"Name":"my-ledger","State":"CREATING","PermissionsMode":"STANDARD","DeletionProtection":true}"#,
    );
    let input = CreateLedgerInput::builder()
        .name("my-ledger")
        .permissions_mode(PermissionsMode::Standard)
        .tags("team", "ledgers")
        .build();
    let output = client(&connector).create_ledger(&input).unwrap();
    assert_eq!(output.name.as_deref(), Some("my-ledger"));
    assert_eq!(output.state, Some(LedgerState::Creating));
    assert_eq!(output.deletion_protection, Some(true));

    let request = connector.expect_request();
    assert_eq!(
        request.uri().to_string(),
        "https://qldb.us-east-1.amazonaws.com/ledgers"
    );
    assert_ok(validate_method(&request, Method::POST));
    assert_ok(validate_headers(
        &request,
        &[("content-type", "application/json")],
    ));
    assert_ok(forbid_headers(&request, &["x-amz-target"]));
    assert_ok(validate_body(
        request.body(),
        r#"{"Name":"my-ledger","PermissionsMode":"STANDARD","Tags":{"team":"ledgers"}}"#,
        "application/json",
    ));
}

#[test]
fn create_ledger_requires_name_then_permissions_mode() {
    let connector = CaptureConnector::ok("{}");
    let client = client(&connector);

    let err = client
        .create_ledger(&CreateLedgerInput::builder().build())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingParameter);
    assert_eq!(err.message(), Some("Missing required field [Name]"));

    let err = client
        .create_ledger(&CreateLedgerInput::builder().name("my-ledger").build())
        .unwrap_err();
    assert_eq!(
        err.message(),
        Some("Missing required field [PermissionsMode]")
    );
    assert_eq!(connector.calls(), 0);
}

#[test]
fn every_required_member_is_checked_before_sending() {
    let connector = CaptureConnector::ok("{}");
    let client = client(&connector);
    let cases: Vec<(&str, Outcome<()>)> = vec![
        (
            "Name",
            client.create_ledger(&CreateLedgerInput::builder().build()).map(drop),
        ),
        (
            "PermissionsMode",
            client
                .create_ledger(&CreateLedgerInput::builder().name("my-ledger").build())
                .map(drop),
        ),
        (
            "Name",
            client.describe_ledger(&DescribeLedgerInput::builder().build()).map(drop),
        ),
        (
            "Name",
            client
                .update_ledger(&UpdateLedgerInput::builder().deletion_protection(false).build())
                .map(drop),
        ),
        (
            "Name",
            client.delete_ledger(&DeleteLedgerInput::builder().build()).map(drop),
        ),
        (
            "ResourceArn",
            client
                .tag_resource(&TagResourceInput::builder().tags("team", "ledgers").build())
                .map(drop),
        ),
        (
            "Tags",
            client
                .tag_resource(
                    &TagResourceInput::builder()
                        .resource_arn("arn:aws:qldb:us-east-1:123456789012:ledger/my-ledger")
                        .build(),
                )
                .map(drop),
        ),
        (
            "ResourceArn",
            client
                .list_tags_for_resource(&ListTagsForResourceInput::builder().build())
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
fn describe_ledger() {
    let connector = CaptureConnector::ok(LEDGER);
    let output = client(&connector)
        .describe_ledger(&DescribeLedgerInput::builder().name("my-ledger").build())
        .unwrap();
    assert_eq!(output.state, Some(LedgerState::Active));
    assert_eq!(output.permissions_mode, Some(PermissionsMode::Standard));
    assert_eq!(output.creation_date_time, Some(1.625e9));
    let encryption = output.encryption_description.unwrap();
    assert_eq!(encryption.encryption_status, Some(EncryptionStatus::Enabled));

    let request = connector.expect_request();
    assert_ok(validate_method(&request, Method::GET));
    assert_ok(validate_path(&request, "/ledgers/my-ledger"));
    assert_ok(forbid_headers(&request, &["content-type"]));
    assert!(request.body().is_empty());
    assert!(request.headers().contains_key("user-agent"));
}

#[test]
fn describe_ledger_rejects_an_empty_name() {
    let connector = CaptureConnector::ok(LEDGER);
    let err = client(&connector)
        .describe_ledger(&DescribeLedgerInput::builder().name("").build())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingParameter);
    assert_eq!(connector.calls(), 0);
}

#[test]
fn update_ledger() {
    let connector = CaptureConnector::ok(LEDGER);
    let input = UpdateLedgerInput::builder()
        .name("my-ledger")
        .deletion_protection(false)
        .build();
    client(&connector).update_ledger(&input).unwrap();

    let request = connector.expect_request();
    assert_ok(validate_method(&request, Method::PATCH));
    assert_ok(validate_path(&request, "/ledgers/my-ledger"));
    assert_ok(validate_body(
        request.body(),
        r#"{"DeletionProtection":false}"#,
        "application/json",
    ));
}

#[test]
fn delete_ledger_with_an_empty_response() {
    let connector = CaptureConnector::ok("");
    client(&connector)
        .delete_ledger(&DeleteLedgerInput::builder().name("my-ledger").build())
        .unwrap();
    let request = connector.expect_request();
    assert_ok(validate_method(&request, Method::DELETE));
    assert_ok(validate_path(&request, "/ledgers/my-ledger"));
}

#[test]
fn list_ledgers_pagination_parameters() {
    let connector = CaptureConnector::ok(
        r#"{"Ledgers":[{"Name":"a","State":"ACTIVE"},{"Name":"b","State":"DELETING"}],"NextToken":"t2"}"#,
    );
    let client = client(&connector);
    let output = client
        .list_ledgers(
            &ListLedgersInput::builder()
                .max_results(2)
                .next_token("t 1")
                .build(),
        )
        .unwrap();
    let names: Vec<_> = output
        .ledgers
        .unwrap()
        .into_iter()
        .map(|ledger| ledger.name.unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(output.next_token.as_deref(), Some("t2"));

    client.list_ledgers(&ListLedgersInput::builder().build()).unwrap();
    let requests = connector.requests();
    assert_ok(validate_query_string(
        &requests[0],
        &["max_results=2", "next_token=t%201"],
    ));
    assert_ok(forbid_query_params(&requests[1], &["max_results", "next_token"]));
}

#[test]
fn tag_resource_encodes_the_arn() {
    let connector = CaptureConnector::ok("{}");
    let client = client(&connector);
    let arn = "arn:aws:qldb:us-east-1:123456789012:ledger/my-ledger";
    client
        .tag_resource(
            &TagResourceInput::builder()
                .resource_arn(arn)
                .tags("env", "prod")
                .build(),
        )
        .unwrap();

    let err = client
        .tag_resource(&TagResourceInput::builder().resource_arn(arn).build())
        .unwrap_err();
    assert_eq!(err.message(), Some("Missing required field [Tags]"));

    let request = connector.expect_request();
    assert_ok(validate_path(
        &request,
        "/tags/arn%3Aaws%3Aqldb%3Aus-east-1%3A123456789012%3Aledger%2Fmy-ledger",
    ));
    assert_ok(validate_body(
        request.body(),
        r#"{"Tags":{"env":"prod"}}"#,
        "application/json",
    ));
}

#[test]
fn list_tags_for_resource() {
    let connector = CaptureConnector::ok(r#"{"Tags":{"env":"prod"}}"#);
    let output = client(&connector)
        .list_tags_for_resource(
            &ListTagsForResourceInput::builder()
                .resource_arn("arn:aws:qldb:us-east-1:1:ledger/a")
                .build(),
        )
        .unwrap();
    assert_eq!(
        output.tags.unwrap().get("env").map(String::as_str),
        Some("prod")
    );
}

#[test]
fn service_errors() {
    let connector = CaptureConnector::new(|_request| {
        http::Response::builder()
            .status(404)
            .header("x-amzn-requestid", "4d2b6c1e")
            .header(
                "x-amzn-errortype",
                "ResourceNotFoundException:http://internal.amazon.com/coral/com.amazonaws.qldb/",
            )
            .body(bytes::Bytes::from_static(
                br#"{"Message":"Ledger my-ledger does not exist","ResourceType":"LEDGER"}"#,
            ))
            .unwrap()
    });
    let err = client(&connector)
        .describe_ledger(&DescribeLedgerInput::builder().name("my-ledger").build())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Service);
    assert_eq!(err.code(), Some("ResourceNotFoundException"));
    assert_eq!(err.message(), Some("Ledger my-ledger does not exist"));
    assert_eq!(err.request_id(), Some("4d2b6c1e"));
    assert!(!err.is_retryable());
}

#[test]
fn callable_and_callback_forms() {
    let connector = CaptureConnector::ok(LEDGER);
    let executor = ManualExecutor::new();
    let client = Client::from_conf(
        Config::builder()
            .region(Region::from_static("us-east-1"))
            .http_connector(connector.clone())
            .executor(executor.clone())
            .build(),
    );
    let input = DescribeLedgerInput::builder().name("my-ledger").build();
    let future = client.describe_ledger_callable(&input);
    let (tx, rx) = mpsc::channel();
    client.describe_ledger_async(
        &input,
        move |_client, input, outcome, request_number: u32| {
            tx.send((input.name.clone(), outcome, request_number))
                .unwrap();
        },
        7,
    );
    assert_eq!(executor.submitted(), 2);
    assert_eq!(connector.calls(), 0);

    executor.run_all();
    let sync = client.describe_ledger(&input);
    assert_eq!(future.wait(), sync);
    let (name, outcome, request_number) = rx.recv().unwrap();
    assert_eq!(name.as_deref(), Some("my-ledger"));
    assert_eq!(outcome, sync);
    assert_eq!(request_number, 7);
    assert_eq!(connector.calls(), 3);
}
