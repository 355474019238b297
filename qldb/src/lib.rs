/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Client for the Amazon QLDB control plane: creating, describing, updating, deleting, listing,
//! and tagging ledgers.
//!
//! Every operation is available in three forms. For `describe_ledger`:
//!
//! - `describe_ledger` blocks the calling thread and returns the [`Outcome`];
//! - `describe_ledger_callable` runs on the client's executor and returns a future of the outcome;
//! - `describe_ledger_async` runs on the client's executor and passes the outcome to a handler.
//!
//! ```no_run
//! use qldb::input::DescribeLedgerInput;
//!
//! let client = qldb::Client::from_env();
//! let input = DescribeLedgerInput::builder().name("my-ledger").build();
//! match client.describe_ledger(&input) {
//!     Ok(ledger) => println!("{:?} is {:?}", ledger.name, ledger.state),
//!     Err(err) => eprintln!("failed to describe the ledger: {}", err),
//! }
//! ```

mod client;
pub mod input;
mod json_ser;
pub mod model;
pub mod operation;
pub mod output;

pub use aws_client::Config;
pub use aws_types::region::Region;
pub use client::{Client, SERVICE};
pub use smithy_types::{Error, ErrorKind, Outcome};
