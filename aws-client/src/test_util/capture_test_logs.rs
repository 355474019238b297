/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// Set `VERBOSE_TEST_LOGS` to also print captured logs through the test harness.
const VERBOSE_TEST_LOGS: &str = "VERBOSE_TEST_LOGS";

/// Stops capturing when dropped.
#[derive(Debug)]
pub struct LogCaptureGuard {
    _default: DefaultGuard,
}

/// Logs captured by [`capture_test_logs`].
#[derive(Clone, Debug, Default)]
pub struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Everything logged so far, one formatted event per line.
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Captures every event logged on the current thread, down to `TRACE`, until the guard drops.
///
/// Operation tasks that run on executor threads log to the global subscriber instead; use an
/// inline executor when a test needs their logs.
#[must_use]
pub fn capture_test_logs() -> (LogCaptureGuard, CapturedLogs) {
    let logs = CapturedLogs::default();
    let writer = CaptureWriter {
        logs: logs.clone(),
        echo: std::env::var_os(VERBOSE_TEST_LOGS).is_some(),
    };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(writer)
        .finish();
    let guard = LogCaptureGuard {
        _default: tracing::subscriber::set_default(subscriber),
    };
    (guard, logs)
}

#[derive(Clone)]
struct CaptureWriter {
    logs: CapturedLogs,
    echo: bool,
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.logs
            .buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        if self.echo {
            // print! goes through the test harness's output capture
            print!("{}", String::from_utf8_lossy(buf));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
