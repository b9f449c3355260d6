//! Invocation context handed to the handler.
//!
//! Every method takes `self` by value, so `status` can be set at most once
//! and exactly one of `succeed` or `fail` ends the invocation.

use serde::Serialize;

use crate::error::HandlerError;

const DEFAULT_STATUS: u16 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExportResult {
    /// Seconds since the invocation started.
    pub latency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: ExportResult,
}

#[derive(Debug, Default)]
pub struct Context;

/// Context after `status` has been called.
#[derive(Debug)]
pub struct StatusSet {
    code: u16,
}

impl Context {
    pub fn new() -> Self {
        Self
    }

    pub fn status(self, code: u16) -> StatusSet {
        StatusSet { code }
    }

    pub fn succeed(self, result: ExportResult) -> Response {
        self.status(DEFAULT_STATUS).succeed(result)
    }

    pub fn fail(self, err: HandlerError) -> HandlerError {
        fail(err)
    }
}

impl StatusSet {
    pub fn succeed(self, result: ExportResult) -> Response {
        tracing::info!(status = self.code, latency = result.latency, "invocation succeeded");
        Response {
            status_code: self.code,
            body: result,
        }
    }

    pub fn fail(self, err: HandlerError) -> HandlerError {
        fail(err)
    }
}

fn fail(err: HandlerError) -> HandlerError {
    tracing::error!(error = %err, "invocation failed");
    err
}
