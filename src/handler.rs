use serde::Deserialize;
use std::sync::Once;
use std::time::Instant;

use crate::config::Config;
use crate::context::{Context, ExportResult, Response};
use crate::error::HandlerError;
use crate::export::{export_all, Mode};

static INIT: Once = Once::new();

/// Event payload. Only `mode` is read; anything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub mode: Mode,
}

impl ExportRequest {
    // Payloads that don't parse fall back to the default request
    pub fn from_payload(payload: serde_json::Value) -> Self {
        serde_json::from_value(payload).unwrap_or_default()
    }
}

// Initialize Rayon global thread pool (only once per Lambda container)
pub fn init_thread_pool(workers: usize) {
    INIT.call_once(|| {
        let _ = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build_global();
    });
}

// Main Lambda handler - writes the five variants and reports latency
pub async fn function_handler(
    request: ExportRequest,
    config: &Config,
) -> Result<Response, HandlerError> {
    let start = Instant::now();
    let ctx = Context::new();

    let source = config.source.clone();
    let output_dir = config.output_dir.clone();
    let quality = config.jpeg_quality;
    let mode = request.mode;

    // Decode and encode are CPU bound, keep them off the async workers
    let written = match tokio::task::spawn_blocking(move || {
        export_all(&source, &output_dir, quality, mode)
    })
    .await
    {
        Ok(Ok(written)) => written,
        Ok(Err(err)) => return Err(ctx.fail(err.into())),
        Err(err) => return Err(ctx.fail(err.into())),
    };

    let latency = start.elapsed().as_secs_f64();
    tracing::info!(files = written.len(), mode = ?mode, latency, "export complete");

    Ok(ctx.status(200).succeed(ExportResult { latency }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_defaults_to_parallel() {
        assert_eq!(ExportRequest::from_payload(json!({})).mode, Mode::Parallel);
        assert_eq!(ExportRequest::from_payload(json!(null)).mode, Mode::Parallel);
        assert_eq!(ExportRequest::from_payload(json!("ping")).mode, Mode::Parallel);
    }

    #[test]
    fn request_reads_mode_and_ignores_other_fields() {
        let request = ExportRequest::from_payload(json!({ "mode": "sequential", "body": "x" }));
        assert_eq!(request.mode, Mode::Sequential);
    }

    #[test]
    fn unknown_mode_falls_back_to_default() {
        let request = ExportRequest::from_payload(json!({ "mode": "turbo" }));
        assert_eq!(request.mode, Mode::Parallel);
    }
}
