use std::path::PathBuf;
use thiserror::Error;

use crate::transform::Transform;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {}: {source}", .transform.file_name())]
    Encode {
        transform: Transform,
        #[source]
        source: image::ImageError,
    },

    #[error("{} of {} outputs failed: {}", .0.len(), Transform::ALL.len(), summarize(.0))]
    Failed(Vec<(Transform, ExportError)>),
}

fn summarize(failures: &[(Transform, ExportError)]) -> String {
    failures
        .iter()
        .map(|(transform, err)| format!("{}: {err}", transform.file_name()))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure of a whole invocation, reported to the runtime as an error.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("export task did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}
