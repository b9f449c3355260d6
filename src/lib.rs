//! Serverless function that writes flipped and rotated copies of a bundled JPEG.

pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod handler;
pub mod transform;

pub use config::Config;
pub use context::{Context, ExportResult, Response};
pub use error::{ExportError, HandlerError};
pub use export::{export_all, Mode};
pub use handler::{function_handler, init_thread_pool, ExportRequest};
pub use transform::Transform;
