//! Decode the source once, then write every [`Transform`] to its own file.
//!
//! In parallel mode the five writes fan out on the rayon global pool and all
//! share one `&DynamicImage`. A failing write never cancels the others: every
//! write runs to completion, then any failures are returned together as
//! [`ExportError::Failed`].

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};
use rayon::prelude::*;
use serde::Deserialize;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::transform::Transform;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Sequential,
    #[default]
    Parallel,
}

pub fn decode_source(path: &Path) -> Result<DynamicImage, ExportError> {
    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(|source| ExportError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    img.to_rgb8().write_with_encoder(encoder)?;
    Ok(buf.into_inner())
}

/// Apply `transform`, encode and write to `out_dir`, replacing any earlier output.
pub fn write_variant(
    img: &DynamicImage,
    transform: Transform,
    out_dir: &Path,
    quality: u8,
) -> Result<PathBuf, ExportError> {
    let path = out_dir.join(transform.file_name());
    let bytes = encode_jpeg(&transform.apply(img), quality)
        .map_err(|source| ExportError::Encode { transform, source })?;

    std::fs::write(&path, bytes).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(transform = ?transform, path = %path.display(), "wrote variant");
    Ok(path)
}

/// Returns the written paths in [`Transform::ALL`] order.
pub fn export_all(
    source: &Path,
    out_dir: &Path,
    quality: u8,
    mode: Mode,
) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(out_dir).map_err(|source| ExportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let img = decode_source(source)?;
    tracing::debug!(
        path = %source.display(),
        width = img.width(),
        height = img.height(),
        "decoded source"
    );

    let write = |&transform: &Transform| {
        (transform, write_variant(&img, transform, out_dir, quality))
    };
    let results: Vec<(Transform, Result<PathBuf, ExportError>)> = match mode {
        Mode::Sequential => Transform::ALL.iter().map(write).collect(),
        Mode::Parallel => Transform::ALL[..].par_iter().map(write).collect(),
    };

    let mut written = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (transform, result) in results {
        match result {
            Ok(path) => written.push(path),
            Err(err) => {
                tracing::error!(transform = ?transform, error = %err, "variant failed");
                failures.push((transform, err));
            }
        }
    }

    if !failures.is_empty() {
        return Err(ExportError::Failed(failures));
    }
    Ok(written)
}
