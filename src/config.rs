use std::env;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "/tmp";
pub const DEFAULT_JPEG_QUALITY: u8 = 80;
const BUNDLED_IMAGE: &str = "images/image.jpg";

/// Settings read once per container at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub jpeg_quality: u8,
    pub workers: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            source: env::var("IMAGE_SOURCE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| bundled_image_path()),
            output_dir: env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            jpeg_quality: parse_quality(env::var("JPEG_QUALITY").ok().as_deref()),
            workers: get_worker_count(),
        }
    }
}

// The image ships next to the bootstrap binary, under LAMBDA_TASK_ROOT when deployed
fn bundled_image_path() -> PathBuf {
    env::var("LAMBDA_TASK_ROOT")
        .map(PathBuf::from)
        .or_else(|_| env::current_dir())
        .unwrap_or_default()
        .join(BUNDLED_IMAGE)
}

// JPEG quality clamped to 1-100, falling back to the default on garbage
fn parse_quality(raw: Option<&str>) -> u8 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .map(|q| q.clamp(1, 100) as u8)
        .unwrap_or(DEFAULT_JPEG_QUALITY)
}

// Get worker count from env var or detect CPUs, clamped to 1-6
pub fn get_worker_count() -> usize {
    if let Ok(count_str) = env::var("WORKER_COUNT") {
        if let Ok(count) = count_str.parse::<usize>() {
            return count.clamp(1, 6);
        }
    }
    num_cpus::get().clamp(1, 6)
}
