// Host-side failures. Effects themselves never fail; every variant here comes
// from the window, the image codecs, or caller-supplied configuration.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String),
    #[error("window update error: {0}")]
    WindowUpdate(String),
    #[error("failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to save image {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("unknown effect '{0}'")]
    UnknownEffect(String),
    #[error("size mismatch: source is {src_w}x{src_h}, destination is {dst_w}x{dst_h}")]
    SizeMismatch {
        src_w: usize,
        src_h: usize,
        dst_w: usize,
        dst_h: usize,
    },
    #[error("invalid canvas size {0}x{1}")]
    InvalidSize(usize, usize),
}
