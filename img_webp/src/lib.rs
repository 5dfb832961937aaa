//! img-webp: convert every PNG/JPEG in a directory to WebP (quality 80,
//! EXIF rotation applied) and delete the originals.

pub mod codec;
pub mod config;
pub mod converter;
pub mod eligibility;

pub use codec::{ImageCodec, WebpCodec};
pub use config::{ConvertConfig, DEFAULT_DIRECTORY, DEFAULT_QUALITY};
pub use converter::{BatchConverter, Conversion};
pub use eligibility::{classify, is_eligible, output_file_name, Eligibility, SUPPORTED_EXTENSIONS};

pub use shared_utils::img_errors::{ConvertError, Result};
pub use shared_utils::BatchResult;
