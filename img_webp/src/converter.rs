//! Batch converter
//!
//! Lists one directory (non-recursive), converts every eligible PNG/JPEG to a
//! sibling `.webp` and deletes the original. Files are processed one at a
//! time; a failure on one file is logged and recorded, then the run moves on.
//! Only an unreadable directory aborts the run.

use crate::codec::{ImageCodec, WebpCodec};
use crate::config::ConvertConfig;
use crate::eligibility::{classify, output_file_name, Eligibility};
use shared_utils::img_errors::Result;
use shared_utils::{BatchResult, ConvertError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// A finished conversion: `output` written, `source` removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub source: PathBuf,
    pub output: PathBuf,
    pub input_size: u64,
    pub output_size: u64,
}

pub struct BatchConverter<C = WebpCodec> {
    config: ConvertConfig,
    codec: C,
}

impl BatchConverter<WebpCodec> {
    pub fn new(config: ConvertConfig) -> Self {
        Self::with_codec(config, WebpCodec)
    }
}

impl<C: ImageCodec> BatchConverter<C> {
    pub fn with_codec(config: ConvertConfig, codec: C) -> Self {
        Self { config, codec }
    }

    fn directory(&self) -> &Path {
        &self.config.directory
    }

    /// Entry names of the target directory, in whatever order the OS yields
    /// them. The listing completes before any file is touched.
    pub fn list_candidates(&self) -> Result<Vec<String>> {
        let dir = self.directory();
        let access_error = |source| ConvertError::DirectoryAccess {
            path: dir.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(dir).map_err(access_error)? {
            let entry = entry.map_err(access_error)?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!(name = ?raw, "Skipping entry with a non UTF-8 name"),
            }
        }
        Ok(names)
    }

    pub fn run(&self) -> Result<BatchResult> {
        let dir = self.directory();
        println!("🚀 Converting images in {} to WebP...", dir.display());
        info!(
            directory = %dir.display(),
            quality = self.config.quality,
            "Starting WebP conversion"
        );

        let names = self.list_candidates()?;
        let mut result = BatchResult::new();

        for name in names {
            match classify(&name) {
                Eligibility::AlreadyWebp | Eligibility::Unsupported => {
                    debug!(file = %name, "Not eligible, skipping");
                    result.skip();
                    continue;
                }
                Eligibility::Eligible => {}
            }

            match self.convert_file(&name) {
                Ok(conversion) => {
                    println!("✨ Converted: {} -> {}", name, output_file_name(&name));
                    info!(
                        source = %conversion.source.display(),
                        output = %conversion.output.display(),
                        input_size = conversion.input_size,
                        output_size = conversion.output_size,
                        "Converted"
                    );
                    result.success(conversion.input_size, conversion.output_size);
                }
                Err(e) => {
                    eprintln!("❌ {} ({}): {}", name, e.kind(), e);
                    error!(
                        file = %name,
                        kind = e.kind(),
                        error = %e,
                        "Conversion failed, continuing with next file"
                    );
                    result.fail(dir.join(&name), e.to_string());
                }
            }
        }

        info!(
            converted = result.succeeded,
            failed = result.failed,
            skipped = result.skipped,
            "WebP conversion finished"
        );
        Ok(result)
    }

    /// Decode (upright), encode, write `<stem>.webp`, then delete `name`.
    /// An existing output file is overwritten.
    pub fn convert_file(&self, name: &str) -> Result<Conversion> {
        let dir = self.directory();
        let source = dir.join(name);
        let output = dir.join(output_file_name(name));

        let bytes = fs::read(&source).map_err(|e| ConvertError::Decode {
            path: source.clone(),
            source: image::ImageError::IoError(e),
        })?;

        let image = self
            .codec
            .decode(&bytes)
            .map_err(|e| ConvertError::Decode {
                path: source.clone(),
                source: e,
            })?;

        let encoded = self
            .codec
            .encode_webp(&image, self.config.quality)
            .map_err(|reason| ConvertError::Encode {
                path: source.clone(),
                reason,
            })?;
        drop(image);

        fs::write(&output, &encoded).map_err(|e| ConvertError::Write {
            path: output.clone(),
            source: e,
        })?;

        fs::remove_file(&source).map_err(|e| ConvertError::Delete {
            path: source.clone(),
            source: e,
        })?;

        Ok(Conversion {
            source,
            output,
            input_size: bytes.len() as u64,
            output_size: encoded.len() as u64,
        })
    }
}
