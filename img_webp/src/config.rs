use std::path::{Path, PathBuf};

/// Directory converted when none is given.
pub const DEFAULT_DIRECTORY: &str = "./public/images";

/// libwebp quality factor on its native 0-100 scale.
pub const DEFAULT_QUALITY: f32 = 80.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    pub directory: PathBuf,
    pub quality: f32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            quality: DEFAULT_QUALITY,
        }
    }
}

impl ConvertConfig {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            ..Self::default()
        }
    }
}
