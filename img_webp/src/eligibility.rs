//! Eligibility filter
//!
//! Pure functions over a directory entry name. Nothing here touches the
//! filesystem.

use std::path::Path;

/// Extensions converted to WebP, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Literal, case-sensitive suffix marking an entry as already converted.
pub const WEBP_SUFFIX: &str = ".webp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Name ends with `.webp`; never decoded or deleted.
    AlreadyWebp,
    /// Extension outside `SUPPORTED_EXTENSIONS`; left untouched.
    Unsupported,
    Eligible,
}

/// Text after the last `.`, if any. Unlike `Path::extension` a dotfile such as
/// `.png` counts as having the extension `png`.
fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

pub fn classify(name: &str) -> Eligibility {
    if name.ends_with(WEBP_SUFFIX) {
        return Eligibility::AlreadyWebp;
    }

    match extension_of(name) {
        Some(ext)
            if SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported)) =>
        {
            Eligibility::Eligible
        }
        _ => Eligibility::Unsupported,
    }
}

pub fn is_eligible(name: &str) -> bool {
    classify(name) == Eligibility::Eligible
}

/// `photo.JPG` → `photo.webp`. The base name is the file stem, so only the
/// last extension is replaced.
pub fn output_file_name(name: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());
    format!("{}{}", stem, WEBP_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions_any_case() {
        for name in ["a.png", "a.PNG", "b.jpg", "b.JpG", "c.jpeg", "c.JPEG"] {
            assert_eq!(classify(name), Eligibility::Eligible, "{}", name);
        }
    }

    #[test]
    fn test_webp_suffix_is_case_sensitive() {
        assert_eq!(classify("c.webp"), Eligibility::AlreadyWebp);
        assert_eq!(classify("photo.png.webp"), Eligibility::AlreadyWebp);
        // not the literal suffix, and not a supported extension either
        assert_eq!(classify("c.WEBP"), Eligibility::Unsupported);
    }

    #[test]
    fn test_unsupported_names() {
        for name in ["readme.txt", "archive.png.zip", "noext", "trailing.", "image.gif", "png"] {
            assert_eq!(classify(name), Eligibility::Unsupported, "{}", name);
        }
    }

    #[test]
    fn test_dotfile_with_image_extension() {
        assert!(is_eligible(".png"));
        assert_eq!(output_file_name(".png"), ".png.webp");
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("photo.JPG"), "photo.webp");
        assert_eq!(output_file_name("a.png"), "a.webp");
        assert_eq!(output_file_name("my.holiday.jpeg"), "my.holiday.webp");
        assert_eq!(output_file_name("photo.webp.png"), "photo.webp.webp");
    }
}
