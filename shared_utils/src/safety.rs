//! Safety Module
//!
//! Refuses to run a destructive conversion (originals are deleted) against
//! system directories or the root of a home directory.

use std::path::Path;

const DANGEROUS_DIRS: &[&str] = &[
    "/",
    "/System",
    "/usr",
    "/bin",
    "/sbin",
    "/etc",
    "/var",
    "/private",
    "/Library",
    "/Applications",
    "/Users",
    "/home",
    "/root",
    "/boot",
    "/dev",
    "/proc",
    "/sys",
    "/tmp",
    "/opt",
];

pub fn check_dangerous_directory(path: &Path) -> Result<(), String> {
    // `Path` equality ignores trailing slashes and `.` components; the
    // canonical form resolves `..` and symlinks such as macOS `/tmp`
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

    for dangerous in DANGEROUS_DIRS {
        let dangerous_path = Path::new(dangerous);
        if path == dangerous_path || canonical == dangerous_path {
            return Err(format!(
                "🚨 DANGEROUS OPERATION BLOCKED!\n\
                 ❌ Target directory '{}' is a protected system directory.\n\
                 💡 Please specify a subdirectory that only holds images.",
                dangerous
            ));
        }
    }

    let components = canonical.components().count();
    let canonical_str = canonical.to_string_lossy();

    if components <= 3
        && (canonical_str.starts_with("/Users/") || canonical_str.starts_with("/home/"))
    {
        return Err(format!(
            "🚨 DANGEROUS OPERATION BLOCKED!\n\
             ❌ Target '{}' is too close to your home directory root.\n\
             💡 Please specify a subdirectory like ~/site/public/images instead.",
            path.display()
        ));
    }

    Ok(())
}

/// Blocks dangerous targets and warns about locations that commonly hold
/// irreplaceable files.
pub fn check_safe_for_destructive(path: &Path, operation: &str) -> Result<(), String> {
    check_dangerous_directory(path)?;

    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let path_str = canonical.to_string_lossy();

    if path_str.contains("/Desktop") || path_str.contains("/Downloads") {
        eprintln!(
            "⚠️  WARNING: You are about to {} files in '{}'.\n\
             ⚠️  Originals are deleted after conversion. Make sure you have backups.",
            operation,
            path.display()
        );
    }

    Ok(())
}
