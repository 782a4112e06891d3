// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Upload storage under the public directory.
//!
//! Uploaded files land in `<public_dir>/uploads/` under a sanitized name
//! prefixed with the upload timestamp in milliseconds, and are served back
//! verbatim at `/public/uploads/<name>`. Content type and size are not
//! inspected here; the admin is the only writer.

use std::path::Path;

use atelier_core::AtelierError;
use chrono::Utc;
use tracing::{debug, warn};

/// Public URL prefix under which stored uploads are served.
pub const UPLOADS_URL_PREFIX: &str = "/public/uploads/";

/// Replace every character outside `[A-Za-z0-9._-]` with an underscore.
///
/// Path separators and parent references are flattened too, so the result
/// is always a plain file name.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Store an uploaded file and return its public path.
///
/// The stored name is `<millis>_<sanitized original name>`; the millisecond
/// prefix keeps repeated uploads of the same file from colliding.
pub async fn store_upload(
    uploads_dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> Result<String, AtelierError> {
    let stored_name = format!(
        "{}_{}",
        Utc::now().timestamp_millis(),
        sanitize_file_name(original_name)
    );
    let target = uploads_dir.join(&stored_name);

    tokio::fs::create_dir_all(uploads_dir)
        .await
        .map_err(|e| AtelierError::Upload {
            message: format!("cannot create uploads directory {}", uploads_dir.display()),
            source: Some(Box::new(e)),
        })?;
    tokio::fs::write(&target, bytes)
        .await
        .map_err(|e| AtelierError::Upload {
            message: format!("cannot write upload {}", target.display()),
            source: Some(Box::new(e)),
        })?;

    debug!(name = %stored_name, size = bytes.len(), "stored upload");
    Ok(format!("{UPLOADS_URL_PREFIX}{stored_name}"))
}

/// Best-effort removal of a stored upload by its public path.
///
/// Paths outside `/public/uploads/` and names containing separators are
/// ignored; a missing file is not an error. The items table is the source
/// of truth, so removal failures are logged and swallowed.
pub async fn remove_upload(public_dir: &Path, file_path: &str) {
    let Some(name) = file_path.strip_prefix(UPLOADS_URL_PREFIX) else {
        debug!(%file_path, "not an uploads path, skipping removal");
        return;
    };
    if name.is_empty() || name.contains('/') || name.contains('\\') {
        warn!(%file_path, "refusing to remove suspicious upload path");
        return;
    }

    let target = public_dir.join("uploads").join(name);
    match tokio::fs::remove_file(&target).await {
        Ok(()) => debug!(path = %target.display(), "removed upload"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %target.display(), "upload already missing");
        }
        Err(e) => warn!(path = %target.display(), error = %e, "failed to remove upload"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_file_name("photo-01_final.JPG"), "photo-01_final.JPG");
        assert_eq!(sanitize_file_name("v1.2.3.pdf"), "v1.2.3.pdf");
    }

    #[test]
    fn sanitize_replaces_everything_else() {
        assert_eq!(sanitize_file_name("my photo (1).jpg"), "my_photo__1_.jpg");
        assert_eq!(sanitize_file_name("لوحة.png"), "____.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_file_name("a\\b/c"), "a_b_c");
    }

    #[tokio::test]
    async fn store_writes_file_and_returns_public_path() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");

        let public_path = store_upload(&uploads, "sketch 1.png", b"pngdata")
            .await
            .unwrap();

        let name = public_path.strip_prefix(UPLOADS_URL_PREFIX).unwrap();
        assert!(name.ends_with("_sketch_1.png"), "got {name}");
        let on_disk = std::fs::read(uploads.join(name)).unwrap();
        assert_eq!(on_disk, b"pngdata");
    }

    #[tokio::test]
    async fn store_creates_missing_uploads_dir() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("public").join("uploads");
        assert!(!uploads.exists());

        store_upload(&uploads, "a.txt", b"x").await.unwrap();
        assert!(uploads.exists());
    }

    #[tokio::test]
    async fn remove_deletes_stored_file() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        let public_path = store_upload(&uploads, "gone.txt", b"bye").await.unwrap();
        let name = public_path.strip_prefix(UPLOADS_URL_PREFIX).unwrap();
        assert!(uploads.join(name).exists());

        remove_upload(dir.path(), &public_path).await;
        assert!(!uploads.join(name).exists());
    }

    #[tokio::test]
    async fn remove_missing_file_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        remove_upload(dir.path(), "/public/uploads/never-existed.txt").await;
    }

    #[tokio::test]
    async fn remove_ignores_paths_outside_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let victim = dir.path().join("precious.txt");
        std::fs::write(&victim, "keep me").unwrap();

        remove_upload(dir.path(), "/precious.txt").await;
        remove_upload(dir.path(), "precious.txt").await;
        remove_upload(dir.path(), "/public/uploads/../precious.txt").await;
        assert!(victim.exists());
    }
}
