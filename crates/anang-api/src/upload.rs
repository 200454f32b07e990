//! File parts for multipart uploads.

use std::path::Path;

use reqwest::multipart::Part;

use crate::ApiError;

/// Extensions the backend accepts for license documents.
pub const ALLOWED_LICENSE_EXTENSIONS: [&str; 5] = [".pdf", ".png", ".jpg", ".jpeg", ".webp"];

/// An in-memory file ready to be sent as a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl LicenseFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk, keeping only its file name.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    pub async fn read(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "file".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self { file_name, bytes })
    }

    /// Lowercased extension including the dot, e.g. `.pdf`.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_ascii_lowercase()))
    }

    #[must_use]
    pub fn has_allowed_extension(&self) -> bool {
        self.extension()
            .is_some_and(|ext| ALLOWED_LICENSE_EXTENSIONS.contains(&ext.as_str()))
    }

    /// Fail with [`ApiError::Validation`] unless the extension is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] listing the allowed types.
    pub fn ensure_allowed(&self) -> Result<(), ApiError> {
        if self.has_allowed_extension() {
            Ok(())
        } else {
            Err(ApiError::Validation(format!(
                "Allowed types: {}",
                ALLOWED_LICENSE_EXTENSIONS.join(", ")
            )))
        }
    }

    pub(crate) fn into_part(self) -> Part {
        Part::bytes(self.bytes).file_name(self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("license.pdf", true)]
    #[case("SCAN.JPG", true)]
    #[case("photo.jpeg", true)]
    #[case("image.webp", true)]
    #[case("notes.docx", false)]
    #[case("README", false)]
    fn extension_check(#[case] name: &str, #[case] allowed: bool) {
        assert_eq!(LicenseFile::new(name, vec![]).has_allowed_extension(), allowed);
    }

    #[test]
    fn rejected_extension_lists_allowed_types() {
        let err = LicenseFile::new("x.exe", vec![]).ensure_allowed().unwrap_err();
        assert_eq!(err.to_string(), "Allowed types: .pdf, .png, .jpg, .jpeg, .webp");
    }

    #[tokio::test]
    async fn read_keeps_only_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("license.pdf");
        std::fs::write(&path, b"%PDF-1.7").unwrap();
        let file = LicenseFile::read(&path).await.unwrap();
        assert_eq!(file.file_name, "license.pdf");
        assert_eq!(file.bytes, b"%PDF-1.7");
    }
}
