use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GemimgError, Result};
use crate::models::ReferenceImage;

/// Loads one reference image: reads the file, sniffs its format, and fully
/// decodes it to prove it is usable. The original encoded bytes are what get
/// sent; the decode is validation only.
pub fn load_reference(path: &Path) -> Result<ReferenceImage> {
    let data = fs::read(path).map_err(|e| GemimgError::Reference {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let format = image::guess_format(&data).map_err(|e| GemimgError::Reference {
        path: path.to_path_buf(),
        message: format!("unrecognized image format: {e}"),
    })?;

    image::load_from_memory_with_format(&data, format).map_err(|e| GemimgError::Reference {
        path: path.to_path_buf(),
        message: format!("failed to decode: {e}"),
    })?;

    Ok(ReferenceImage {
        mime_type: format.to_mime_type().to_string(),
        data,
    })
}

/// Loads every reference in argument order. Any failure aborts the whole
/// sequence; there is no partial success.
pub fn load_references(paths: &[PathBuf]) -> Result<Vec<ReferenceImage>> {
    let mut references = Vec::with_capacity(paths.len());
    for path in paths {
        let reference = load_reference(path)?;
        log::info!("Using reference image: {}", path.display());
        references.push(reference);
    }
    Ok(references)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn write_png(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        let img = DynamicImage::new_rgb8(2, 2);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_load_valid_png() {
        let dir = TempDir::new().unwrap();
        let path = write_png(&dir, "ref.png");

        let reference = load_reference(&path).unwrap();
        assert_eq!(reference.mime_type, "image/png");
        assert_eq!(reference.data, fs::read(&path).unwrap());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load_reference(Path::new("missing.png")).unwrap_err();
        assert!(matches!(err, GemimgError::Reference { .. }));
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_non_image_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"not an image").unwrap();

        let err = load_reference(&path).unwrap_err();
        assert!(matches!(err, GemimgError::Reference { .. }));
    }

    #[test]
    fn test_order_preserved_and_all_or_nothing() {
        let dir = TempDir::new().unwrap();
        let first = write_png(&dir, "a.png");
        let second = write_png(&dir, "b.png");

        let references = load_references(&[first.clone(), second.clone()]).unwrap();
        assert_eq!(references.len(), 2);
        assert_eq!(references[0].data, fs::read(&first).unwrap());
        assert_eq!(references[1].data, fs::read(&second).unwrap());

        let missing = dir.path().join("gone.png");
        assert!(load_references(&[first, missing]).is_err());
    }
}
