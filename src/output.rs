use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::{GemimgError, Result};
use crate::models::{GenerateContentResponse, Part};

/// Creates the output path's parent directory (with intermediates) when it
/// does not exist yet. Idempotent.
pub fn prepare_output_dir(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
            log::info!("Created output directory: {}", parent.display());
        }
    }
    Ok(())
}

/// Walks the response parts in order: text parts are logged as model
/// commentary, inline parts are decoded and written to `output`. When the
/// response carries more than one image, each write overwrites the previous
/// one, so the last image wins. Returns whether any image was written.
pub fn persist_response(response: &GenerateContentResponse, output: &Path) -> Result<bool> {
    let mut image_saved = false;

    for part in response.parts() {
        match part {
            Part::Text { text } => {
                log::info!("Model response: {text}");
            }
            Part::InlineData { inline_data } => {
                let bytes = BASE64.decode(&inline_data.data).map_err(|e| {
                    GemimgError::Response(format!("failed to decode inline image data: {e}"))
                })?;
                fs::write(output, bytes)?;
                log::info!("Image saved to: {}", output.display());
                image_saved = true;
            }
        }
    }

    Ok(image_saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Candidate, Content, InlineData};
    use tempfile::TempDir;

    fn inline_response(images: &[&[u8]]) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: images
                        .iter()
                        .map(|bytes| Part::InlineData {
                            inline_data: InlineData {
                                mime_type: "image/png".to_string(),
                                data: BASE64.encode(bytes),
                            },
                        })
                        .collect(),
                }),
            }],
        }
    }

    #[test]
    fn test_creates_nested_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("nested").join("dir").join("out.png");

        prepare_output_dir(&output).unwrap();
        assert!(output.parent().unwrap().is_dir());

        // Second call is a no-op.
        prepare_output_dir(&output).unwrap();
    }

    #[test]
    fn test_bare_filename_needs_no_dir() {
        prepare_output_dir(Path::new("out.png")).unwrap();
    }

    #[test]
    fn test_inline_image_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.png");

        let saved = persist_response(&inline_response(&[b"image-bytes"]), &output).unwrap();
        assert!(saved);
        assert_eq!(fs::read(&output).unwrap(), b"image-bytes");
    }

    #[test]
    fn test_text_only_response_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.png");

        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part::Text {
                        text: "cannot draw that".to_string(),
                    }],
                }),
            }],
        };

        let saved = persist_response(&response, &output).unwrap();
        assert!(!saved);
        assert!(!output.exists());
    }

    #[test]
    fn test_last_image_wins() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.png");

        let saved = persist_response(&inline_response(&[b"first", b"second"]), &output).unwrap();
        assert!(saved);
        assert_eq!(fs::read(&output).unwrap(), b"second");
    }

    #[test]
    fn test_existing_output_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.png");
        fs::write(&output, b"stale").unwrap();

        persist_response(&inline_response(&[b"fresh"]), &output).unwrap();
        assert_eq!(fs::read(&output).unwrap(), b"fresh");
    }

    #[test]
    fn test_bad_base64_is_a_response_error() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.png");

        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/png".to_string(),
                            data: "%%%not-base64%%%".to_string(),
                        },
                    }],
                }),
            }],
        };

        let err = persist_response(&response, &output).unwrap_err();
        assert!(matches!(err, GemimgError::Response(_)));
        assert!(!output.exists());
    }
}
