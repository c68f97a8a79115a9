use std::fs;
use std::io;
use std::path::Path;

use crate::core::ImageMetadata;
use crate::utils::error::{PathError, ValidationError};
use crate::utils::formats::{ACCEPTED_INPUT_FORMATS, ImageFormat};

/// Returns true when `path` names an existing JPEG file.
///
/// Advisory only: the file can change between this check and the conversion.
pub fn is_valid(path: Option<&str>) -> bool {
    validate_input_path(path).is_ok()
}

/// Validates a task's input path and tags it with its format.
///
/// Checks, in order: the path is non-empty, its lowercase form ends in an
/// accepted extension, and it names an existing regular file.
pub fn validate_input_path(path: Option<&str>) -> Result<ImageMetadata, ValidationError> {
    let path = match path {
        Some(p) if !p.is_empty() => p,
        _ => return Err(ValidationError::EmptyPath),
    };

    let format = accepted_input_format(path)
        .ok_or_else(|| ValidationError::unsupported_extension(path))?;

    match fs::metadata(Path::new(path)) {
        Ok(meta) if meta.is_file() => Ok(ImageMetadata::new(path, format.primary_extension())),
        Ok(_) => Err(ValidationError::not_a_file(path)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ValidationError::path_not_found(path)),
        Err(e) => Err(PathError::from(e).into()),
    }
}

// Suffix after the last dot of the whole string, so a bare ".jpeg" still counts.
fn accepted_input_format(path: &str) -> Option<ImageFormat> {
    let (_, ext) = path.rsplit_once('.')?;
    ACCEPTED_INPUT_FORMATS
        .iter()
        .copied()
        .find(|format| format.matches_extension(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> String {
        let path = dir.path().join(name);
        File::create(&path).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn rejects_empty_and_absent_paths() {
        assert_eq!(validate_input_path(None), Err(ValidationError::EmptyPath));
        assert_eq!(validate_input_path(Some("")), Err(ValidationError::EmptyPath));
        assert!(!is_valid(None));
        assert!(!is_valid(Some("")));
    }

    #[test]
    fn missing_jpeg_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.jpeg");
        let path = path.to_str().unwrap();

        assert!(!is_valid(Some(path)));
        assert!(matches!(
            validate_input_path(Some(path)),
            Err(ValidationError::Path(PathError::NotFound(_)))
        ));
    }

    #[test]
    fn existing_jpeg_is_valid_regardless_of_case() {
        let dir = TempDir::new().unwrap();
        for name in ["logo.jpeg", "photo.jpg", "SHOUT.JPG", "Mixed.JpEg"] {
            let path = touch(&dir, name);
            assert!(is_valid(Some(&path)), "{name} should be valid");
        }
    }

    #[test]
    fn png_is_rejected_even_when_it_exists() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "image.png");

        assert!(!is_valid(Some(&path)));
        assert!(!is_valid(Some("image.png")));
        assert!(matches!(
            validate_input_path(Some(&path)),
            Err(ValidationError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn only_the_last_suffix_counts() {
        assert_eq!(accepted_input_format(".jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(accepted_input_format("archive.jpg.PNG"), None);
        assert_eq!(accepted_input_format("photo.png.JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(accepted_input_format("jpeg"), None);
        assert_eq!(accepted_input_format("album.jpg/cover"), None);
    }

    #[test]
    fn directories_are_not_files() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("album.jpg");
        std::fs::create_dir(&sub).unwrap();

        assert!(matches!(
            validate_input_path(sub.to_str()),
            Err(ValidationError::Path(PathError::NotFile(_)))
        ));
    }

    #[test]
    fn valid_path_is_tagged_as_jpeg() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "photo.JPG");

        let meta = validate_input_path(Some(&path)).unwrap();
        assert_eq!(meta.format, "jpeg");
        assert_eq!(meta.to_string(), path);
    }
}
