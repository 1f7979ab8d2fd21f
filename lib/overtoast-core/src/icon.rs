use crate::platform::Size;
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("could not read icon {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("icon {path:?} is not a decodable image: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("the host toolkit cannot display icon {path:?}")]
    Rejected { path: PathBuf },
}

/// An icon the host toolkit has already decoded. The decoded image itself stays with the
/// platform that loaded it; this only records where it came from and how large it is.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    path: PathBuf,
    size: Size,
}

impl Icon {
    pub fn new(path: &Path, size: Size) -> Self {
        Self {
            path: path.to_path_buf(),
            size,
        }
    }

    /// Reads and fully decodes `path` with the `image` crate. Used by hosts without a native
    /// image loader.
    pub fn decode(path: &Path) -> Result<Self, IconError> {
        let bytes = fs::read(path).map_err(|source| IconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes).map_err(|source| IconError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(
            path,
            Size::new(decoded.width() as f64, decoded.height() as f64),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> &Size {
        &self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    #[test]
    fn test_decode_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        RgbaImage::from_pixel(12, 7, Rgba([255, 0, 0, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let icon = Icon::decode(&path).unwrap();
        assert_eq!(icon.size(), &Size::new(12.0, 7.0));
        assert_eq!(icon.path(), path.as_path());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Icon::decode(&dir.path().join("nope.png"));
        assert!(matches!(result, Err(IconError::Read { .. })));
    }

    #[test]
    fn test_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let result = Icon::decode(&path);
        assert!(matches!(result, Err(IconError::Decode { .. })));
    }
}
