//! The codec contract

use crate::{Error, Model, Result};
use std::fs;
use std::path::Path;

/// A bidirectional codec between file bytes and a [`Model`]
///
/// Implementations only deal with byte buffers. The provided path helpers
/// layer file access and extension checks on top.
pub trait ModelIo {
    /// File extensions this codec claims, lowercase and without the dot
    fn extension(&self) -> &'static [&'static str];

    /// Decode a model from raw file bytes
    fn parse(&self, bytes: &[u8]) -> Result<Model>;

    /// Encode a model into raw file bytes
    fn export(&self, model: &Model) -> Result<Vec<u8>>;

    /// Whether the path's extension (case-insensitive) is claimed by this codec
    fn supports(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extension()
                    .iter()
                    .any(|claimed| claimed.eq_ignore_ascii_case(ext))
            })
    }

    /// Read and parse a model file
    fn read<P: AsRef<Path>>(&self, path: P) -> Result<Model>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        check_extension(self, path)?;
        let bytes = fs::read(path)?;
        self.parse(&bytes)
    }

    /// Export a model and write it to a file
    fn write<P: AsRef<Path>>(&self, model: &Model, path: P) -> Result<()>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        check_extension(self, path)?;
        let bytes = self.export(model)?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

fn check_extension<T: ModelIo + ?Sized>(io: &T, path: &Path) -> Result<()> {
    if io.supports(path) {
        Ok(())
    } else {
        Err(Error::UnsupportedExtension(path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Object;

    /// Writes one object name per line, nothing else
    struct NamesIo;

    impl ModelIo for NamesIo {
        fn extension(&self) -> &'static [&'static str] {
            &["names", "txt"]
        }

        fn parse(&self, bytes: &[u8]) -> Result<Model> {
            let text = std::str::from_utf8(bytes)?;
            Ok(Model::new(
                text.lines().map(|name| Object::new(name, Vec::new())).collect(),
            ))
        }

        fn export(&self, model: &Model) -> Result<Vec<u8>> {
            let names: Vec<&str> = model.objects.iter().map(|o| o.name.as_str()).collect();
            Ok(names.join("\n").into_bytes())
        }
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("modelio_test_{}", name))
    }

    #[test]
    fn test_supports_is_case_insensitive() {
        assert!(NamesIo.supports(Path::new("a/b/c.names")));
        assert!(NamesIo.supports(Path::new("c.TXT")));
        assert!(!NamesIo.supports(Path::new("c.obj")));
        assert!(!NamesIo.supports(Path::new("names")));
    }

    #[test]
    fn test_write_then_read() {
        let model = Model::new(vec![Object::new("a", Vec::new()), Object::new("b", Vec::new())]);
        let path = temp_path("roundtrip.names");

        NamesIo.write(&model, &path).unwrap();
        let read = NamesIo.read(&path).unwrap();
        assert_eq!(read, model);

        // Clean up
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_rejects_unclaimed_extension() {
        let err = NamesIo.read(temp_path("model.stl")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedExtension(_)));
    }

    #[test]
    fn test_invalid_utf8_is_invalid_encoding() {
        let err = NamesIo.parse(&[0x66, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, Error::InvalidEncoding(_)));
    }
}
