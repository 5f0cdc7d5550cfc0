use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

/// One uploaded file, held fully in memory for a single render pass.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read upload: {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

// Keep logs readable: never dump the file contents
impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Which of the three upload controls a file belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, strum_macros::EnumIter)]
pub enum UploadSlot {
    #[default]
    Forecast,
    Evaluated,
    Historical,
}

impl UploadSlot {
    pub fn is_required(&self) -> bool {
        matches!(self, UploadSlot::Forecast)
    }
}

impl fmt::Display for UploadSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UploadSlot::Forecast => write!(f, "Forecast CSV"),
            UploadSlot::Evaluated => write!(f, "Evaluated CSV"),
            UploadSlot::Historical => write!(f, "Historical CSV"),
        }
    }
}

/// The inputs of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForecastUploads {
    pub forecast: Option<UploadedFile>,
    pub evaluated: Option<UploadedFile>,
    pub historical: Option<UploadedFile>,
}

impl ForecastUploads {
    pub fn get(&self, slot: UploadSlot) -> Option<&UploadedFile> {
        match slot {
            UploadSlot::Forecast => self.forecast.as_ref(),
            UploadSlot::Evaluated => self.evaluated.as_ref(),
            UploadSlot::Historical => self.historical.as_ref(),
        }
    }

    pub fn set(&mut self, slot: UploadSlot, file: Option<UploadedFile>) {
        match slot {
            UploadSlot::Forecast => self.forecast = file,
            UploadSlot::Evaluated => self.evaluated = file,
            UploadSlot::Historical => self.historical = file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_forecast_is_required() {
        let required: Vec<_> = UploadSlot::iter().filter(|s| s.is_required()).collect();
        assert_eq!(required, vec![UploadSlot::Forecast]);
    }

    #[test]
    fn set_and_get_by_slot() {
        let mut uploads = ForecastUploads::default();
        uploads.set(
            UploadSlot::Historical,
            Some(UploadedFile::new("h.csv", b"Date,Close\n".to_vec())),
        );
        assert!(uploads.get(UploadSlot::Forecast).is_none());
        assert_eq!(uploads.get(UploadSlot::Historical).unwrap().name, "h.csv");
        uploads.set(UploadSlot::Historical, None);
        assert!(uploads.historical.is_none());
    }

    #[test]
    fn missing_path_is_an_error() {
        let err = UploadedFile::from_path(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read upload"));
    }

    #[test]
    fn debug_hides_contents() {
        let file = UploadedFile::new("f.csv", b"secret,data".to_vec());
        let dbg = format!("{:?}", file);
        assert!(dbg.contains("f.csv"));
        assert!(!dbg.contains("secret"));
    }
}
