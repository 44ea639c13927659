use crate::compiler::CompiledForm;
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;

/// Bumped whenever the layout of the compiled plans changes.
pub const ARTIFACT_VERSION: u16 = 1;

/// A compiled form in its on-disk shape. Patterns are stored as source and
/// recompiled when the artifact is loaded.
#[derive(Serialize, Deserialize)]
pub struct FormArtifact {
    version: u16,
    form: CompiledForm,
}

impl FormArtifact {
    pub fn new(form: CompiledForm) -> Self {
        Self {
            version: ARTIFACT_VERSION,
            form,
        }
    }

    pub fn into_form(self) -> CompiledForm {
        self.form
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))
    }

    /// Saves the compiled form to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        fs::write(path, bytes).map_err(|source| ArtifactError::Io {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let (artifact, _): (Self, usize) = decode_from_slice(bytes, standard())
            .map_err(|e| ArtifactError::Decode(e.to_string()))?;
        if artifact.version != ARTIFACT_VERSION {
            return Err(ArtifactError::VersionMismatch {
                found: artifact.version,
                expected: ARTIFACT_VERSION,
            });
        }
        Ok(artifact)
    }
}
