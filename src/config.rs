use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{backend::SetupRequest, StateError};

/// Environment variable pointing at the REFPROP install root.
pub const RPPREFIX: &str = "RPPREFIX";

pub const DEFAULT_MIXTURE_FILE: &str = "HMX.BNC";

/// Reference state: the fluid file's own default.
pub const DEFAULT_REFERENCE_STATE: &str = "DEF";

/// Where fluid definitions live and how the backend should load them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FluidConfig {
    /// Directory holding `<name>.FLD` files and the mixture file.
    pub fluids_dir: PathBuf,
    /// Binary interaction parameter file, relative to `fluids_dir`.
    pub mixture_file: String,
    pub reference_state: String,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            fluids_dir: PathBuf::from("fluids"),
            mixture_file: DEFAULT_MIXTURE_FILE.to_string(),
            reference_state: DEFAULT_REFERENCE_STATE.to_string(),
        }
    }
}

impl FluidConfig {
    pub fn new(fluids_dir: impl Into<PathBuf>) -> Self {
        Self {
            fluids_dir: fluids_dir.into(),
            ..Self::default()
        }
    }

    /// Uses `$RPPREFIX/fluids`, falling back to `./fluids` when the variable is unset.
    pub fn from_env() -> Self {
        match env::var_os(RPPREFIX) {
            Some(root) => Self::new(Path::new(&root).join("fluids")),
            None => Self::default(),
        }
    }

    /// Reads a JSON configuration; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// - Returns `StateError::Config` if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StateError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| StateError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, StateError> {
        serde_json::from_str(text).map_err(|e| StateError::Config(e.to_string()))
    }

    /// The setup call for `fluid`: `<fluids_dir>/<fluid>.FLD` plus the mixture file.
    pub fn setup_request(&self, fluid: &str) -> SetupRequest {
        SetupRequest {
            fluid: fluid.to_string(),
            fluid_file: self.fluids_dir.join(format!("{fluid}.FLD")),
            mixture_file: self.fluids_dir.join(&self.mixture_file),
            reference_state: self.reference_state.clone(),
        }
    }
}
