use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::HotelError,
    utils::{app_data_dir, ensure_dir},
};

const CONFIG_FILE: &str = "config.json";

/// Operator-editable settings persisted alongside the register data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display label only; amounts themselves are currency-agnostic.
    pub currency: String,
    /// How many storage backups to keep per register.
    pub backup_retention: usize,
    /// Seed the ten standard rooms when a register is first created.
    pub seed_rooms: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_opened_register: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            backup_retention: 5,
            seed_rooms: false,
            last_opened_register: None,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, HotelError> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, HotelError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, HotelError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored configuration, falling back to defaults when no file
    /// has been written yet.
    pub fn load(&self) -> Result<Config, HotelError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, config: &Config) -> Result<(), HotelError> {
        let json = serde_json::to_string_pretty(config)?;
        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
