use std::env::consts::OS;
use std::env::var;
use std::io;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "telebill";

/// Resolves the per-OS application data directory where the config file
/// and the default backing store live. `TELEBILL_DATA_DIR` overrides the
/// platform default, which tests and portable setups rely on.
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match var("TELEBILL_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => {
                let root = match OS {
                    "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
                    "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
                    _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
                };
                Path::new(&root).join(APP_NAME)
            }
        };

        Self { base_path }
    }

    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
