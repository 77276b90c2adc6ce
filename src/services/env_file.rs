use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::{
    error::{AppError, Result},
    models::{SecretKey, WriteOutcome},
};

pub struct EnvWriter {
    path: PathBuf,
    backup_path: PathBuf,
}

impl EnvWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut backup: OsString = path.clone().into_os_string();
        backup.push(".backup");

        Self {
            path,
            backup_path: PathBuf::from(backup),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the environment file with the key and placeholder settings
    pub fn render(key: &SecretKey) -> String {
        format!(
            "# JWT Secret Key (keep this secret!)
SECRET_KEY={}

# Gmail SMTP Configuration
EMAIL_USER=your-email@gmail.com
EMAIL_PASS=your-app-password-here

# Application URL (used for check-in links)
APP_URL=http://localhost:3000

# Server Port
PORT=3000
",
            key.as_str()
        )
    }

    /// Move any existing file to the backup path, then write a fresh one.
    /// An older backup is replaced without notice and nothing is rolled back
    /// if the write fails.
    pub fn write(&self, key: &SecretKey) -> Result<WriteOutcome> {
        let backup = if self.path.exists() {
            fs::rename(&self.path, &self.backup_path)
                .map_err(|e| AppError::io(&self.path, e))?;
            info!(
                "Existing {} moved to {}",
                self.path.display(),
                self.backup_path.display()
            );
            Some(self.backup_path.clone())
        } else {
            None
        };

        fs::write(&self.path, Self::render(key)).map_err(|e| AppError::io(&self.path, e))?;
        info!(
            "Wrote {} (key fingerprint {})",
            self.path.display(),
            key.fingerprint()
        );

        Ok(WriteOutcome {
            path: self.path.clone(),
            backup,
        })
    }
}
