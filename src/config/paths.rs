use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const AWS_DIR: &str = ".aws";

#[derive(Debug, Clone)]
pub struct AwsPaths {
    config_file: PathBuf,
    credentials_file: PathBuf,
}

impl AwsPaths {
    pub fn discover() -> AppResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("unable to resolve home directory".to_string()))?;

        Ok(Self::under(&home))
    }

    /// Paths rooted under an explicit home directory. Tests use this to point
    /// discovery at a temporary directory instead of the real `~/.aws`.
    pub fn under(home: &Path) -> Self {
        let aws_dir = home.join(AWS_DIR);

        Self {
            config_file: aws_dir.join("config"),
            credentials_file: aws_dir.join("credentials"),
        }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn credentials_file(&self) -> &Path {
        &self.credentials_file
    }
}
