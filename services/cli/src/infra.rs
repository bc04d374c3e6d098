use std::path::PathBuf;

use serde::Serialize;
use tutor_match::directory::Directory;
use tutor_match::error::AppError;

/// Load the directory from an explicit dataset path, falling back to the bundled sample.
pub(crate) fn load_directory(
    dataset: Option<PathBuf>,
) -> Result<(Directory, DataSource), AppError> {
    match dataset {
        Some(path) => {
            let directory = Directory::from_path(&path)?;
            tracing::info!(path = %path.display(), "loaded directory dataset");
            Ok((directory, DataSource::File(path)))
        }
        None => Ok((Directory::bundled()?, DataSource::Bundled)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DataSource {
    Bundled,
    File(PathBuf),
}

impl DataSource {
    pub(crate) fn describe(&self) -> String {
        match self {
            DataSource::Bundled => "bundled sample directory".to_string(),
            DataSource::File(path) => path.display().to_string(),
        }
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
