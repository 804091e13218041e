use std::error::Error;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::traits::KeyValueStorage;


/// A storage that keeps every key in its own JSON file, inside a given folder
#[derive(Debug, Clone, PartialEq)]
pub struct FileStorage {
    backing_folder: PathBuf,
}

impl FileStorage {
    /// Use `folder` as the backing folder. It will be created on the first write if it does not exist yet.
    pub fn new(folder: &Path) -> Self {
        Self {
            backing_folder: PathBuf::from(folder),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.backing_folder
    }

    /// Get the path to the file that backs `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name = format!("{}.json", sanitize_filename::sanitize(key));
        self.backing_folder.join(file_name)
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No file at {:?}, key {:?} is empty", path, key);
                Ok(None)
            },
            Err(err) => Err(format!("Unable to read file {:?}: {}", path, err).into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        if let Err(err) = std::fs::create_dir_all(&self.backing_folder) {
            return Err(format!("Unable to create folder {:?}: {}", self.backing_folder, err).into());
        }

        // Write a sibling file first, so that the target is never left half-written
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        let mut file = match std::fs::File::create(&tmp_path) {
            Err(err) => {
                return Err(format!("Unable to create file {:?}: {}", tmp_path, err).into());
            },
            Ok(f) => f,
        };
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        drop(file);

        std::fs::rename(&tmp_path, &path)
            .map_err(|err| format!("Unable to replace file {:?}: {}", path, err))?;
        log::debug!("Saved {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}
