use super::DataStore;
use crate::error::{Result, TaskError};
use crate::model::TaskCollection;
use log::debug;
use std::fs;
use std::path::PathBuf;

const DATA_FILENAME: &str = "tasks.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TaskError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<TaskCollection> {
        let data_file = self.data_file();
        if !data_file.exists() {
            debug!("No data file at {}, starting empty", data_file.display());
            return Ok(TaskCollection::new());
        }
        let content = fs::read_to_string(&data_file).map_err(TaskError::Io)?;
        let collection: TaskCollection =
            serde_json::from_str(&content).map_err(TaskError::Serialization)?;
        debug!(
            "Loaded {} tasks from {}",
            collection.tasks().len(),
            data_file.display()
        );
        Ok(collection)
    }

    fn save(&mut self, collection: &TaskCollection) -> Result<()> {
        self.ensure_dir()?;
        let data_file = self.data_file();
        let content =
            serde_json::to_string_pretty(collection).map_err(TaskError::Serialization)?;
        fs::write(&data_file, content).map_err(TaskError::Io)?;
        debug!(
            "Saved {} tasks to {}",
            collection.tasks().len(),
            data_file.display()
        );
        Ok(())
    }
}
