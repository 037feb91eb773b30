use super::DataStore;
use crate::error::{Result, TaskError};
use crate::model::TaskCollection;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    collection: TaskCollection,
    fail_saves: bool,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(collection: TaskCollection) -> Self {
        Self {
            collection,
            ..Self::default()
        }
    }

    /// Make every subsequent `save` fail.
    pub fn failing(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn saved(&self) -> &TaskCollection {
        &self.collection
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<TaskCollection> {
        Ok(self.collection.clone())
    }

    fn save(&mut self, collection: &TaskCollection) -> Result<()> {
        if self.fail_saves {
            return Err(TaskError::Persistence("in-memory store is read-only".into()));
        }
        self.collection = collection.clone();
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Category, Priority, Task};
    use chrono::{Duration, NaiveDate};

    pub struct StoreFixture {
        pub collection: TaskCollection,
        pub today: NaiveDate,
    }

    impl StoreFixture {
        pub fn new(today: NaiveDate) -> Self {
            Self {
                collection: TaskCollection::new(),
                today,
            }
        }

        pub fn with_category(mut self, title: &str, icon: &str) -> Self {
            self.collection
                .add_category(Category::new(title, icon))
                .unwrap();
            self
        }

        /// Adds a task spanning `today + start_offset ..= today + end_offset` days.
        pub fn with_task(mut self, title: &str, start_offset: i64, end_offset: i64) -> Self {
            let start = self.today + Duration::days(start_offset);
            let end = self.today + Duration::days(end_offset);
            self.collection.add_task(Task::new(
                title,
                "",
                start.and_hms_opt(9, 0, 0).unwrap(),
                end.and_hms_opt(17, 0, 0).unwrap(),
                Priority::Medium,
            ));
            self
        }

        pub fn with_categorized_task(mut self, title: &str, category: &str) -> Self {
            let at = self.today.and_hms_opt(9, 0, 0).unwrap();
            self.collection.add_task(
                Task::new(title, "", at, at, Priority::Medium).with_category(category),
            );
            self
        }

        pub fn store(self) -> InMemoryStore {
            InMemoryStore::with_collection(self.collection)
        }
    }
}
