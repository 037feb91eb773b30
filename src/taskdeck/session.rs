//! The active user's working state: identity, task collection, and the store it
//! came from. Built once by the client and passed explicitly; there is no global.

use crate::error::{Result, TaskError};
use crate::model::{TaskCollection, User};
use crate::store::DataStore;
use log::error;

pub struct Session<S: DataStore> {
    user: User,
    collection: TaskCollection,
    store: S,
}

impl<S: DataStore> Session<S> {
    /// Loads the user's collection from `store`.
    pub fn open(store: S, user: User) -> Result<Self> {
        let collection = store.load()?;
        Ok(Self {
            user,
            collection,
            store,
        })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn collection(&self) -> &TaskCollection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut TaskCollection {
        &mut self.collection
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes the collection through the store. Failures surface as
    /// [`TaskError::Persistence`] and are not retried.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.collection).map_err(|e| {
            error!("Unable to save tasks for {}: {}", self.user.username, e);
            match e {
                TaskError::Persistence(msg) => TaskError::Persistence(msg),
                other => TaskError::Persistence(other.to_string()),
            }
        })
    }
}
