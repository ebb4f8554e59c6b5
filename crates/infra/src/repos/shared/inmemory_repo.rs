use anyhow::anyhow;
use company_stocks_domain::Entity;
use std::sync::{Mutex, MutexGuard};

/// Useful functions for creating inmemory repositories

fn lock<T>(collection: &Mutex<Vec<T>>) -> anyhow::Result<MutexGuard<'_, Vec<T>>> {
    collection
        .lock()
        .map_err(|_| anyhow!("Inmemory collection is poisoned"))
}

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) -> anyhow::Result<()> {
    let mut collection = lock(collection)?;
    collection.push(val.clone());
    Ok(())
}

/// Replaces the stored value with the same id. Returns false when there was nothing to replace.
pub fn save<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) -> anyhow::Result<bool> {
    let mut collection = lock(collection)?;
    match collection.iter_mut().find(|item| item.id() == val.id()) {
        Some(item) => {
            *item = val.clone();
            Ok(true)
        }
        None => Ok(false),
    }
}

pub fn find_all<T: Clone>(collection: &Mutex<Vec<T>>) -> anyhow::Result<Vec<T>> {
    let collection = lock(collection)?;
    Ok(collection.clone())
}
