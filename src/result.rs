use indexmap::IndexMap;
use parking_lot::Mutex;
use serde_json::Value;
use std::fmt::Debug;

/// The result mapping of one calculation, in the order it is presented.
pub type ResultData = IndexMap<String, Value>;

/// Storage for the results of completed certifications, keyed by home status id.
pub trait ResultCache: Debug + Send + Sync {
    fn get(&self, home_status_id: u64) -> Option<ResultData>;
    fn put(&self, home_status_id: u64, data: ResultData);
}

#[derive(Debug, Default)]
pub struct InMemoryResultCache {
    rows: Mutex<IndexMap<u64, ResultData>>,
}

impl InMemoryResultCache {
    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

impl ResultCache for InMemoryResultCache {
    fn get(&self, home_status_id: u64) -> Option<ResultData> {
        self.rows.lock().get(&home_status_id).cloned()
    }

    fn put(&self, home_status_id: u64, data: ResultData) {
        self.rows.lock().insert(home_status_id, data);
    }
}

/// A cache that never holds anything.
#[derive(Debug, Default)]
pub struct NoResultCache;

impl ResultCache for NoResultCache {
    fn get(&self, _home_status_id: u64) -> Option<ResultData> {
        None
    }

    fn put(&self, _home_status_id: u64, _data: ResultData) {}
}
