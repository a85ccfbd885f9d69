use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Bounded in-memory record of recent submissions, oldest dropped first.
#[derive(Debug)]
pub struct DiagnosticLog<T> {
    records: Arc<Mutex<VecDeque<T>>>,
    capacity: usize,
}

impl<T> Clone for DiagnosticLog<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            capacity: self.capacity,
        }
    }
}

impl<T: Clone> DiagnosticLog<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        // A panic while pushing cannot leave the queue half-updated.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record(&self, entry: T) {
        if self.capacity == 0 {
            return;
        }

        let mut records = self.lock();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(entry);
    }

    pub fn entries(&self) -> Vec<T> {
        self.lock().iter().cloned().collect()
    }
}
