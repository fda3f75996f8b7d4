//! Type aliases for shared state.
//!
//! Capability implementations hand a log handle to the caller and keep a
//! clone for themselves, so the log stays readable after the capability is
//! moved into a controller.
//!
//! ```rust,ignore
//! use stringplot_core::types::*;
//!
//! // Instead of: Arc<parking_lot::Mutex<Vec<Sample>>>
//! let log: ThreadSafeVec<Sample> = thread_safe_vec();
//! log.lock().push(sample);
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper.
///
/// Uses `parking_lot::Mutex`, which never poisons, so readers need no
/// error handling.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// A thread-safe vector, used for append-only sample logs.
pub type ThreadSafeVec<T> = ThreadSafe<Vec<T>>;

/// Create an empty thread-safe vector
pub fn thread_safe_vec<T>() -> ThreadSafeVec<T> {
    Arc::new(Mutex::new(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_storage() {
        let log: ThreadSafeVec<u32> = thread_safe_vec();
        let writer = Arc::clone(&log);
        writer.lock().push(7);
        assert_eq!(*log.lock(), vec![7]);
    }
}
