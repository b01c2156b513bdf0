//! Singleton: one lazily created record shared by every caller.
//!
//! `SingletonInstance::instance()` hands out `&'static` borrows of a single
//! record. The first call constructs it; racing first callers block on the
//! `OnceLock` until construction finishes, so exactly one record ever exists.
//! Mutation goes through an `RwLock`, which makes a write through one handle
//! visible through every other handle.

use std::sync::{OnceLock, PoisonError, RwLock};

use crate::console;

pub const INITIAL_DATA: &str = "Singleton Data Initialized";

/// A const-constructible, initialize-once holder.
///
/// Usable as a `static` (the process-wide case) or as a plain value, which
/// keeps tests independent of the global record.
pub struct LazySingleton<T> {
    cell: OnceLock<T>,
    init: fn() -> T,
}

impl<T> LazySingleton<T> {
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    pub fn get(&self) -> &T {
        self.cell.get_or_init(self.init)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[derive(Debug)]
pub struct SingletonInstance {
    data: RwLock<String>,
}

static INSTANCE: LazySingleton<SingletonInstance> = LazySingleton::new(SingletonInstance::new);

impl SingletonInstance {
    // Private: `instance()` is the only way in from outside this module.
    fn new() -> Self {
        Self {
            data: RwLock::new(INITIAL_DATA.to_string()),
        }
    }

    pub fn instance() -> &'static SingletonInstance {
        INSTANCE.get()
    }

    pub fn is_created() -> bool {
        INSTANCE.is_initialized()
    }

    pub fn data(&self) -> String {
        let guard = self.data.read().unwrap_or_else(|poisoned| {
            console::warn("singleton lock was poisoned, recovering");
            PoisonError::into_inner(poisoned)
        });
        guard.clone()
    }

    pub fn set_data(&self, new_data: impl Into<String>) {
        let new_data = new_data.into();
        let mut guard = self.data.write().unwrap_or_else(|poisoned| {
            console::warn("singleton lock was poisoned, recovering");
            PoisonError::into_inner(poisoned)
        });
        // A whole `String` is swapped in, so even a poisoned value is complete.
        *guard = new_data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    fn fresh() -> LazySingleton<SingletonInstance> {
        LazySingleton::new(SingletonInstance::new)
    }

    #[test]
    fn test_first_access_initializes_data() {
        let holder = fresh();
        assert!(!holder.is_initialized());
        assert_eq!(holder.get().data(), INITIAL_DATA);
        assert!(holder.is_initialized());
    }

    #[test]
    fn test_set_data_visible_through_later_handle() {
        let holder = fresh();
        let s1 = holder.get();
        s1.set_data("A");
        let s2 = holder.get();
        assert_eq!(s2.data(), "A");
    }

    #[test]
    fn test_three_handles_share_one_record() {
        let holder = fresh();
        let s1 = holder.get();
        let s2 = holder.get();
        let s3 = holder.get();

        s2.set_data("X");

        assert_eq!(s1.data(), "X");
        assert_eq!(s2.data(), "X");
        assert_eq!(s3.data(), "X");
        assert!(std::ptr::eq(s1, s3));
    }

    #[test]
    fn test_global_instance_identity() {
        let a = SingletonInstance::instance();
        let b = SingletonInstance::instance();
        assert!(std::ptr::eq(a, b));
        assert!(SingletonInstance::is_created());
    }

    #[test]
    fn test_concurrent_first_access_constructs_once() {
        static INIT_CALLS: AtomicUsize = AtomicUsize::new(0);
        static RACED: LazySingleton<SingletonInstance> = LazySingleton::new(counted_init);

        fn counted_init() -> SingletonInstance {
            INIT_CALLS.fetch_add(1, Ordering::SeqCst);
            SingletonInstance::new()
        }

        let threads = 16;
        let barrier = Arc::new(Barrier::new(threads));
        let addresses: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    let barrier = Arc::clone(&barrier);
                    scope.spawn(move || {
                        barrier.wait();
                        RACED.get() as *const SingletonInstance as usize
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("worker panicked"))
                .collect()
        });

        assert_eq!(INIT_CALLS.load(Ordering::SeqCst), 1);
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(RACED.get().data(), INITIAL_DATA);
    }

    #[test]
    fn test_concurrent_writers_leave_one_complete_value() {
        let holder = fresh();
        let record = holder.get();
        let values: Vec<String> = (0..8).map(|i| format!("writer-{i}")).collect();

        thread::scope(|scope| {
            for value in &values {
                scope.spawn(move || record.set_data(value.as_str()));
            }
        });

        assert!(values.contains(&record.data()));
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let holder = fresh();
        let record = holder.get();

        let result = thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = record.data.write().expect("lock available");
                    panic!("poison the singleton lock");
                })
                .join()
        });
        assert!(result.is_err());
        assert!(record.data.is_poisoned());

        assert_eq!(record.data(), INITIAL_DATA);
        record.set_data("after poison");
        assert_eq!(record.data(), "after poison");
    }

    proptest! {
        #[test]
        fn prop_repeated_access_is_idempotent(calls in 1usize..64) {
            let holder = fresh();
            let first = holder.get();
            for _ in 0..calls {
                let again = holder.get();
                prop_assert!(std::ptr::eq(first, again));
                prop_assert_eq!(again.data(), INITIAL_DATA);
            }
        }

        #[test]
        fn prop_write_through_any_handle_is_seen_by_all(value in ".*", writer in 0usize..3) {
            let holder = fresh();
            let handles = [holder.get(), holder.get(), holder.get()];
            handles[writer].set_data(value.clone());
            for handle in handles {
                prop_assert_eq!(handle.data(), value.clone());
            }
        }
    }
}
