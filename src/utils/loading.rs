//! Scoped loading indicator.

use std::sync::atomic::{AtomicUsize, Ordering};

/// A loading flag that stays raised while at least one operation is in flight.
///
/// Raised by [`LoadingFlag::begin`] and lowered when the returned guard drops,
/// whichever path the operation leaves by.
#[derive(Debug, Default)]
pub struct LoadingFlag {
    in_flight: AtomicUsize,
}

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadingGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard { flag: self }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }
}

/// Lowers the flag on drop.
#[must_use = "the loading flag is lowered as soon as the guard is dropped"]
pub struct LoadingGuard<'a> {
    flag: &'a LoadingFlag,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_lowers_flag_on_drop() {
        let flag = LoadingFlag::new();
        assert!(!flag.is_loading());

        {
            let _guard = flag.begin();
            assert!(flag.is_loading());
        }

        assert!(!flag.is_loading());
    }

    #[test]
    fn test_overlapping_guards() {
        let flag = LoadingFlag::new();
        let first = flag.begin();
        let second = flag.begin();

        drop(first);
        assert!(flag.is_loading());

        drop(second);
        assert!(!flag.is_loading());
    }

    #[test]
    fn test_guard_lowers_flag_on_early_return() {
        fn fails(flag: &LoadingFlag) -> Result<u32, String> {
            let _guard = flag.begin();
            let value: u32 = "not a number".parse().map_err(|_| "parse".to_string())?;
            Ok(value)
        }

        let flag = LoadingFlag::new();
        assert!(fails(&flag).is_err());
        assert!(!flag.is_loading());
    }
}
