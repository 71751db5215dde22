//! Busy flags for buttons.

use leptos::prelude::*;

/// Holds a button's pending flag up for as long as it lives.
///
/// Dropping the guard lowers the flag, so the button returns to its resting
/// label whether the action succeeded, failed or was abandoned.
pub struct PendingGuard {
    flag: RwSignal<bool>,
}

impl PendingGuard {
    pub fn enter(flag: RwSignal<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_resets_on_drop() {
        let owner = Owner::new();
        owner.set();

        let flag = RwSignal::new(false);
        {
            let _guard = PendingGuard::enter(flag);
            assert!(flag.get_untracked());
        }
        assert!(!flag.get_untracked());
    }

    #[test]
    fn test_flag_resets_on_early_return() {
        let owner = Owner::new();
        owner.set();

        let flag = RwSignal::new(false);
        let pay = |value: u64| -> Result<(), String> {
            let _guard = PendingGuard::enter(flag);
            if value == 0 {
                return Err("Mint failed: Insufficient payment".to_string());
            }
            Ok(())
        };
        assert!(pay(0).is_err());
        assert!(!flag.get_untracked());
    }
}
