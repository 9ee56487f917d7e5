//! Body scroll locking for open modals.
//!
//! A [`ScrollLock`] hides page overflow while it lives. Locks nest: the page
//! only scrolls again once the last outstanding lock is dropped, so two
//! overlapping modals cannot unlock each other. The overflow value seen by
//! the first lock is the one put back by the last.

use std::cell::RefCell;

use log::warn;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Locks outstanding on a target and the overflow it had before the first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LockState {
    pub count: usize,
    pub saved_overflow: String,
}

/// Something whose overflow can be toggled, plus the lock state shared by
/// every lock held on it.
pub trait OverflowTarget {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
    fn lock_state(&self) -> LockState;
    fn set_lock_state(&self, state: LockState);
}

thread_local! {
    static BODY_LOCKS: RefCell<LockState> = RefCell::new(LockState::default());
}

pub struct PageBody {
    body: HtmlElement,
}

impl PageBody {
    pub fn current() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        Some(Self { body })
    }
}

impl OverflowTarget for PageBody {
    fn overflow(&self) -> String {
        self.body.style().get_property_value("overflow").unwrap_or_else(|e| {
            warn!("Failed to read body overflow: {:?}", e);
            String::new()
        })
    }

    fn set_overflow(&self, value: &str) {
        if let Err(e) = self.body.style().set_property("overflow", value) {
            warn!("Failed to set body overflow: {:?}", e);
        }
    }

    fn lock_state(&self) -> LockState {
        BODY_LOCKS.with(|s| s.borrow().clone())
    }

    fn set_lock_state(&self, state: LockState) {
        BODY_LOCKS.with(|s| *s.borrow_mut() = state);
    }
}

pub struct ScrollLock<T: OverflowTarget = PageBody> {
    target: T,
}

impl<T: OverflowTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        let mut state = target.lock_state();
        if state.count == 0 {
            state.saved_overflow = target.overflow();
            target.set_overflow("hidden");
        }
        state.count += 1;
        target.set_lock_state(state);
        Self { target }
    }
}

impl<T: OverflowTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        let mut state = self.target.lock_state();
        state.count = state.count.saturating_sub(1);
        if state.count == 0 {
            self.target.set_overflow(&state.saved_overflow);
            state.saved_overflow.clear();
        }
        self.target.set_lock_state(state);
    }
}

/// Holds a body scroll lock for as long as `active` is true and the calling
/// component is mounted.
#[hook]
pub fn use_scroll_lock(active: bool) {
    use_effect_with_deps(
        move |active| {
            let lock = if *active {
                PageBody::current().map(ScrollLock::acquire)
            } else {
                None
            };
            move || drop(lock)
        },
        active,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody {
        overflow: Rc<RefCell<String>>,
        state: Rc<RefCell<LockState>>,
    }

    impl FakeBody {
        fn with_overflow(value: &str) -> Self {
            let body = Self::default();
            *body.overflow.borrow_mut() = value.to_string();
            body
        }
    }

    impl OverflowTarget for FakeBody {
        fn overflow(&self) -> String {
            self.overflow.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.overflow.borrow_mut() = value.to_string();
        }

        fn lock_state(&self) -> LockState {
            self.state.borrow().clone()
        }

        fn set_lock_state(&self, state: LockState) {
            *self.state.borrow_mut() = state;
        }
    }

    #[test]
    fn lock_released_on_drop() {
        let body = FakeBody::with_overflow("auto");
        {
            let _lock = ScrollLock::acquire(body.clone());
            assert_eq!(*body.overflow.borrow(), "hidden");
        }
        assert_eq!(*body.overflow.borrow(), "auto");
        assert_eq!(body.state.borrow().count, 0);
    }

    #[test]
    fn release_restores_the_overflow_seen_before_locking() {
        let body = FakeBody::with_overflow("scroll");
        drop(ScrollLock::acquire(body.clone()));
        assert_eq!(*body.overflow.borrow(), "scroll");

        let unset = FakeBody::default();
        drop(ScrollLock::acquire(unset.clone()));
        assert_eq!(*unset.overflow.borrow(), "");
    }

    #[test]
    fn nested_locks_release_in_any_order() {
        let body = FakeBody::with_overflow("visible");
        let first = ScrollLock::acquire(body.clone());
        let second = ScrollLock::acquire(body.clone());
        drop(first);
        assert_eq!(*body.overflow.borrow(), "hidden");
        drop(second);
        assert_eq!(*body.overflow.borrow(), "visible");
    }
}
