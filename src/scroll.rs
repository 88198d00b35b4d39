//! Page scrolling and the scroll lock held while an overlay is open

use std::cell::Cell;
use std::rc::Rc;

/// Page-level flag that suspends background scrolling.
///
/// Clones share the same flag. The lock is only taken through
/// [`ScrollLock::acquire`], and the returned guard releases it when dropped,
/// so every exit path (explicit close, teardown of the owner) unlocks.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    locked: Rc<Cell<bool>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        self.locked.set(true);
        tracing::debug!("scroll lock acquired");
        ScrollLockGuard {
            lock: self.clone(),
        }
    }
}

/// Holds the scroll lock until dropped.
#[derive(Debug)]
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    lock: ScrollLock,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.locked.set(false);
        tracing::debug!("scroll lock released");
    }
}

/// Vertical scroll position of the dashboard body.
#[derive(Debug, Default)]
pub struct PageScroll {
    offset: u16,
    max_offset: u16,
    viewport: u16,
    lock: ScrollLock,
}

impl PageScroll {
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport: 0,
            lock,
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Rows visible at once, as of the last draw.
    pub fn viewport(&self) -> u16 {
        self.viewport
    }

    pub fn lock(&self) -> &ScrollLock {
        &self.lock
    }

    /// Record how far the current content can scroll in the current viewport.
    pub fn set_bounds(&mut self, content_height: u16, viewport_height: u16) {
        self.viewport = viewport_height;
        self.max_offset = content_height.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_offset);
    }

    /// Returns false when the page is locked and nothing moved.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        if self.lock.is_locked() {
            return false;
        }
        let next = (self.offset as i32 + delta).clamp(0, self.max_offset as i32);
        self.offset = next as u16;
        true
    }

    pub fn to_top(&mut self) -> bool {
        if self.lock.is_locked() {
            return false;
        }
        self.offset = 0;
        true
    }

    pub fn to_bottom(&mut self) -> bool {
        if self.lock.is_locked() {
            return false;
        }
        self.offset = self.max_offset;
        true
    }

    /// Jump back to the top regardless of the lock; used when the content changes.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
