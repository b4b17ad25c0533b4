use core::{fmt, mem};

use crate::block::{self, Raw};
use crate::shared::Shared;

/// Non-owning observer of a [`Shared`] allocation, or the empty handle.
///
/// A `Weak` never keeps the value alive: once the last `Shared` goes
/// away the value is destroyed, [`expired`][Weak::expired] flips to true
/// and stays there, and [`upgrade`][Weak::upgrade] starts returning
/// `None`. What a `Weak` *does* keep alive is the counts themselves, so
/// expiry can be queried after the value is long gone.
///
/// Created with [`Shared::downgrade`].
pub struct Weak<T: ?Sized> {
    raw: Option<Raw<T>>,
}

impl<T: ?Sized> Weak<T> {
    /// The empty handle: observes nothing, and is expired from birth.
    pub const fn empty() -> Weak<T> {
        Weak { raw: None }
    }

    /// Adopts an already-counted weak reference.
    pub(crate) fn from_raw(raw: Raw<T>) -> Weak<T> {
        Weak { raw: Some(raw) }
    }

    /// Attempts to promote the observer into an owner.
    ///
    /// Returns an owning handle while at least one strong owner is still
    /// keeping the value alive, and `None` once the value is gone. The expiry check and the count increment are one step; no
    /// release can happen in between.
    ///
    /// ```
    /// use shrc::Shared;
    ///
    /// let p = Shared::new(7);
    /// let w = Shared::downgrade(&p);
    /// assert_eq!(*w.upgrade().unwrap(), 7);
    /// drop(p);
    /// assert!(w.upgrade().is_none());
    /// ```
    pub fn upgrade(&self) -> Option<Shared<T>> {
        let raw = self.raw?;
        let h = unsafe { raw.header.as_ref() };
        if h.try_inc_strong() {
            Some(Shared::from_raw(raw))
        } else {
            None
        }
    }

    /// True once no strong owners remain (or for an empty handle), i.e.
    /// iff [`upgrade`][Weak::upgrade] would return `None`.
    pub fn expired(&self) -> bool {
        self.strong_count() == 0
    }

    // Get the current strong count of the observed block, or zero for an
    // empty handle.
    pub fn strong_count(&self) -> usize {
        match self.raw {
            Some(raw) => unsafe { raw.header.as_ref() }.strong(),
            None => 0,
        }
    }

    // Get the current weak count of the observed block, or zero for an
    // empty handle.
    pub fn weak_count(&self) -> usize {
        match self.raw {
            Some(raw) => unsafe { raw.header.as_ref() }.weak(),
            None => 0,
        }
    }

    /// Stops observing and leaves the handle empty.
    pub fn reset(&mut self) {
        *self = Weak::empty();
    }

    /// Exchanges the contents of two handles in constant time, without
    /// touching any counts.
    pub fn swap(&mut self, other: &mut Weak<T>) {
        mem::swap(&mut self.raw, &mut other.raw);
    }
}

impl<T: ?Sized> Clone for Weak<T> {
    fn clone(&self) -> Self {
        if let Some(raw) = self.raw {
            unsafe { raw.header.as_ref() }.inc_weak();
        }
        Weak { raw: self.raw }
    }
}

impl<T: ?Sized> Drop for Weak<T> {
    fn drop(&mut self) {
        if let Some(raw) = self.raw {
            // Safety: a non-empty handle holds one weak reference.
            unsafe { block::release_weak(raw.header) };
        }
    }
}

impl<T: ?Sized> Default for Weak<T> {
    fn default() -> Self {
        Weak::empty()
    }
}

impl<T: ?Sized> fmt::Debug for Weak<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Weak)")
    }
}
