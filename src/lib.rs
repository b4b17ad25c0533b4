/*!
Shared, reference-counted ownership with detachable weak observers, in
the style of C++'s `shared_ptr`/`weak_ptr`.

[`Shared<T>`] owns a heap value together with every other `Shared` cloned
from the same handle; the value is destroyed exactly when the last owner
is dropped or reset. [`Weak<T>`] observes the same allocation without
keeping the value alive: it can ask whether the value still exists and,
while it does, take ownership after the fact.

```rust
use shrc::{Shared, Weak};

let a = Shared::new(42);
let b = a.clone();
assert_eq!(*b, 42);
assert_eq!(Shared::strong_count(&a), 2);

let w: Weak<i32> = Shared::downgrade(&b);
drop(a);
assert!(!w.expired());
drop(b);
assert!(w.expired());
assert!(w.upgrade().is_none());
```

# Nullable handles

Unlike [`std::rc::Rc`], both handle types have a first-class *empty*
state, reachable with [`Shared::empty`], [`Shared::reset`] or
[`Default`]. An empty handle owns nothing, reports zero counts, and
panics if dereferenced; [`Shared::get`] is the total accessor.

```rust
use shrc::Shared;

let mut p = Shared::new(5);
Shared::reset(&mut p);
assert!(Shared::is_empty(&p));
assert_eq!(Shared::get(&p), None);
```

# Creation paths

[`Shared::new`] constructs the value in place, putting the counts and the
value in a single allocation. [`Shared::from_box`] adopts an allocation
that already exists, adding only a separate count block; the `Box` is
taken over as-is, never copied. [`Shared::project`] re-points a handle at
a subobject or coerced view of the same allocation, sharing its counts:

```rust
use shrc::Shared;

let p: Shared<str> = Shared::from_box("boxed".into());
assert_eq!(&*p, "boxed");

let q: Shared<[u8]> = Shared::project(Shared::new([1u8, 2, 3]), |a| &a[1..]);
assert_eq!(&*q, &[2, 3][..]);
```

# Differences from `std::rc`

* Handles are nullable, as above, and `Default` is the empty handle
  rather than an allocated `T::default()`.
* `PartialEq`/`Ord` on `Shared` compare the referenced **values** (two
  independently allocated fives are equal); [`Shared::ptr_eq`] is the
  identity comparison.
* `from_box` reuses the original allocation instead of moving out of it.
* Counts are plain cells and the handles are neither `Send` nor `Sync`;
  this crate is single-threaded by contract.
* If you leak so many handles that a count overflows, the std pointers
  abort; `shrc` does not, because there is no `abort()` in `no_std`.
*/
#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod block;
mod shared;
mod weak;

pub use self::shared::Shared;
pub use self::weak::Weak;
