//! Allocation-level checks: the in-place factory makes exactly one
//! allocation, wrapping a box adds exactly one, and the count block
//! outlives the dead value precisely until its last weak observer drops.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering::Relaxed};

use shrc::Shared;

struct Counting;

static LIVE: AtomicUsize = AtomicUsize::new(0);
static TOTAL: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let p = System.alloc(layout);
        if !p.is_null() {
            LIVE.fetch_add(1, Relaxed);
            TOTAL.fetch_add(1, Relaxed);
        }
        p
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        LIVE.fetch_sub(1, Relaxed);
        System.dealloc(ptr, layout);
    }
}

#[global_allocator]
static ALLOC: Counting = Counting;

// A single test function: the counters are process-wide, so interleaved
// tests would see each other's allocations.
#[test]
fn allocation_lifecycle() {
    // The in-place factory performs exactly one allocation.
    let total = TOTAL.load(Relaxed);
    let live = LIVE.load(Relaxed);
    let a = Shared::new(7u64);
    assert_eq!(TOTAL.load(Relaxed) - total, 1);
    assert_eq!(LIVE.load(Relaxed) - live, 1);

    // Sharing and observing never allocate.
    let b = a.clone();
    let w = Shared::downgrade(&a);
    assert_eq!(TOTAL.load(Relaxed) - total, 1);

    // The last strong release destroys the value but the block must
    // survive for `w` to query.
    drop(a);
    drop(b);
    assert!(w.expired());
    assert_eq!(LIVE.load(Relaxed) - live, 1);

    // The last weak release frees the block.
    drop(w);
    assert_eq!(LIVE.load(Relaxed), live);

    // Wrapping an existing box adds exactly one allocation (the block);
    // the boxed value is freed with the last strong handle, the block
    // with the last weak one.
    let total = TOTAL.load(Relaxed);
    let live = LIVE.load(Relaxed);
    let c = Shared::from_box(Box::new(3u32));
    assert_eq!(TOTAL.load(Relaxed) - total, 2);
    assert_eq!(LIVE.load(Relaxed) - live, 2);
    let w = Shared::downgrade(&c);
    drop(c);
    assert_eq!(LIVE.load(Relaxed) - live, 1);
    drop(w);
    assert_eq!(LIVE.load(Relaxed), live);
}
