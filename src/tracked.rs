// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test-only helpers: an element type that counts live values and can be
//! told to fail, and a global allocator that can be told to refuse a request.

// Crate imports
use crate::{element::Element, error::ConstructionFailed};

// Alloc imports
use alloc::{rc::Rc, vec::Vec};

// Core imports
use core::{cell::Cell, fmt, ptr};

// Std imports
use std::alloc::{GlobalAlloc, Layout, System};

#[derive(Default)]
struct Counts {
    live: Cell<isize>,
    constructions: Cell<usize>,
    fail_at: Cell<Option<usize>>,
}

/// Shared bookkeeping for every [`Tracked`] made from it.
#[derive(Clone, Default)]
pub(crate) struct Ledger(Rc<Counts>);

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn make(&self, value: u32) -> Tracked {
        self.0.live.set(self.0.live.get() + 1);
        Tracked {
            value,
            ledger: self.clone(),
        }
    }

    pub(crate) fn make_many(&self, values: &[u32]) -> Vec<Tracked> {
        values.iter().map(|&v| self.make(v)).collect()
    }

    /// Number of `Tracked` values currently alive.
    pub(crate) fn live(&self) -> isize {
        self.0.live.get()
    }

    /// Clone and relocate attempts so far, failed ones included.
    pub(crate) fn constructions(&self) -> usize {
        self.0.constructions.get()
    }

    /// Makes the `k`-th construction from now fail (`k >= 1`).
    pub(crate) fn fail_on(&self, k: usize) {
        self.0.fail_at.set(Some(self.0.constructions.get() + k));
    }

    fn tick(&self) -> Result<(), ConstructionFailed> {
        let n = self.0.constructions.get() + 1;
        self.0.constructions.set(n);
        if self.0.fail_at.get() == Some(n) {
            self.0.fail_at.set(None);
            return Err(ConstructionFailed);
        }
        Ok(())
    }
}

pub(crate) struct Tracked {
    value: u32,
    ledger: Ledger,
}

impl Tracked {
    pub(crate) fn value(&self) -> u32 {
        self.value
    }
}

impl Element for Tracked {
    fn try_clone(&self) -> Result<Self, ConstructionFailed> {
        self.ledger.tick()?;
        Ok(self.ledger.make(self.value))
    }

    fn try_relocate(&self) -> Result<(), ConstructionFailed> {
        self.ledger.tick()
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        let live = &self.ledger.0.live;
        live.set(live.get() - 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

impl fmt::Display for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

std::thread_local! {
    static FAIL_NEXT_ALLOCATION: Cell<bool> = const { Cell::new(false) };
}

/// Makes the next `alloc` or `realloc` on this thread return null.
pub(crate) fn fail_next_allocation() {
    FAIL_NEXT_ALLOCATION.with(|armed| armed.set(true));
}

fn take_allocation_failure() -> bool {
    FAIL_NEXT_ALLOCATION
        .try_with(|armed| armed.replace(false))
        .unwrap_or(false)
}

/// `System`, except when a failure has been armed for the calling thread.
struct FlakyAllocator;

// SAFETY: every request is forwarded to `System` unchanged, or refused with null.
unsafe impl GlobalAlloc for FlakyAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if take_allocation_failure() {
            return ptr::null_mut();
        }
        // SAFETY: forwarded with the caller's guarantees.
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, p: *mut u8, layout: Layout) {
        // SAFETY: `p` came from `System` through `alloc`/`realloc` above.
        unsafe { System.dealloc(p, layout) }
    }

    unsafe fn realloc(&self, p: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if take_allocation_failure() {
            return ptr::null_mut();
        }
        // SAFETY: forwarded with the caller's guarantees.
        unsafe { System.realloc(p, layout, new_size) }
    }
}

#[global_allocator]
static ALLOCATOR: FlakyAllocator = FlakyAllocator;
