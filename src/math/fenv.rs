//! Sticky floating-point exception flags.
//!
//! Binary128 arithmetic here runs on integers, so the host FPU status word
//! never sees it. The evaluators raise flags explicitly through [`raise`];
//! callers inspect them with [`test`] / [`get`] and reset them with
//! [`clear`] / [`take`]. With the `std` feature every thread owns its flags,
//! matching a hardware floating-point environment; without it they are one
//! process-wide atomic.

use bitflags::bitflags;

bitflags! {
    /// IEEE-754 exception flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FpExceptions: u8 {
        const INVALID = 1 << 0;
        const DIV_BY_ZERO = 1 << 1;
        const OVERFLOW = 1 << 2;
        const UNDERFLOW = 1 << 3;
        const INEXACT = 1 << 4;
    }
}

#[cfg(feature = "std")]
mod store {
    use core::cell::Cell;

    std::thread_local! {
        static FLAGS: Cell<u8> = const { Cell::new(0) };
    }

    #[inline]
    pub(super) fn load() -> u8 {
        FLAGS.with(Cell::get)
    }

    #[inline]
    pub(super) fn or(bits: u8) {
        FLAGS.with(|f| f.set(f.get() | bits));
    }

    #[inline]
    pub(super) fn and(bits: u8) -> u8 {
        FLAGS.with(|f| {
            let old = f.get();
            f.set(old & bits);
            old
        })
    }
}

#[cfg(not(feature = "std"))]
mod store {
    use core::sync::atomic::{AtomicU8, Ordering};

    static FLAGS: AtomicU8 = AtomicU8::new(0);

    #[inline]
    pub(super) fn load() -> u8 {
        FLAGS.load(Ordering::Relaxed)
    }

    #[inline]
    pub(super) fn or(bits: u8) {
        FLAGS.fetch_or(bits, Ordering::Relaxed);
    }

    #[inline]
    pub(super) fn and(bits: u8) -> u8 {
        FLAGS.fetch_and(bits, Ordering::Relaxed)
    }
}

/// Sets `flags` in the sticky status.
#[inline]
pub fn raise(flags: FpExceptions) {
    if flags.is_empty() {
        return;
    }
    log::trace!("raising floating-point exceptions {flags:?}");
    store::or(flags.bits());
}

/// Subset of `flags` currently set.
#[inline]
pub fn test(flags: FpExceptions) -> FpExceptions {
    FpExceptions::from_bits_truncate(store::load()) & flags
}

/// Every flag currently set.
#[inline]
pub fn get() -> FpExceptions {
    FpExceptions::from_bits_truncate(store::load())
}

/// Clears `flags`, leaving the others untouched.
#[inline]
pub fn clear(flags: FpExceptions) {
    store::and(!flags.bits());
}

/// Returns every set flag and clears them all.
#[inline]
pub fn take() -> FpExceptions {
    FpExceptions::from_bits_truncate(store::and(0))
}
