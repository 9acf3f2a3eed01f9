//! Single producer, single consumer byte ring
//!
//! The receive interrupt owns the [`Producer`] and is the only writer of the
//! write cursor and of the slots. Application code owns the [`Consumer`] and
//! is the only writer of the read cursor. Each cursor is a single atomic word,
//! so the other side always sees either the old or the new value.
//!
//! One slot is never filled: `write == read` means empty and
//! `write + 1 == read` means full, so a ring of `N` slots holds `N - 1` bytes.

use core::cell::UnsafeCell;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Fixed capacity circular byte store with independent read and write cursors
pub struct RingBuffer<const N: usize> {
    buffer: UnsafeCell<[u8; N]>,
    write: AtomicUsize,
    read: AtomicUsize,
}

// NOTE(unsafe) slots are only written through the unique `Producer` and only
// read through the unique `Consumer`, ordered by the cursor accesses
unsafe impl<const N: usize> Sync for RingBuffer<N> {}

impl<const N: usize> RingBuffer<N> {
    const MIN_SLOTS: () = assert!(N >= 2, "a ring buffer needs at least two slots");

    /// Creates an empty ring
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::MIN_SLOTS;
        Self {
            buffer: UnsafeCell::new([0; N]),
            write: AtomicUsize::new(0),
            read: AtomicUsize::new(0),
        }
    }

    /// Number of bytes the ring can hold
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Number of unread bytes
    pub fn len(&self) -> usize {
        let write = self.write.load(Ordering::Acquire);
        let read = self.read.load(Ordering::Acquire);
        (N + write - read) % N
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Splits the ring into its two ends
    pub fn split(&mut self) -> (Producer<'_, N>, Consumer<'_, N>) {
        // NOTE(unsafe) the exclusive borrow guarantees no other split exists
        unsafe { self.split_unchecked() }
    }

    /// Splits a shared ring into its two ends
    ///
    /// # Safety
    ///
    /// At most one `Producer` and one `Consumer` may exist for this ring at any
    /// time.
    pub unsafe fn split_unchecked(&self) -> (Producer<'_, N>, Consumer<'_, N>) {
        (
            Producer {
                ring: self,
                _not_sync: PhantomData,
            },
            Consumer {
                ring: self,
                _not_sync: PhantomData,
            },
        )
    }

    #[inline(always)]
    const fn next(index: usize) -> usize {
        (index + 1) % N
    }
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Writing end of a [`RingBuffer`], owned by the receive interrupt
pub struct Producer<'a, const N: usize> {
    ring: &'a RingBuffer<N>,
    _not_sync: PhantomData<*const ()>,
}

unsafe impl<'a, const N: usize> Send for Producer<'a, N> {}

impl<'a, const N: usize> Producer<'a, N> {
    /// Stores `byte` unless the ring is full, in which case `byte` is handed
    /// back and nothing changes.
    #[inline]
    pub fn enqueue(&mut self, byte: u8) -> Result<(), u8> {
        let write = self.ring.write.load(Ordering::Relaxed);
        let next = RingBuffer::<N>::next(write);
        if next == self.ring.read.load(Ordering::Acquire) {
            return Err(byte);
        }
        // NOTE(unsafe) `write` is below N and the slot is not visible to the
        // consumer until the cursor store below
        unsafe { (self.ring.buffer.get() as *mut u8).add(write).write(byte) };
        self.ring.write.store(next, Ordering::Release);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        RingBuffer::<N>::next(self.ring.write.load(Ordering::Relaxed))
            == self.ring.read.load(Ordering::Acquire)
    }
}

/// Reading end of a [`RingBuffer`], owned by application code
pub struct Consumer<'a, const N: usize> {
    ring: &'a RingBuffer<N>,
    _not_sync: PhantomData<*const ()>,
}

unsafe impl<'a, const N: usize> Send for Consumer<'a, N> {}

impl<'a, const N: usize> Consumer<'a, N> {
    /// Oldest unread byte, or `None` without touching the cursors
    #[inline]
    pub fn dequeue(&mut self) -> Option<u8> {
        let read = self.ring.read.load(Ordering::Relaxed);
        if read == self.ring.write.load(Ordering::Acquire) {
            return None;
        }
        // NOTE(unsafe) the producer published this slot before moving the
        // write cursor past it and won't touch it until `read` moves on
        let byte = unsafe { (self.ring.buffer.get() as *const u8).add(read).read() };
        self.ring.read.store(RingBuffer::<N>::next(read), Ordering::Release);
        Some(byte)
    }

    /// Oldest unread byte without consuming it
    pub fn peek(&self) -> Option<u8> {
        let read = self.ring.read.load(Ordering::Relaxed);
        if read == self.ring.write.load(Ordering::Acquire) {
            None
        } else {
            // NOTE(unsafe) see `dequeue`
            Some(unsafe { (self.ring.buffer.get() as *const u8).add(read).read() })
        }
    }

    /// Number of unread bytes
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }
}
