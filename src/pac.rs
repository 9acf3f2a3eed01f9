//! Peripheral access for the parts of the SH7021 this crate touches
//!
//! Only the registers needed by the serial driver are described: both SCI
//! channels, the port B control register of the pin function controller and
//! the interrupt priority registers.

#![allow(non_snake_case)]

use core::marker::PhantomData;
use core::ops::Deref;
use core::sync::atomic::{AtomicBool, Ordering};

pub mod intc;
pub mod pfc;
pub mod sci;

macro_rules! peripheral {
    ($(
        $(#[$meta:meta])*
        $PER:ident: $rb:ty = $addr:literal,
    )+) => {
        $(
            $(#[$meta])*
            pub struct $PER {
                _marker: PhantomData<*const ()>,
            }

            unsafe impl Send for $PER {}

            impl $PER {
                /// Pointer to the register block
                pub const PTR: *const $rb = $addr as *const _;

                /// Return the pointer to the register block
                #[inline(always)]
                pub const fn ptr() -> *const $rb {
                    Self::PTR
                }

                /// Register block with a `'static` lifetime
                ///
                /// # Safety
                ///
                /// The caller must own this peripheral or otherwise ensure no
                /// conflicting access happens through another handle.
                #[inline(always)]
                pub unsafe fn registers() -> &'static $rb {
                    &*Self::PTR
                }

                /// Unchecked access to the peripheral
                ///
                /// # Safety
                ///
                /// Creates a second owner if the peripheral was already taken.
                #[inline(always)]
                pub unsafe fn steal() -> Self {
                    Self { _marker: PhantomData }
                }
            }

            impl Deref for $PER {
                type Target = $rb;

                #[inline(always)]
                fn deref(&self) -> &Self::Target {
                    // NOTE(unsafe) fixed MMIO address, owned through this token
                    unsafe { &*Self::PTR }
                }
            }

            impl core::fmt::Debug for $PER {
                fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                    f.debug_struct(stringify!($PER)).finish()
                }
            }
        )+
    };
}

peripheral! {
    /// Serial communication interface, channel 0
    SCI0: sci::RegisterBlock = 0x05FF_FEC0,
    /// Serial communication interface, channel 1
    SCI1: sci::RegisterBlock = 0x05FF_FEC8,
    /// Pin function controller, port B control registers
    PFC: pfc::RegisterBlock = 0x05FF_FFCC,
    /// Interrupt controller, priority registers
    INTC: intc::RegisterBlock = 0x05FF_FF84,
}

static TAKEN: AtomicBool = AtomicBool::new(false);

/// All the peripherals
pub struct Peripherals {
    pub SCI0: SCI0,
    pub SCI1: SCI1,
    pub PFC: PFC,
    pub INTC: INTC,
}

impl Peripherals {
    /// Returns all the peripherals *once*
    pub fn take() -> Option<Self> {
        critical_section::with(|_| {
            if TAKEN.load(Ordering::Relaxed) {
                None
            } else {
                Some(unsafe { Peripherals::steal() })
            }
        })
    }

    /// Unchecked version of `Peripherals::take`
    ///
    /// # Safety
    ///
    /// Each returned token grants access to hardware registers. Calling this
    /// while another set of tokens is alive breaks the single owner rule the
    /// driver relies on.
    pub unsafe fn steal() -> Self {
        TAKEN.store(true, Ordering::Relaxed);
        Peripherals {
            SCI0: SCI0::steal(),
            SCI1: SCI1::steal(),
            PFC: PFC::steal(),
            INTC: INTC::steal(),
        }
    }
}
