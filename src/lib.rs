//! # Serial driver for the SH7021 SCI on the Casio Loopy
//!
//! The SH7021 has two serial communication interfaces. This crate drives both:
//!
//! - **SCI0** as a general purpose full duplex UART (8N1, any baud rate the
//!   divisor can reach) with an interrupt fed receive ring buffer.
//! - **SCI1** as a transmit-only MIDI out port at the fixed 31 250 baud.
//!
//! Both channels share one divisor calculation, see [`serial::Divisor`].
//!
//! # Usage
//!
//! ```rust,ignore
//! #![no_std]
//! #![no_main]
//!
//! use loopy_serial::{clock::Clocks, pac, prelude::*, serial::{Serial, Tx}};
//!
//! let dp = pac::Peripherals::take().unwrap();
//! let mut pfc = dp.PFC.constrain();
//! let mut intc = dp.INTC.constrain();
//! let clocks = Clocks::default();
//!
//! // SCI0 at 9600 baud, receive interrupt enabled
//! let (mut tx, mut rx, irq) = Serial::sci0(
//!     dp.SCI0,
//!     &mut pfc.pbcr1,
//!     &mut intc.ipr,
//!     9_600.bps(),
//!     &clocks,
//! )
//! .split();
//!
//! // SCI1 as MIDI out
//! let mut midi = Tx::midi(dp.SCI1, &mut pfc.pbcr1, &clocks);
//!
//! // `irq` goes wherever the RXI0/ERI0 handlers can reach it; they call
//! // `irq.on_receive()` and `irq.on_error()`.
//!
//! tx.send_string(b"hello\0");
//! midi.send(0x90);
//! while rx.available() > 0 {
//!     let byte = rx.read_byte();
//!     tx.send(byte);
//! }
//! ```
//!
//! # Board configuration
//!
//! The peripheral clock is fixed at build time. It defaults to 16 MHz and is
//! overridden with the `LOOPY_SERIAL_PCLK_HZ` environment variable.

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod intc;
pub mod pac;
pub mod pacext;
pub mod pfc;
pub mod prelude;
pub mod serial;
pub mod time;

/// Generated by `build.rs`.
pub mod board {
    include!(concat!(env!("OUT_DIR"), "/board.rs"));
}

mod sealed {
    pub trait Sealed {}
}
pub(crate) use sealed::Sealed;
