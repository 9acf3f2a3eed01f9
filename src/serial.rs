//! # Serial Communication (SCI)
//!
//! Two channels with fixed roles:
//!
//! - SCI0, the general channel: asynchronous 8N1, full duplex, caller chosen
//!   baud rate. Received bytes are moved by the RXI0 interrupt into a
//!   64 slot ring buffer that application code drains.
//! - SCI1, the MIDI channel: 8N1 at 31 250 baud, transmit only.
//!
//! Transmission is blocking: [`Tx::send`] spins on TDRE with no timeout.
//! Reception never blocks: [`Rx::read_byte`] returns 0 when nothing is
//! buffered.
//!
//! Faults are absorbed where they happen. A byte arriving while the ring is
//! full is dropped, framing/parity/overrun flags are cleared by
//! [`RxIrq::on_error`], and neither is reported.
//!
//! ## Example usage:
//!  ```rust,ignore
//! let dp = pac::Peripherals::take().unwrap();
//! let mut pfc = dp.PFC.constrain();
//! let mut intc = dp.INTC.constrain();
//! let clocks = Clocks::default();
//!
//! let serial = Serial::sci0(
//!     dp.SCI0,
//!     &mut pfc.pbcr1,
//!     &mut intc.ipr,
//!     Config::default().baudrate(31_250.bps()),
//!     &clocks,
//! );
//! let (mut tx, mut rx, irq) = serial.split();
//!
//! // hand `irq` to the RXI0 and ERI0 handlers, then:
//! tx.send(b'R');
//! if rx.available() > 0 {
//!     let received = rx.read_byte();
//! }
//!  ```

use core::convert::Infallible;
use core::marker::PhantomData;

use crate::clock::Clocks;
use crate::intc::{Source, IPR};
use crate::pac::sci::{RegisterBlock, Scr};
use crate::pac::{SCI0, SCI1};
use crate::pfc::{PinRoute, PBCR1};
use crate::time::Bps;
use crate::Sealed;

mod config;
pub use config::Config;
mod divisor;
pub use divisor::{ClockSelect, Divisor, SLOW_THRESHOLD};
mod hal_02;
mod hal_1;
mod rbext;
pub use rbext::RBExt;
pub mod ring;
use ring::{Consumer, Producer, RingBuffer};
#[cfg(test)]
mod sim;

/// Slots in the receive ring of the general channel. One stays free, so at
/// most 63 bytes are buffered.
pub const RX_BUFFER_SIZE: usize = 64;

/// Standard MIDI bit rate
pub const MIDI_BAUD: Bps = Bps(31_250);

/// Receive ring of SCI0. Filled by [`RxIrq`], drained by [`Rx`].
static RX_BUFFER: RingBuffer<RX_BUFFER_SIZE> = RingBuffer::new();

/// An SCI channel the driver can own
pub trait Instance: Sealed {
    type RB: RBExt + 'static;
    /// PBCR1 field routing TxD/RxD to the port B pins
    const PINS: PinRoute;
    /// Interrupt source carrying RXI and ERI
    const IRQ: Source;
}

impl Sealed for SCI0 {}
impl Instance for SCI0 {
    type RB = RegisterBlock;
    const PINS: PinRoute = PinRoute::SCI0;
    const IRQ: Source = Source::Sci0;
}

impl Sealed for SCI1 {}
impl Instance for SCI1 {
    type RB = RegisterBlock;
    const PINS: PinRoute = PinRoute::SCI1;
    const IRQ: Source = Source::Sci1;
}

/// Full duplex serial channel with interrupt driven reception
pub struct Serial<SCI: Instance, const N: usize = RX_BUFFER_SIZE> {
    pub tx: Tx<SCI>,
    pub rx: Rx<N>,
    pub irq: RxIrq<SCI, N>,
}

/// Blocking transmitter
pub struct Tx<SCI: Instance> {
    sci: &'static SCI::RB,
    _sci: PhantomData<SCI>,
}

// NOTE(unsafe) a `Tx` only touches TDR and the TDRE/TEND flags of its own
// channel, and there is one `Tx` per channel
unsafe impl<SCI: Instance + Send> Send for Tx<SCI> {}

/// Application side of the receive ring
pub struct Rx<const N: usize = RX_BUFFER_SIZE> {
    consumer: Consumer<'static, N>,
}

/// Interrupt side of the receiver: drains RDR into the receive ring and
/// clears receive faults.
///
/// Call [`on_receive`](Self::on_receive) from the RXI handler and
/// [`on_error`](Self::on_error) from the ERI handler of the channel. Both are
/// short, bounded and allocation free.
pub struct RxIrq<SCI: Instance, const N: usize = RX_BUFFER_SIZE> {
    sci: &'static SCI::RB,
    producer: Producer<'static, N>,
    _sci: PhantomData<SCI>,
}

// NOTE(unsafe) an `RxIrq` only touches RDR and the RDRF/error flags of its
// own channel, and there is one `RxIrq` per channel
unsafe impl<SCI: Instance + Send, const N: usize> Send for RxIrq<SCI, N> {}

impl Serial<SCI0> {
    /// Configures SCI0 as the general channel and creates the interface
    /// struct.
    ///
    /// 8N1 at `config.baudrate`, transmitter, receiver and receive interrupt
    /// enabled, status flags cleared except TDRE. PB9/PB8 are switched to
    /// TxD0/RxD0 and the SCI0 interrupt gets `config.priority`.
    ///
    /// Taking the `SCI0` token makes this the only owner of the process wide
    /// receive ring. Reconfiguring a channel that is still transmitting
    /// garbles the frame in flight.
    pub fn sci0(
        sci: SCI0,
        pins: &mut PBCR1,
        ipr: &mut IPR,
        config: impl Into<Config>,
        clocks: &Clocks,
    ) -> Self {
        let _ = sci;
        // NOTE(unsafe) the SCI0 token is consumed, so nobody else splits
        // RX_BUFFER or touches the registers
        let (producer, consumer) = unsafe { RX_BUFFER.split_unchecked() };
        let rb = unsafe { SCI0::registers() };
        Self::configure(rb, producer, consumer, pins, ipr, config.into(), clocks)
    }
}

impl<SCI: Instance, const N: usize> Serial<SCI, N> {
    pub(crate) fn configure(
        sci: &'static SCI::RB,
        producer: Producer<'static, N>,
        consumer: Consumer<'static, N>,
        pins: &mut PBCR1,
        ipr: &mut IPR,
        config: Config,
        clocks: &Clocks,
    ) -> Self {
        let divisor = Divisor::new(clocks.pclk(), config.baudrate);
        pins.route(SCI::PINS);
        sci.configure(divisor, Scr::TE | Scr::RE | Scr::RIE);
        ipr.set_priority(SCI::IRQ, config.priority);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "serial: {} bps, {}, priority {}",
            config.baudrate,
            divisor,
            config.priority
        );

        Serial {
            tx: Tx::new(sci),
            rx: Rx { consumer },
            irq: RxIrq {
                sci,
                producer,
                _sci: PhantomData,
            },
        }
    }

    /// Separates the channel into its transmitter, the consumer end of the
    /// receive ring and the interrupt handler
    pub fn split(self) -> (Tx<SCI>, Rx<N>, RxIrq<SCI, N>) {
        (self.tx, self.rx, self.irq)
    }
}

impl Tx<SCI1> {
    /// Configures SCI1 as the transmit-only MIDI channel.
    ///
    /// 8N1 at 31 250 baud, transmitter enabled, receiver and all interrupts
    /// off. PB11/PB10 are switched to TxD1/RxD1.
    pub fn midi(sci: SCI1, pins: &mut PBCR1, clocks: &Clocks) -> Self {
        let _ = sci;
        // NOTE(unsafe) the SCI1 token is consumed
        let rb = unsafe { SCI1::registers() };
        Self::transmit_only(rb, pins, MIDI_BAUD, clocks)
    }
}

impl<SCI: Instance> Tx<SCI> {
    fn new(sci: &'static SCI::RB) -> Self {
        Self {
            sci,
            _sci: PhantomData,
        }
    }

    pub(crate) fn transmit_only(
        sci: &'static SCI::RB,
        pins: &mut PBCR1,
        baud: Bps,
        clocks: &Clocks,
    ) -> Self {
        let divisor = Divisor::new(clocks.pclk(), baud);
        pins.route(SCI::PINS);
        sci.configure(divisor, Scr::TE);

        #[cfg(feature = "defmt")]
        defmt::debug!("serial: {} bps transmit only, {}", baud, divisor);

        Self::new(sci)
    }

    /// Sends one byte, spinning until the transmit data register is free.
    ///
    /// Never call this from an interrupt handler: if the transmitter never
    /// reports ready it never returns.
    pub fn send(&mut self, byte: u8) {
        self.sci.bwrite_u8(byte);
    }

    /// Sends `s` byte by byte up to its first NUL, or all of it if there is
    /// none.
    pub fn send_string(&mut self, s: &[u8]) {
        for &byte in s.iter().take_while(|&&byte| byte != 0) {
            self.send(byte);
        }
    }

    /// Non-blocking variant of [`send`](Self::send)
    pub fn write_u8(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        self.sci.write_u8(byte)
    }

    /// Done when the last byte has been shifted out
    pub fn flush(&mut self) -> nb::Result<(), Infallible> {
        self.sci.flush()
    }

    pub fn bflush(&mut self) {
        self.sci.bflush()
    }

    pub fn is_tx_empty(&self) -> bool {
        self.sci.is_tx_empty()
    }
}

impl<SCI: Instance> core::fmt::Write for Tx<SCI> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.sci.bwrite_all_u8(s.as_bytes());
        Ok(())
    }
}

impl<const N: usize> Rx<N> {
    /// Number of received bytes not yet read
    pub fn available(&self) -> usize {
        self.consumer.len()
    }

    /// Oldest received byte, or 0 if there is none.
    ///
    /// A received NUL and an empty buffer look the same here; check
    /// [`available`](Self::available) first, or use [`read`](Self::read).
    pub fn read_byte(&mut self) -> u8 {
        self.consumer.dequeue().unwrap_or(0)
    }

    /// Oldest received byte, `WouldBlock` if there is none
    pub fn read(&mut self) -> nb::Result<u8, Infallible> {
        self.consumer.dequeue().ok_or(nb::Error::WouldBlock)
    }

    pub fn peek(&self) -> Option<u8> {
        self.consumer.peek()
    }
}

impl<SCI: Instance, const N: usize> RxIrq<SCI, N> {
    /// Body of the receive-data-full interrupt (RXI).
    ///
    /// Reading RDR and clearing RDRF comes first so the hardware can accept
    /// the next frame; the byte is then stored, or dropped if the ring is
    /// full.
    pub fn on_receive(&mut self) {
        let byte = self.sci.take_received();
        if let Err(_dropped) = self.producer.enqueue(byte) {
            #[cfg(feature = "defmt")]
            defmt::trace!("serial: ring full, dropped {=u8:#x}", _dropped);
        }
    }

    /// Body of the receive-error interrupt (ERI). Clears ORER, FER and PER so
    /// reception continues; the fault is not recorded.
    pub fn on_error(&mut self) {
        let _cleared = self.sci.clear_error_flags();
        #[cfg(feature = "defmt")]
        defmt::trace!("serial: cleared {}", _cleared);
    }
}

pub type Tx0 = Tx<SCI0>;
pub type Tx1 = Tx<SCI1>;
pub type RxIrq0 = RxIrq<SCI0>;
