//! Simulated SCI channel for host tests
//!
//! Emulates what the driver depends on: SSR flags clear on a write of 0 after
//! being read as 1, clearing TDRE moves TDR into the transmitter, and a byte
//! arriving while RDRF is still set raises ORER instead of landing in RDR.

use core::cell::{Cell, RefCell};
use core::marker::PhantomData;

use crate::intc::Source;
use crate::pac::sci::{Scr, Smr, Ssr};
use crate::pacext::sci::SciRB;
use crate::pfc::PinRoute;
use crate::Sealed;

use super::Instance;

/// Flags a write of 0 can clear
const CLEARABLE: Ssr = Ssr::from_bits_truncate(
    Ssr::TDRE.bits() | Ssr::RDRF.bits() | Ssr::ORER.bits() | Ssr::FER.bits() | Ssr::PER.bits(),
);

pub struct SimRegisters {
    smr: Cell<Smr>,
    brr: Cell<u8>,
    scr: Cell<Scr>,
    tdr: Cell<u8>,
    ssr: Cell<Ssr>,
    rdr: Cell<u8>,
    /// Flags read as 1 since they were last written
    armed: Cell<Ssr>,
    sent: RefCell<Vec<u8>>,
}

impl SimRegisters {
    /// Registers at their reset values
    pub fn new() -> Self {
        Self {
            smr: Cell::new(Smr::empty()),
            brr: Cell::new(0xFF),
            scr: Cell::new(Scr::empty()),
            tdr: Cell::new(0xFF),
            ssr: Cell::new(Ssr::TDRE | Ssr::TEND),
            rdr: Cell::new(0),
            armed: Cell::new(Ssr::empty()),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn leak() -> &'static Self {
        Box::leak(Box::new(Self::new()))
    }

    pub fn smr(&self) -> Smr {
        self.smr.get()
    }

    pub fn brr(&self) -> u8 {
        self.brr.get()
    }

    pub fn scr(&self) -> Scr {
        self.scr.get()
    }

    pub fn ssr(&self) -> Ssr {
        self.ssr.get()
    }

    /// Bytes that left the transmitter so far
    pub fn sent(&self) -> Vec<u8> {
        self.sent.borrow().clone()
    }

    /// A frame arrives on RxD. Returns whether RXI fires.
    pub fn receive(&self, byte: u8) -> bool {
        if !self.scr.get().contains(Scr::RE) {
            return false;
        }
        let ssr = self.ssr.get();
        if ssr.intersects(Ssr::ERRORS) {
            // reception halts until the error flags are cleared
            return false;
        }
        if ssr.contains(Ssr::RDRF) {
            self.ssr.set(ssr | Ssr::ORER);
            return false;
        }
        self.rdr.set(byte);
        self.ssr.set(ssr | Ssr::RDRF);
        self.scr.get().contains(Scr::RIE)
    }

    /// Raise receive error flags. Returns whether ERI fires.
    pub fn fault(&self, flags: Ssr) -> bool {
        self.ssr.set(self.ssr.get() | (flags & Ssr::ERRORS));
        self.scr.get().contains(Scr::RIE)
    }

    /// The transmitter is stuck: TDRE stays clear
    pub fn stall(&self) {
        self.ssr.set(self.ssr.get() - (Ssr::TDRE | Ssr::TEND));
        self.armed.set(self.armed.get() - Ssr::TDRE);
    }
}

impl Sealed for SimRegisters {}

impl SciRB for SimRegisters {
    fn smr_write(&self, smr: Smr) {
        self.smr.set(smr);
    }
    fn brr_write(&self, brr: u8) {
        self.brr.set(brr);
    }
    fn scr_read(&self) -> Scr {
        self.scr.get()
    }
    fn scr_write(&self, scr: Scr) {
        self.scr.set(scr);
    }
    fn tdr_write(&self, byte: u8) {
        self.tdr.set(byte);
    }
    fn ssr_read(&self) -> Ssr {
        let ssr = self.ssr.get();
        self.armed.set(self.armed.get() | (ssr & CLEARABLE));
        ssr
    }
    fn ssr_write(&self, value: Ssr) {
        let ssr = self.ssr.get();
        let cleared = self.armed.get() & CLEARABLE & !value;
        let mut next = ssr - cleared;
        next.set(Ssr::MPBT, value.contains(Ssr::MPBT));
        self.armed.set(self.armed.get() - cleared);

        if cleared.contains(Ssr::TDRE) {
            // TDRE cleared: TDR moves to the shift register and goes out
            next -= Ssr::TEND;
            if self.scr.get().contains(Scr::TE) {
                self.sent.borrow_mut().push(self.tdr.get());
                next |= Ssr::TDRE | Ssr::TEND;
            }
        }
        self.ssr.set(next);
    }
    fn rdr_read(&self) -> u8 {
        self.rdr.get()
    }
}

/// Marker instance backed by [`SimRegisters`], wired like SCI0
pub struct SimSci {
    _marker: PhantomData<*const ()>,
}

impl Sealed for SimSci {}

impl Instance for SimSci {
    type RB = SimRegisters;
    const PINS: PinRoute = PinRoute::SCI0;
    const IRQ: Source = Source::Sci0;
}

/// Marker instance backed by [`SimRegisters`], wired like SCI1
pub struct SimMidi {
    _marker: PhantomData<*const ()>,
}

impl Sealed for SimMidi {}

impl Instance for SimMidi {
    type RB = SimRegisters;
    const PINS: PinRoute = PinRoute::SCI1;
    const IRQ: Source = Source::Sci1;
}

#[test]
fn flags_need_a_read_before_they_clear() {
    let sci = SimRegisters::new();
    sci.scr_write(Scr::RE);
    assert!(!sci.receive(0x42));
    assert!(sci.ssr().contains(Ssr::RDRF));

    sci.ssr_write(Ssr::empty());
    assert!(sci.ssr().contains(Ssr::RDRF));

    let _ = sci.ssr_read();
    sci.ssr_write(Ssr::TDRE);
    assert_eq!(sci.ssr(), Ssr::TDRE | Ssr::TEND);
}
