//! # Pin function controller
//!
//! Port B pins 8 to 11 carry the SCI signals once their function fields in
//! `PBCR1` select them:
//!
//! | Field    | Pin  | Function |
//! |----------|------|----------|
//! | `[1:0]`  | PB8  | RxD0     |
//! | `[3:2]`  | PB9  | TxD0     |
//! | `[5:4]`  | PB10 | RxD1     |
//! | `[7:6]`  | PB11 | TxD1     |
//!
//! Board bring-up owns every other field; the serial driver only rewrites the
//! nibble of the channel it configures.
use crate::pac::{pfc, PFC};

pub trait PfcExt {
    fn constrain(self) -> Parts;
}

impl PfcExt for PFC {
    fn constrain(self) -> Parts {
        Parts {
            // NOTE(unsafe) the PFC token is consumed here
            pbcr1: PBCR1::new(unsafe { PFC::registers() }),
        }
    }
}

/// HAL wrapper around the PFC registers
///
/// Acquired by calling [constrain](trait.PfcExt.html#constrain) on the
/// [PFC registers](../pac/struct.PFC.html)
pub struct Parts {
    pub pbcr1: PBCR1,
}

/// Pin routing field of one SCI channel in `PBCR1`
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinRoute {
    pub mask: u16,
    pub bits: u16,
}

impl PinRoute {
    /// PB9/PB8 as TxD0/RxD0
    pub const SCI0: PinRoute = PinRoute {
        mask: 0x000F,
        bits: 0x000A,
    };
    /// PB11/PB10 as TxD1/RxD1
    pub const SCI1: PinRoute = PinRoute {
        mask: 0x00F0,
        bits: 0x00A0,
    };
}

/// Port B control register 1 (PBCR1)
pub struct PBCR1 {
    rb: &'static pfc::RegisterBlock,
}

impl PBCR1 {
    pub(crate) fn new(rb: &'static pfc::RegisterBlock) -> Self {
        Self { rb }
    }

    pub fn read(&self) -> u16 {
        self.rb.pbcr1().get()
    }

    /// Rewrite the fields covered by `route`, keeping all other pins as they are
    pub fn route(&mut self, route: PinRoute) {
        let pbcr1 = self.rb.pbcr1();
        pbcr1.set((pbcr1.get() & !route.mask) | (route.bits & route.mask));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pbcr1(initial: u16) -> PBCR1 {
        let rb: &'static pfc::RegisterBlock = Box::leak(Box::new(pfc::RegisterBlock::new()));
        rb.pbcr1().set(initial);
        PBCR1::new(rb)
    }

    #[test]
    fn routes_only_the_channel_nibble() {
        let mut reg = pbcr1(0xFFFF);
        reg.route(PinRoute::SCI0);
        assert_eq!(reg.read(), 0xFFFA);

        let mut reg = pbcr1(0x1234);
        reg.route(PinRoute::SCI1);
        assert_eq!(reg.read(), 0x12A4);
    }

    #[test]
    fn both_channels_coexist() {
        let mut reg = pbcr1(0);
        reg.route(PinRoute::SCI0);
        reg.route(PinRoute::SCI1);
        assert_eq!(reg.read(), 0x00AA);
        // idempotent
        reg.route(PinRoute::SCI0);
        assert_eq!(reg.read(), 0x00AA);
    }
}
