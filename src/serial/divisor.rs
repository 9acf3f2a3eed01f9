//! Baud rate divisor
//!
//! The SCI bit rate generator produces
//!
//! ```text
//! B = Pφ / (32 * 4^n * (N + 1))
//! ```
//!
//! where `n` is the clock select field of SMR and `N` the value of BRR.

use crate::pac::sci::Smr;
use crate::time::{Bps, Hertz};

/// Requests above this rate use the undivided clock, the rest `Pφ/64`.
pub const SLOW_THRESHOLD: Bps = Bps(2_000);

/// Clock source of the bit rate generator (SMR.CKS)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockSelect {
    /// Pφ
    Div1 = 0,
    /// Pφ/4
    Div4 = 1,
    /// Pφ/16
    Div16 = 2,
    /// Pφ/64
    Div64 = 3,
}

impl ClockSelect {
    /// Value of the CKS field
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// SMR with only the clock select bits set (asynchronous, 8N1)
    pub const fn smr(self) -> Smr {
        Smr::from_bits_truncate(self.bits())
    }
}

/// Prescaler selector and reload value for one baud rate
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Divisor {
    pub cks: ClockSelect,
    pub brr: u8,
}

impl Divisor {
    /// Divisor approximating `baud` from a peripheral clock of `pclk`.
    ///
    /// Rates the generator can't reach saturate to the nearest setting: a
    /// reload below 0 becomes 0 and one above 255 becomes 255.
    pub const fn new(pclk: Hertz, baud: Bps) -> Self {
        let (cks, scale) = if baud.0 > SLOW_THRESHOLD.0 {
            (ClockSelect::Div1, 16)
        } else {
            (ClockSelect::Div64, 64 * 16)
        };

        // Pφ / (16 B) rounded half up, then halved: round(Pφ / 32B)
        let ticks = match pclk.raw().checked_div(baud.0.saturating_mul(scale)) {
            Some(ticks) => ticks,
            None => u32::MAX,
        };
        let rounded = ticks / 2 + ticks % 2;
        let reload = rounded.saturating_sub(1);

        Divisor {
            cks,
            brr: if reload > 255 { 255 } else { reload as u8 },
        }
    }

    /// Bit rate this divisor actually produces from `pclk`
    pub const fn actual(&self, pclk: Hertz) -> Bps {
        let prescale = 1u32 << (2 * self.cks.bits() as u32);
        Bps(pclk.raw() / (32 * prescale * (self.brr as u32 + 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::U32Ext;

    const PCLK: Hertz = Hertz::from_raw(16_000_000);

    #[test]
    fn standard_rates_at_16mhz() {
        // ((16_000_000 / 153_600) + 1) / 2 - 1 = (104 + 1) / 2 - 1
        assert_eq!(
            Divisor::new(PCLK, 9_600.bps()),
            Divisor { cks: ClockSelect::Div1, brr: 51 }
        );
        assert_eq!(Divisor::new(PCLK, 4_800.bps()).brr, 103);
        assert_eq!(Divisor::new(PCLK, 19_200.bps()).brr, 25);
        assert_eq!(Divisor::new(PCLK, 38_400.bps()).brr, 12);
    }

    #[test]
    fn midi_rate_is_exact() {
        let div = Divisor::new(PCLK, 31_250.bps());
        assert_eq!(div, Divisor { cks: ClockSelect::Div1, brr: 15 });
        assert_eq!(div.actual(PCLK), 31_250.bps());
    }

    #[test]
    fn threshold_selects_regime() {
        assert_eq!(Divisor::new(PCLK, 2_001.bps()).cks, ClockSelect::Div1);
        assert_eq!(Divisor::new(PCLK, 2_000.bps()).cks, ClockSelect::Div64);
        assert_eq!(
            Divisor::new(PCLK, 1_200.bps()),
            Divisor { cks: ClockSelect::Div64, brr: 6 }
        );
        assert_eq!(Divisor::new(PCLK, 300.bps()).brr, 25);
    }

    #[test]
    fn every_rate_up_to_the_ceiling_uses_its_regime() {
        for baud in 1..=38_400u32 {
            let div = Divisor::new(PCLK, baud.bps());
            let expected = if baud > 2_000 {
                ClockSelect::Div1
            } else {
                ClockSelect::Div64
            };
            assert_eq!(div.cks, expected, "baud {}", baud);
        }
    }

    #[test]
    fn low_rates_clamp_to_255() {
        // 16_000_000 / 1_024 = 15_625 ticks, far beyond the 8 bit reload
        assert_eq!(Divisor::new(PCLK, 1.bps()).brr, 255);
        assert_eq!(Divisor::new(PCLK, 10.bps()).brr, 255);
        // clock / 0 must not trap
        assert_eq!(Divisor::new(PCLK, 0.bps()).brr, 255);
    }

    #[test]
    fn high_rates_clamp_to_0() {
        assert_eq!(Divisor::new(PCLK, 1_000_000.bps()).brr, 0);
        assert_eq!(Divisor::new(PCLK, 4_000_000.bps()).brr, 0);
        assert_eq!(Divisor::new(PCLK, u32::MAX.bps()).brr, 0);
    }

    #[test]
    fn deterministic() {
        let a = Divisor::new(PCLK, 57_600.bps());
        let b = Divisor::new(PCLK, 57_600.bps());
        assert_eq!(a, b);
    }

    #[test]
    fn smr_carries_only_clock_select() {
        assert_eq!(ClockSelect::Div1.smr().bits(), 0x00);
        assert_eq!(ClockSelect::Div64.smr().bits(), 0x03);
    }
}
