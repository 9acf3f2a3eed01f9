//! # Peripheral clock
//!
//! The clock tree is set up by board bring-up code before this driver runs.
//! The driver only needs the resulting peripheral clock to derive its baud
//! rate divisors. [`Clocks`] carries that frequency; its existence means the
//! value is frozen.

use crate::board::PCLK_HZ;
use crate::time::Hertz;

/// Peripheral clock of the board this crate was built for
pub const PCLK: Hertz = Hertz::from_raw(PCLK_HZ);

/// Frozen clock frequencies
///
/// The existence of this value indicates that the clock configuration can no
/// longer be changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clocks {
    pclk: Hertz,
}

impl Clocks {
    /// Clocks for a board whose peripheral clock runs at `pclk`
    pub const fn new(pclk: Hertz) -> Self {
        Self { pclk }
    }

    /// Returns the frequency of the peripheral clock feeding the SCI
    pub const fn pclk(&self) -> Hertz {
        self.pclk
    }
}

impl Default for Clocks {
    /// Clocks for the board configured at build time
    fn default() -> Self {
        Self::new(PCLK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_board_clock() {
        assert_eq!(Clocks::default().pclk().raw(), PCLK_HZ);
        assert_ne!(PCLK_HZ, 0);
    }

    #[test]
    fn explicit_clock() {
        let clocks = Clocks::new(Hertz::from_raw(20_000_000));
        assert_eq!(clocks.pclk().raw(), 20_000_000);
    }
}
