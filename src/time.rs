//! Time units
//!
//! Frequencies are [`fugit`] rates. Baud rates use the separate [`Bps`] type
//! so a bit rate can't be passed where a clock frequency is expected.
//!
//! ```rust
//! use loopy_serial::time::{Bps, Hertz, U32Ext};
//!
//! let pclk = Hertz::from_raw(16_000_000);
//! let baud = 31_250.bps();
//!
//! assert_eq!(baud, Bps(31_250));
//! assert_eq!(pclk.raw() / baud.0, 512);
//! ```

use core::ops;

pub use fugit::{HertzU32 as Hertz, KilohertzU32 as KiloHertz, MegahertzU32 as MegaHertz};

/// Bits per second
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug, Eq, Ord, Hash)]
pub struct Bps(pub u32);

/// Extension trait that adds convenience methods to the `u32` type
pub trait U32Ext {
    /// Wrap in `Bps`
    fn bps(self) -> Bps;
}

impl U32Ext for u32 {
    fn bps(self) -> Bps {
        Bps(self)
    }
}

impl From<u32> for Bps {
    fn from(bps: u32) -> Self {
        Bps(bps)
    }
}

impl ops::Mul<u32> for Bps {
    type Output = Self;
    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * rhs)
    }
}

impl ops::Div<u32> for Bps {
    type Output = Self;
    fn div(self, rhs: u32) -> Self {
        Self(self.0 / rhs)
    }
}
