//! Pin function controller (PFC), port B control registers

use vcell::VolatileCell;

/// Port B control registers
#[repr(C)]
pub struct RegisterBlock {
    pbcr1: VolatileCell<u16>,
    pbcr2: VolatileCell<u16>,
}

impl RegisterBlock {
    /// Both registers at their reset value
    pub const fn new() -> Self {
        Self {
            pbcr1: VolatileCell::new(0),
            pbcr2: VolatileCell::new(0),
        }
    }

    /// 0x00 - Port B control register 1 (PB15..PB8)
    #[inline(always)]
    pub fn pbcr1(&self) -> &VolatileCell<u16> {
        &self.pbcr1
    }
    /// 0x02 - Port B control register 2 (PB7..PB0)
    #[inline(always)]
    pub fn pbcr2(&self) -> &VolatileCell<u16> {
        &self.pbcr2
    }
}
