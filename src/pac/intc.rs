//! Interrupt controller (INTC) priority registers

use vcell::VolatileCell;

/// Interrupt priority registers A to E and the interrupt control register
#[repr(C)]
pub struct RegisterBlock {
    ipra: VolatileCell<u16>,
    iprb: VolatileCell<u16>,
    iprc: VolatileCell<u16>,
    iprd: VolatileCell<u16>,
    ipre: VolatileCell<u16>,
    icr: VolatileCell<u16>,
}

impl RegisterBlock {
    /// All registers at their reset value
    pub const fn new() -> Self {
        Self {
            ipra: VolatileCell::new(0),
            iprb: VolatileCell::new(0),
            iprc: VolatileCell::new(0),
            iprd: VolatileCell::new(0),
            ipre: VolatileCell::new(0),
            icr: VolatileCell::new(0),
        }
    }

    /// 0x00 - Interrupt priority register A
    #[inline(always)]
    pub fn ipra(&self) -> &VolatileCell<u16> {
        &self.ipra
    }
    /// 0x02 - Interrupt priority register B
    #[inline(always)]
    pub fn iprb(&self) -> &VolatileCell<u16> {
        &self.iprb
    }
    /// 0x04 - Interrupt priority register C
    #[inline(always)]
    pub fn iprc(&self) -> &VolatileCell<u16> {
        &self.iprc
    }
    /// 0x06 - Interrupt priority register D
    #[inline(always)]
    pub fn iprd(&self) -> &VolatileCell<u16> {
        &self.iprd
    }
    /// 0x08 - Interrupt priority register E
    #[inline(always)]
    pub fn ipre(&self) -> &VolatileCell<u16> {
        &self.ipre
    }
    /// 0x0A - Interrupt control register
    #[inline(always)]
    pub fn icr(&self) -> &VolatileCell<u16> {
        &self.icr
    }
}
