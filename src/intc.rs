//! # Interrupt priorities
//!
//! Each on-chip interrupt source has a 4 bit priority field in one of the IPR
//! registers. Level 0 masks the source; 1 to 15 enable it. Vector table wiring
//! is left to the application.
use crate::pac::{intc, INTC};

pub trait IntcExt {
    fn constrain(self) -> Parts;
}

impl IntcExt for INTC {
    fn constrain(self) -> Parts {
        Parts {
            // NOTE(unsafe) the INTC token is consumed here
            ipr: IPR::new(unsafe { INTC::registers() }),
        }
    }
}

/// HAL wrapper around the INTC registers
pub struct Parts {
    pub ipr: IPR,
}

/// Interrupt sources whose priority this crate sets
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// SCI0 (ERI0, RXI0, TXI0, TEI0), IPRD[3:0]
    Sci0,
    /// SCI1 (ERI1, RXI1, TXI1, TEI1), IPRE[15:12]
    Sci1,
}

/// Interrupt priority level, 1 (lowest) to 15 (highest)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(u8);

/// Priority level outside `1..=15`
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidPriority(pub u8);

impl Priority {
    pub const MIN: Priority = Priority(1);
    pub const MAX: Priority = Priority(15);

    /// Level 0 would mask the interrupt, so it is rejected along with
    /// anything that doesn't fit in the 4 bit field.
    pub const fn new(level: u8) -> Result<Self, InvalidPriority> {
        if level >= 1 && level <= 15 {
            Ok(Priority(level))
        } else {
            Err(InvalidPriority(level))
        }
    }

    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::MAX
    }
}

/// Interrupt priority registers
pub struct IPR {
    rb: &'static intc::RegisterBlock,
}

impl IPR {
    pub(crate) fn new(rb: &'static intc::RegisterBlock) -> Self {
        Self { rb }
    }

    /// Set the priority field of `source`, keeping the other fields
    pub fn set_priority(&mut self, source: Source, priority: Priority) {
        let (reg, shift) = self.field(source);
        reg.set((reg.get() & !(0xF << shift)) | (u16::from(priority.level()) << shift));
    }

    /// Current priority level of `source`, 0 if masked
    pub fn priority(&self, source: Source) -> u8 {
        let (reg, shift) = self.field(source);
        ((reg.get() >> shift) & 0xF) as u8
    }

    fn field(&self, source: Source) -> (&vcell::VolatileCell<u16>, u16) {
        match source {
            Source::Sci0 => (self.rb.iprd(), 0),
            Source::Sci1 => (self.rb.ipre(), 12),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ipr() -> (IPR, &'static intc::RegisterBlock) {
        let rb: &'static intc::RegisterBlock = Box::leak(Box::new(intc::RegisterBlock::new()));
        (IPR::new(rb), rb)
    }

    #[test]
    fn priority_range() {
        assert_eq!(Priority::new(0), Err(InvalidPriority(0)));
        assert_eq!(Priority::new(16), Err(InvalidPriority(16)));
        assert_eq!(Priority::new(1), Ok(Priority::MIN));
        assert_eq!(Priority::new(15), Ok(Priority::MAX));
        assert_eq!(Priority::default(), Priority::MAX);
    }

    #[test]
    fn sci0_priority_keeps_other_fields() {
        let (mut ipr, rb) = ipr();
        rb.iprd().set(0x5670);
        ipr.set_priority(Source::Sci0, Priority::MAX);
        assert_eq!(rb.iprd().get(), 0x567F);
        assert_eq!(ipr.priority(Source::Sci0), 15);

        ipr.set_priority(Source::Sci0, Priority::MIN);
        assert_eq!(rb.iprd().get(), 0x5671);
    }

    #[test]
    fn sci1_priority_field() {
        let (mut ipr, rb) = ipr();
        rb.ipre().set(0x0ABC);
        ipr.set_priority(Source::Sci1, Priority::new(7).unwrap());
        assert_eq!(rb.ipre().get(), 0x7ABC);
        assert_eq!(ipr.priority(Source::Sci0), 0);
    }
}
