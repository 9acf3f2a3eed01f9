use crate::intc::Priority;
use crate::time::Bps;
use crate::time::U32Ext;

/// Settings of the general channel.
///
/// The frame format is always 8 data bits, no parity, 1 stop bit.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub baudrate: Bps,
    /// Priority of the receive and receive-error interrupts
    pub priority: Priority,
}

impl Config {
    pub fn baudrate(mut self, baudrate: Bps) -> Self {
        self.baudrate = baudrate;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            baudrate: 9_600_u32.bps(),
            priority: Priority::MAX,
        }
    }
}

impl<T: Into<Bps>> From<T> for Config {
    fn from(b: T) -> Config {
        Config {
            baudrate: b.into(),
            ..Default::default()
        }
    }
}
