//! Serial communication interface (SCI) registers

use vcell::VolatileCell;

/// Register block of one SCI channel
#[repr(C)]
pub struct RegisterBlock {
    smr: VolatileCell<u8>,
    brr: VolatileCell<u8>,
    scr: VolatileCell<u8>,
    tdr: VolatileCell<u8>,
    ssr: VolatileCell<u8>,
    rdr: VolatileCell<u8>,
}

impl RegisterBlock {
    /// 0x00 - Serial mode register
    #[inline(always)]
    pub fn smr(&self) -> &VolatileCell<u8> {
        &self.smr
    }
    /// 0x01 - Bit rate register
    #[inline(always)]
    pub fn brr(&self) -> &VolatileCell<u8> {
        &self.brr
    }
    /// 0x02 - Serial control register
    #[inline(always)]
    pub fn scr(&self) -> &VolatileCell<u8> {
        &self.scr
    }
    /// 0x03 - Transmit data register
    #[inline(always)]
    pub fn tdr(&self) -> &VolatileCell<u8> {
        &self.tdr
    }
    /// 0x04 - Serial status register
    #[inline(always)]
    pub fn ssr(&self) -> &VolatileCell<u8> {
        &self.ssr
    }
    /// 0x05 - Receive data register
    #[inline(always)]
    pub fn rdr(&self) -> &VolatileCell<u8> {
        &self.rdr
    }
}

bitflags::bitflags! {
    /// Serial mode register (SMR)
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Smr: u8 {
        /// Clocked synchronous mode
        const CA = 1 << 7;
        /// 7 bit characters
        const CHR = 1 << 6;
        /// Parity enable
        const PE = 1 << 5;
        /// Odd parity
        const OE = 1 << 4;
        /// 2 stop bits
        const STOP = 1 << 3;
        /// Multiprocessor mode
        const MP = 1 << 2;
        const CKS1 = 1 << 1;
        const CKS0 = 1 << 0;
    }
}

bitflags::bitflags! {
    /// Serial control register (SCR)
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Scr: u8 {
        /// Transmit interrupt enable
        const TIE = 1 << 7;
        /// Receive interrupt enable (RXI and ERI)
        const RIE = 1 << 6;
        /// Transmitter enable
        const TE = 1 << 5;
        /// Receiver enable
        const RE = 1 << 4;
        /// Multiprocessor interrupt enable
        const MPIE = 1 << 3;
        /// Transmit end interrupt enable
        const TEIE = 1 << 2;
        const CKE1 = 1 << 1;
        const CKE0 = 1 << 0;
    }
}

bitflags::bitflags! {
    /// Serial status register (SSR)
    ///
    /// The flags are cleared by reading them as 1 and then writing 0. Writing
    /// 1 to a flag has no effect.
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Ssr: u8 {
        /// Transmit data register empty
        const TDRE = 1 << 7;
        /// Receive data register full
        const RDRF = 1 << 6;
        /// Overrun error
        const ORER = 1 << 5;
        /// Framing error
        const FER = 1 << 4;
        /// Parity error
        const PER = 1 << 3;
        /// Transmit end
        const TEND = 1 << 2;
        /// Multiprocessor bit
        const MPB = 1 << 1;
        /// Multiprocessor bit transfer
        const MPBT = 1 << 0;

        /// Receive errors raised through ERI
        const ERRORS = Self::ORER.bits | Self::FER.bits | Self::PER.bits;
    }
}
