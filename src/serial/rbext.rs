use core::convert::Infallible;

use crate::pac::sci::{Scr, Ssr};
use crate::pacext::sci::SciRB;

use super::Divisor;

/// Channel level operations built on the raw SCI registers
pub trait RBExt: SciRB {
    /// Program mode, bit rate and enables, leaving only TDRE set in SSR.
    ///
    /// SMR gets just the clock select bits: asynchronous, 8 data bits, no
    /// parity, 1 stop bit.
    fn configure(&self, divisor: Divisor, scr: Scr) {
        // TE and RE may only change while disabled
        self.scr_write(Scr::empty());
        self.smr_write(divisor.cks.smr());
        self.brr_write(divisor.brr);
        self.scr_write(scr);
        // Flags are cleared by reading them first
        let _ = self.ssr_read();
        self.ssr_write(Ssr::TDRE);
    }

    fn write_u8(&self, byte: u8) -> nb::Result<(), Infallible> {
        // NOTE atomic read with no side effects
        let ssr = self.ssr_read();

        if ssr.contains(Ssr::TDRE) {
            self.tdr_write(byte);
            // Clearing TDRE hands TDR to the transmitter
            self.ssr_write(ssr - Ssr::TDRE);
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    /// Spins until the transmit data register is free. There is no timeout.
    #[inline(always)]
    fn bwrite_u8(&self, byte: u8) {
        match nb::block!(self.write_u8(byte)) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    fn bwrite_all_u8(&self, buffer: &[u8]) {
        for &byte in buffer {
            self.bwrite_u8(byte);
        }
    }

    /// Done once the last byte has left the shift register
    fn flush(&self) -> nb::Result<(), Infallible> {
        let ssr = self.ssr_read();
        if ssr.contains(Ssr::TDRE | Ssr::TEND) {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    #[inline(always)]
    fn bflush(&self) {
        match nb::block!(RBExt::flush(self)) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    #[inline(always)]
    fn is_tx_empty(&self) -> bool {
        self.ssr_read().contains(Ssr::TDRE)
    }

    #[inline(always)]
    fn is_rx_full(&self) -> bool {
        self.ssr_read().contains(Ssr::RDRF)
    }

    /// Read the received byte and acknowledge it by clearing RDRF.
    fn take_received(&self) -> u8 {
        let byte = self.rdr_read();
        self.ssr_modify(|ssr| ssr - Ssr::RDRF);
        byte
    }

    /// Clear the overrun, framing and parity flags, returning the ones that
    /// were set.
    fn clear_error_flags(&self) -> Ssr {
        let ssr = self.ssr_read();
        self.ssr_write(ssr - Ssr::ERRORS);
        ssr & Ssr::ERRORS
    }
}

impl<RB: SciRB> RBExt for RB {}
