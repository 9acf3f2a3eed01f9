use crate::pac::sci::{RegisterBlock, Scr, Smr, Ssr};
use crate::Sealed;

/// Raw access to the six registers of one SCI channel.
///
/// Every access is a single volatile byte access. Read-clears and
/// write-sets semantics of the status flags belong to the hardware.
pub trait SciRB: Sealed {
    fn smr_write(&self, smr: Smr);
    fn brr_write(&self, brr: u8);
    fn scr_read(&self) -> Scr;
    fn scr_write(&self, scr: Scr);
    fn tdr_write(&self, byte: u8);
    fn ssr_read(&self) -> Ssr;
    fn ssr_write(&self, ssr: Ssr);
    fn rdr_read(&self) -> u8;

    /// Read SSR, then write back the flags returned by `f`.
    ///
    /// Flags read as 1 and written back as 0 are cleared.
    #[inline(always)]
    fn ssr_modify<F>(&self, f: F)
    where
        F: FnOnce(Ssr) -> Ssr,
    {
        let ssr = self.ssr_read();
        self.ssr_write(f(ssr));
    }
}

impl Sealed for RegisterBlock {}

impl SciRB for RegisterBlock {
    #[inline(always)]
    fn smr_write(&self, smr: Smr) {
        self.smr().set(smr.bits());
    }
    #[inline(always)]
    fn brr_write(&self, brr: u8) {
        self.brr().set(brr);
    }
    #[inline(always)]
    fn scr_read(&self) -> Scr {
        Scr::from_bits_truncate(self.scr().get())
    }
    #[inline(always)]
    fn scr_write(&self, scr: Scr) {
        self.scr().set(scr.bits());
    }
    #[inline(always)]
    fn tdr_write(&self, byte: u8) {
        self.tdr().set(byte);
    }
    #[inline(always)]
    fn ssr_read(&self) -> Ssr {
        Ssr::from_bits_truncate(self.ssr().get())
    }
    #[inline(always)]
    fn ssr_write(&self, ssr: Ssr) {
        self.ssr().set(ssr.bits());
    }
    #[inline(always)]
    fn rdr_read(&self) -> u8 {
        self.rdr().get()
    }
}
