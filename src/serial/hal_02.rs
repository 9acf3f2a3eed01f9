use super::*;
use embedded_hal_02::{blocking::serial as blocking, serial};

impl<SCI: Instance> serial::Write<u8> for Tx<SCI> {
    type Error = Infallible;

    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        self.write_u8(word)
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.sci.flush()
    }
}

impl<SCI: Instance> blocking::write::Default<u8> for Tx<SCI> {}

impl<const N: usize> serial::Read<u8> for Rx<N> {
    type Error = Infallible;

    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        self.read()
    }
}

#[cfg(test)]
mod tests {
    use super::super::sim::{SimRegisters, SimSci};
    use super::*;
    use crate::pac::sci::Scr;
    use crate::pacext::sci::SciRB;

    #[test]
    fn blocking_write_and_nb_read() {
        let sci = SimRegisters::leak();
        sci.scr_write(Scr::TE);
        let ring: &'static mut RingBuffer<8> = Box::leak(Box::new(RingBuffer::new()));
        let (mut producer, consumer) = ring.split();
        let mut tx = Tx::<SimSci>::new(sci);
        let mut rx = Rx { consumer };

        blocking::Write::<u8>::bwrite_all(&mut tx, &b"eh02"[..]).unwrap();
        blocking::Write::<u8>::bflush(&mut tx).unwrap();
        assert_eq!(sci.sent(), b"eh02");

        assert_eq!(serial::Read::<u8>::read(&mut rx), Err(nb::Error::WouldBlock));
        producer.enqueue(0).unwrap();
        assert_eq!(serial::Read::<u8>::read(&mut rx), Ok(0));
    }
}
