use super::*;

mod nb {
    use super::{Infallible, Instance, RBExt, Rx, Tx};
    use embedded_hal_nb::serial::{self, ErrorType};

    impl<SCI: Instance> ErrorType for Tx<SCI> {
        type Error = Infallible;
    }

    impl<const N: usize> ErrorType for Rx<N> {
        type Error = Infallible;
    }

    impl<SCI: Instance> serial::Write<u8> for Tx<SCI> {
        fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
            self.write_u8(word)
        }

        fn flush(&mut self) -> nb::Result<(), Self::Error> {
            self.sci.flush()
        }
    }

    impl<const N: usize> serial::Read<u8> for Rx<N> {
        fn read(&mut self) -> nb::Result<u8, Self::Error> {
            self.read()
        }
    }
}

mod io {
    use super::{Infallible, Instance, RBExt, Rx, Tx};

    impl<SCI: Instance> embedded_io::ErrorType for Tx<SCI> {
        type Error = Infallible;
    }

    impl<const N: usize> embedded_io::ErrorType for Rx<N> {
        type Error = Infallible;
    }

    impl<SCI: Instance> embedded_io::Write for Tx<SCI> {
        /// Blocks until every byte of `bytes` is in the transmitter
        fn write(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
            self.sci.bwrite_all_u8(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.sci.bflush();
            Ok(())
        }
    }

    impl<SCI: Instance> embedded_io::WriteReady for Tx<SCI> {
        fn write_ready(&mut self) -> Result<bool, Self::Error> {
            Ok(self.sci.is_tx_empty())
        }
    }

    impl<const N: usize> embedded_io::Read for Rx<N> {
        /// Waits for at least one byte, then returns as many as are buffered
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            if buf.is_empty() {
                return Ok(0);
            }
            while self.available() == 0 {
                core::hint::spin_loop();
            }
            let mut n = 0;
            for slot in buf.iter_mut() {
                match self.consumer.dequeue() {
                    Some(byte) => *slot = byte,
                    None => break,
                }
                n += 1;
            }
            Ok(n)
        }
    }

    impl<const N: usize> embedded_io::ReadReady for Rx<N> {
        fn read_ready(&mut self) -> Result<bool, Self::Error> {
            Ok(self.available() > 0)
        }
    }
}
