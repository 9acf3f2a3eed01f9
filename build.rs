use std::env;
use std::fs;
use std::path::PathBuf;

/// Peripheral clock of the stock Loopy board.
const DEFAULT_PCLK_HZ: u32 = 16_000_000;

const PCLK_ENV: &str = "LOOPY_SERIAL_PCLK_HZ";

#[derive(Clone, Debug)]
enum PclkError {
    NotANumber(String),
    Zero,
}

fn pclk_hz() -> Result<u32, PclkError> {
    match env::var(PCLK_ENV) {
        Err(_) => Ok(DEFAULT_PCLK_HZ),
        Ok(raw) => {
            let raw = raw.trim().replace('_', "");
            match raw.parse::<u32>() {
                Ok(0) => Err(PclkError::Zero),
                Ok(hz) => Ok(hz),
                Err(_) => Err(PclkError::NotANumber(raw)),
            }
        }
    }
}

fn main() {
    println!("cargo:rerun-if-env-changed={}", PCLK_ENV);
    println!("cargo:rerun-if-changed=build.rs");

    let pclk = match pclk_hz() {
        Ok(hz) => hz,
        Err(PclkError::NotANumber(raw)) => panic!("{} is not a frequency in Hz: {:?}", PCLK_ENV, raw),
        Err(PclkError::Zero) => panic!("{} must be non-zero", PCLK_ENV),
    };

    let out = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(
        out.join("board.rs"),
        format!(
            "/// Peripheral clock feeding both SCI channels, in Hz.\npub const PCLK_HZ: u32 = {};\n",
            pclk
        ),
    )
    .expect("failed to write board.rs");
}
