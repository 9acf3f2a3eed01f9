//! Extension traits over the register blocks in [`crate::pac`]

pub mod sci;
