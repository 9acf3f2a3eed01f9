pub use crate::intc::IntcExt as _loopy_serial_intc_IntcExt;
pub use crate::pfc::PfcExt as _loopy_serial_pfc_PfcExt;
pub use crate::serial::RBExt as _loopy_serial_serial_RBExt;
pub use crate::time::U32Ext as _loopy_serial_time_U32Ext;
pub use fugit::RateExtU32 as _fugit_RateExtU32;
