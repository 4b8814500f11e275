// Utils compartidos

pub mod constants;
pub mod format;
pub mod i18n;
pub mod storage;

pub use constants::*;
pub use format::*;
pub use i18n::*;
pub use storage::*;
