pub mod format;
pub mod gather;
pub mod top_earn;
