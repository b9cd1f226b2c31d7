pub mod format;
pub mod play;
