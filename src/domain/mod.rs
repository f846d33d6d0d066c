pub mod format;
pub mod view;
pub mod weather;
