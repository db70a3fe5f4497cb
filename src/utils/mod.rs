pub mod classnames;
pub mod format;
pub mod range;
