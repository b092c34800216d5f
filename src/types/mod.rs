pub mod options;
pub mod span;
pub mod tag;
