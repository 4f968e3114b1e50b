pub mod convert;
pub mod paste;

pub use convert::convert;
pub use paste::paste;
