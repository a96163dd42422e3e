#![allow(clippy::uninlined_format_args)]

pub mod bench;
pub mod error;
pub mod util;

#[cfg(feature = "python")]
pub mod py;
