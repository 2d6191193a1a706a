#[macro_use]
extern crate quick_error;

pub mod isqrt;
pub mod verify;
