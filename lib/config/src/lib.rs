#![cfg_attr(not(test), no_std)]

pub mod harness;
pub mod mm;
pub mod process;
pub mod vfs;
