//! Value types of the kernel ABI seen from user space: errno codes, the
//! `fstat` record and the time structures.

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod stat;
pub mod time;
