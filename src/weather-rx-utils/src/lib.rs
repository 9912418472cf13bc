//! Build-time helpers shared by the configuration crates.

#![cfg_attr(not(test), no_std)]

pub mod env;
