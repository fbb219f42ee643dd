#![no_std]

mod events;
pub mod contract;
