#![no_std]

pub mod listing;
pub mod nft;
pub mod proposal;
pub mod rental;
pub mod storage;
pub mod vault;
