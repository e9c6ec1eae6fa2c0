pub mod client;

pub use client::{AddressClient, AddressRecord, HttpAddressClient};
