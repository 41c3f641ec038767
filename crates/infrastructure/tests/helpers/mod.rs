#![allow(unused_imports)]
pub mod dns_server_mock;
pub mod wire;

pub use dns_server_mock::MockDnsServer;
pub use wire::*;
