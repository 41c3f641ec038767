//! Rootwalk Application Layer
//!
//! Ports the resolver needs from the outside world and the use case that
//! walks the DNS hierarchy with them.
pub mod ports;
pub mod services;
pub mod use_cases;
