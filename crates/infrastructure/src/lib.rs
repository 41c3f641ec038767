//! Rootwalk Infrastructure Layer
//!
//! Adapters behind the application ports: the DNS wire codec, the UDP
//! nameserver client and the system host resolver.
pub mod dns;
pub mod system;
