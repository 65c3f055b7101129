//! Pure Rust async client for the out-of-band UDP rcon protocol spoken by
//! Quake 3 engine servers (Jedi Academy, Jedi Outcast, Urban Terror and
//! friends).
pub mod address;
pub mod client;
pub mod config;
pub mod error;
pub mod packet;
pub mod registry;
pub mod response;
pub mod transport;
