//! # Password Generation Server Library
//!
//! This library provides the server side of the UDP password generation
//! service. The server owns the only piece of real logic in the exchange:
//! turning a validated request into a freshly generated password of the
//! requested type and length.
//!
//! ## Architecture Design
//!
//! ### Single-Threaded Receive Loop
//! The server processes one request at a time: receive a datagram, decode
//! it, generate a password, encode and send the reply. There is no
//! per-client task spawning and no pipelining, which keeps the service
//! stateless and free of shared mutable state. The only process-wide
//! mutable state is the random source, seeded once from OS entropy.
//!
//! ### UDP-Based Communication
//! Requests and responses are single fixed-layout datagrams (see the
//! `shared` crate). There is no session, no acknowledgment and no retry:
//! a lost datagram is simply a lost exchange.
//!
//! ## Module Organization
//!
//! ### Generator Module (`generator`)
//! Pure password generation: one uniform draw per character from the
//! charset of the requested type, with the mixed type using a two-stage
//! coin-flip draw.
//!
//! ### Network Module (`network`)
//! Socket setup and the receive/respond loop, including the mapping from
//! wire type codes to password types and the defensive length clamp that
//! protects the fixed-capacity response field.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use server::network::Server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = Server::bind("127.0.0.1:8080").await?;
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

pub mod generator;
pub mod network;
