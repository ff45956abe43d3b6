//! # Password Generation Client Library
//!
//! This library provides the interactive client for the UDP password
//! generation service. It owns everything that happens before a request is
//! put on the wire: prompting, parsing, validation and the quit decision.
//! Anything that fails validation is re-prompted locally and never
//! transmitted.
//!
//! ## Module Organization
//!
//! ### Validation Module (`validation`)
//! Pure decision functions over the raw user input: the type-code check,
//! the digits-only length check against the protocol bounds, and the quit
//! sentinel test that ends the session loop.
//!
//! ### Menu Module (`menu`)
//! The interactive surface: the prompt and help texts (including the table
//! of ambiguous glyphs excluded by the unambiguous type) and the parser
//! that splits a line of input into a type code and a length, applying the
//! default length when only a type is given.
//!
//! ### Network Module (`network`)
//! The session loop itself: resolve the server address once, then for each
//! validated request send one datagram, block for one response datagram,
//! decode it and display the password. A transport failure ends the
//! process; only validation failures are recoverable.

pub mod menu;
pub mod network;
pub mod validation;
