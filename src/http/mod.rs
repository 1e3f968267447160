//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 subset the server speaks: one GET
//! request per connection, answered and closed.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection handler implementing the
//!   request-response state machine
//! - **`parser`**: extracts method, target and version from the request line
//! - **`request`**: parsed request representation
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serializes responses and streams file bodies
//! - **`mime`**: content-type lookup based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One receive call for the request line
//!        └──────┬──────┘
//!               │
//!       ┌───────┴────────┐
//!       │ GET parsed     │ parse failure / other method
//!       ▼                ▼
//!  ┌─────────┐      ┌──────────┐
//!  │ Serving │      │ Rejected │
//!  └────┬────┘      └────┬─────┘
//!       │                │
//!       └───────┬────────┘
//!               ▼
//!          ┌────────┐
//!          │ Closed │ ← Send side shut down, buffers released
//!          └────────┘
//! ```
//!
//! There is no keep-alive: every response ends the connection.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
