//! Static content resolution
//!
//! This module turns request targets into filesystem locations confined to
//! the server root and renders directory listings.

pub mod decode;
pub mod listing;
pub mod resolve;

pub use decode::percent_decode;
pub use resolve::{PathResolver, ResolvedTarget, TargetKind};
