//! Use case interfaces
//!
//! | Interface | Description |
//! |-----------|-------------|
//! | [`ExploreServiceInterface`] | Vector-similarity concept exploration |

pub mod explore;

pub use explore::ExploreServiceInterface;
