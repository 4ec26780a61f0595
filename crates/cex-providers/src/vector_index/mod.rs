//! Vector Index Implementations
//!
//! | Index | Persistence |
//! |-------|-------------|
//! | InMemoryVectorIndex | Optional JSON snapshot |

pub mod in_memory;

pub use in_memory::{InMemoryVectorIndex, IndexedConcept};
