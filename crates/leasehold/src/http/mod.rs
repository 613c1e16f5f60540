//! JSON-over-HTTP surface mapping REST endpoints onto store operations.

mod router;


pub use router::{store_router, StatusUpdate};
