pub mod materializer;
pub mod operation;

pub use materializer::{materialize, Materializer};
pub use operation::{CopyOperation, IgnoreReason};
