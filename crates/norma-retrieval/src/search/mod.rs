pub mod hybrid;

pub use hybrid::{fuse, top_k, Candidate};
