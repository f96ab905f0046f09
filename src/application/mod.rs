pub mod posts;
pub mod social;
