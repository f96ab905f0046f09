pub mod post;
pub mod shared;
pub mod social;
pub mod user;
