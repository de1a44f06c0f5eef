pub mod block;
pub mod course;
pub mod library;
