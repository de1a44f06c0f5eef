pub mod course;
pub mod library;
