pub(crate) mod course;
pub(crate) mod library;
