pub mod entities;
pub mod form;
pub mod policies;
pub mod session;
pub mod summary;
