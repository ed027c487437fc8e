pub mod extract;
pub mod notice;
pub mod query;
pub mod validate;
