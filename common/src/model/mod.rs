pub mod field;
pub mod form;
