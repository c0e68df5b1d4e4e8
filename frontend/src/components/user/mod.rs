pub mod portal;
pub mod request_form;
