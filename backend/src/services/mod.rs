pub mod forms;
pub mod submissions;
