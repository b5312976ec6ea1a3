pub mod events;
pub mod forms;
pub mod session;
pub mod shell;
pub mod withdraw;
