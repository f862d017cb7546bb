pub mod init;
pub mod layout;
pub mod resolve;
pub mod tasks;
