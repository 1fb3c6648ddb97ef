pub mod categories;
pub mod init;
pub mod report;
