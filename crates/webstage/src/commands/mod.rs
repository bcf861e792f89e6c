pub mod compress;
pub mod hooks;
pub mod init;
pub mod status;
pub mod version;
