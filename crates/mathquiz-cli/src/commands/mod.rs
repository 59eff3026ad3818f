pub mod init;
pub mod levels;
pub mod play;
