pub mod cli;
pub mod component;
pub mod config;
pub mod init;
pub mod tools;
