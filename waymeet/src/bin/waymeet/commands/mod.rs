pub mod chat;
pub mod events;
pub mod explore;
pub mod init;
pub mod locate;
pub mod session;
pub mod tour;
