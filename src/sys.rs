pub mod event;
pub mod geometry;
pub mod scripted;
pub mod window_server;
