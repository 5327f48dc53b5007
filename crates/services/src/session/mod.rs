mod controller;
mod notice;

pub use controller::{SessionController, StartRequest};
pub use notice::SessionNotice;
