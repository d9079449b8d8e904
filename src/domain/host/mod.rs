//! Host domain - messages exchanged between a backend and the widget host

mod error;
mod message;

pub use error::HostError;
pub use message::{CreateModelMessage, HostErrorKind, HostReply};
