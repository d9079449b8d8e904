//! Infrastructure layer - Registry, builtin widgets and the model host

pub mod host;
pub mod logging;
pub mod registry;
pub mod widgets;
