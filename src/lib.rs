//! Loft - an embedded multi-file IDE shell

pub mod constants;
pub mod error;
pub mod notification;
pub mod language;
pub mod workspace;
pub mod completion;
pub mod layout;
pub mod telemetry;
pub mod git_panel;
pub mod host;
pub mod editor;
