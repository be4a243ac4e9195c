//! NovaBank - GUI Library
//!
//! Iced front end for the NovaBank dashboard shell. All shell state lives
//! in `nova_shell`; this crate renders it and feeds events back.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod message;
pub mod route;
pub mod state;
pub mod theme;
pub mod view;
