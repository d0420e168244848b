//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes dictionary loading, search and jump to AI assistants over stdio.
//! The server keeps the loaded dictionary between calls, so
//! `load_dictionary` must come first.
//!
//! ## Module Structure
//!
//! - `server`: tool router and stdio entry point
//! - `types`: parameter and result DTOs

mod server;
pub mod types;

pub use server::{KeyseekMcpServer, run_server};
