//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes tsglot's catalog checks
//! and lookups to AI coding agents over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and server entry point
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{TsglotMcpServer, run_server};
