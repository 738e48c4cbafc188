//! SQL query implementations for the PostgreSQL storage backend.

pub mod crud;
pub mod paintings;
