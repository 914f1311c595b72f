//! Main module for inline markdown functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod rendering;
pub mod testing;
