//! Main module for lyra library functionality

pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod preprocessing;
pub mod processor;
pub mod rewriting;
