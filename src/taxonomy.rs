//! Main module for taxa library functionality

pub mod ast;
pub mod building;
pub mod config;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
pub mod tree;
