//! Shared domain abstractions.
//!
//! This crate defines the traits and types that every bounded context
//! depends on: the domain error, the entity identity contract, the generic
//! repository contract and the command marker. It contains no
//! infrastructure code.

pub mod command;
pub mod entity;
pub mod error;
pub mod repository;
