//! Site Assistant - construction assistant chat relay
//!
//! This crate implements the chat endpoint that forwards a conversation to a
//! hosted completion API behind a fixed construction-expert prompt, and the
//! conversation controller that drives that endpoint one turn at a time.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
