//! Weekend Sync - Shared weekend planner
//!
//! Each participant picks free dates on a month calendar through a chat
//! gateway, commits the selection, and asks which dates every participant
//! has in common.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
