//! Data models for the notify client.

pub mod notice;
pub mod response;
