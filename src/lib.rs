//! Stage Core Library
//!
//! Core functionality for Stage - internship journaling for students.
//! This crate provides nearby-peer discovery, badge handling, the
//! experience feed and the publishing form behind the client shell.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

mod api;
pub mod badges;
pub mod experiences;
pub mod geo;
pub mod proximity;

pub use api::StageCore;
