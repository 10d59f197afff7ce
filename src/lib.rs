//! Codetrail: a lesson validation and progression engine.
//!
//! A fixed web development curriculum ([`catalog`]) is worked through one
//! unit at a time. A [`session::Session`] opens a unit into a
//! [`workspace::Workspace`], renders it through [`render`], grades it with
//! [`validate`], and commits passes through [`progress`] into a
//! [`storage::ProgressStore`].

pub mod catalog;
pub mod certificate;
pub mod cli;
pub mod config;
pub mod identity;
pub mod model;
pub mod progress;
pub mod render;
pub mod session;
pub mod storage;
pub mod validate;
pub mod workspace;
