#![doc = "lbry-batch-core: core logic library for lbry-batch."]

//! This crate holds everything a publish run needs apart from the transport
//! and the command line: the run configuration, the file catalog, claim
//! naming, response parsing and the sequential publish pipeline.
//!
//! # Usage
//! Build a [`config::PublishConfig`], catalogue a directory with
//! [`catalog::build_catalog`], then drive it through
//! [`publish::Publisher`] with concrete [`contract`] implementations.

pub mod catalog;
pub mod config;
pub mod contract;
pub mod error;
pub mod languages;
pub mod naming;
pub mod publish;
pub mod response;

pub use error::{BatchAborted, PublishError};
