//! Nodepack: text nodes for node-based image-generation editors.
//!
//! The host editor discovers nodes through the [`registry`], renders their
//! declared [`node::NodeDefinition`]s, and evaluates them with an argument bag.
//! The text pack provides the text concatenator, whose core is the pure
//! [`text::concatenate`].

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod node;
pub mod registry;
pub mod text;
