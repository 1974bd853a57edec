//! The tools module holds the helpers around the squish codecs.
//!
//! The tools are:
//! - cli: command line interface for the squish binary.

pub mod cli;
