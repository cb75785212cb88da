//! Line-level parsing utilities.
//!
//! This module holds the message-header pattern and timestamp construction
//! used by [`TranscriptParser`](crate::parser::TranscriptParser). Nothing in
//! here returns errors: a line either yields a [`MessageHeader`] or it
//! doesn't.

pub mod whatsapp;

pub use whatsapp::{Meridiem, MessageHeader, build_timestamp, parse_header};
