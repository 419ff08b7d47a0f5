//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/en_answers.rs"));
include!(concat!(env!("OUT_DIR"), "/en_allowed.rs"));
