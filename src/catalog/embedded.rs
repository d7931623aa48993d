//! Embedded puzzle catalog
//!
//! Puzzle lines compiled into the binary at build time.

// Include generated puzzle list from build script
include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));
