//! Embedded reference word list
//!
//! Generated from `data/words.txt` at build time.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
