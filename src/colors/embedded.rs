//! Embedded color list
//!
//! Color names compiled into the binary at build time.

// Include generated color list from build script
include!(concat!(env!("OUT_DIR"), "/colors.rs"));
