//! Digital signature schemes.
//!
//! Each submodule corresponds to a specific signature scheme and owns its
//! signature type, signing logic, and verification rules.

pub mod schnorr;
