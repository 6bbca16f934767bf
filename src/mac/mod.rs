//! Message authentication codes.
//!
//! This module currently provides KMACXOF256, the keyed, customizable,
//! extendable-output function of NIST SP 800-185. Every protocol of the
//! crate derives its keys, keystreams, and tags from it.

pub mod kmac;

pub use kmac::kmacxof256;
