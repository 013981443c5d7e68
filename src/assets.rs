//! Frame assets: naming, byte sources, decoding and the preloading loader.

pub(crate) mod decode;
pub(crate) mod loader;
pub(crate) mod naming;
pub(crate) mod source;
