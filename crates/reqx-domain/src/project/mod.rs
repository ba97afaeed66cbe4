//! Project root discovery and package-name normalization.

pub(crate) mod discovery;
pub(crate) mod normalize;
