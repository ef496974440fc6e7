// Projection engine: identity merge, season history, weighted projection.

pub mod assembler;
pub mod history;
pub mod identity;
pub mod weighted;
