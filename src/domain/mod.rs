mod money;

pub use money::*;
