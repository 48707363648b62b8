pub mod emotion;
pub mod record;
pub mod split;

pub use emotion::*;
pub use record::*;
pub use split::*;
