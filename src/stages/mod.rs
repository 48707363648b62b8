pub mod stage0_load;
pub mod stage1_aggregate;
pub mod stage2_render;

pub use stage0_load::*;
pub use stage1_aggregate::*;
pub use stage2_render::*;
