// ============================================
// Blocks Module - Типы блоков и их внешний вид
// ============================================

pub mod definition;
pub mod registry;
pub mod types;

pub use definition::{BlockAppearance, BlocksFile};
pub use registry::{global_registry, BlockRegistry};
pub use types::{texture_layer, BlockType, FALLBACK_TEXTURE_LAYER};
