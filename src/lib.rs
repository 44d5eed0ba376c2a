// ============================================
// Nimbus - Воксельный мир из облаков
// ============================================
// Ядро: шум -> воксельная сетка -> greedy meshing -> меш чанка.
// GPU, окно и камера живут за узкими интерфейсами (см. render).

pub mod blocks;
pub mod config;
pub mod render;
pub mod terrain;

// Реэкспорт основных типов
pub use blocks::BlockType;
pub use config::WorldConfig;
pub use render::{ChunkRenderer, MeshStatsRenderer, ShaderHandle};
pub use terrain::{Chunk, ChunkManager, ChunkMeshData, ChunkVertex, NoiseField, VoxelGrid};
