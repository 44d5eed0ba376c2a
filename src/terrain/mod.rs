// ============================================
// Terrain Module - Генерация и мешинг мира
// ============================================

pub mod chunk;
pub mod grid;
pub mod manager;
pub mod mesh;
pub mod mesher;
pub mod noise;

// Реэкспорты
pub use chunk::Chunk;
pub use grid::VoxelGrid;
pub use manager::ChunkManager;
pub use mesh::{ChunkMeshData, ChunkVertex};
pub use mesher::generate_mesh;
pub use noise::NoiseField;
