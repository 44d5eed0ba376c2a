// ============================================
// Chunk Manager - Решётка чанков мира
// ============================================
// Строит квадратную решётку чанков вокруг начала координат
// и раздаёт к ним доступ по решёточным координатам.

use rand::Rng;

use crate::config::WorldConfig;
use crate::render::{ChunkRenderer, ShaderHandle};
use crate::terrain::chunk::Chunk;

pub struct ChunkManager {
    chunks: Vec<Chunk>,
    /// Радиус решётки: координаты чанков лежат в [-radius, radius)
    radius: i32,
    world_seed: i32,
}

impl ChunkManager {
    /// Построить (2 * chunk_count)^2 чанков за один проход
    pub fn new(config: &WorldConfig, shader: ShaderHandle) -> Self {
        let world_seed = if config.randomize_seed {
            rand::thread_rng().gen_range(0..=9999)
        } else {
            config.world_seed
        };

        log::info!("Generating world with seed {}", world_seed);

        let radius = config.chunk_count;
        let side = 2 * radius;

        let mut chunks = Vec::with_capacity((side * side) as usize);

        // X внешний, Z внутренний - порядок задаёт индексацию решётки
        for x in -radius..radius {
            for z in -radius..radius {
                let world_position = [
                    (x * config.chunk_size[0]) as f32,
                    0.0,
                    (z * config.chunk_size[2]) as f32,
                ];

                chunks.push(Chunk::new(
                    config.chunk_size,
                    world_position,
                    config.block_pixel_size,
                    shader,
                    world_seed,
                    config.noise_frequency,
                ));
            }
        }

        log::info!("World ready: {} chunks", chunks.len());

        Self {
            chunks,
            radius,
            world_seed,
        }
    }

    /// Сид, которым мир был сгенерирован на самом деле
    /// (после возможной рандомизации)
    #[inline]
    pub fn world_seed(&self) -> i32 {
        self.world_seed
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Чанк по решёточным координатам [-radius, radius)
    pub fn get_chunk(&self, x: i32, z: i32) -> Option<&Chunk> {
        self.lattice_index(x, z).map(|index| &self.chunks[index])
    }

    pub fn get_chunk_mut(&mut self, x: i32, z: i32) -> Option<&mut Chunk> {
        self.lattice_index(x, z)
            .map(move |index| &mut self.chunks[index])
    }

    /// Отрисовать все чанки решётки
    pub fn draw_chunks(&self, renderer: &mut dyn ChunkRenderer) {
        for chunk in &self.chunks {
            chunk.draw(renderer);
        }
    }

    fn lattice_index(&self, x: i32, z: i32) -> Option<usize> {
        if x < -self.radius || x >= self.radius || z < -self.radius || z >= self.radius {
            log::error!("Chunk ({}, {}) is outside the lattice", x, z);
            return None;
        }

        let side = 2 * self.radius;
        Some(((x + self.radius) * side + (z + self.radius)) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MeshStatsRenderer;

    fn test_config() -> WorldConfig {
        WorldConfig {
            chunk_size: [8, 16, 8],
            chunk_count: 2,
            ..WorldConfig::default()
        }
    }

    #[test]
    fn test_lattice_size() {
        let manager = ChunkManager::new(&test_config(), ShaderHandle(0));
        // (2 * 2)^2
        assert_eq!(manager.chunk_count(), 16);
    }

    #[test]
    fn test_chunk_world_offsets() {
        let manager = ChunkManager::new(&test_config(), ShaderHandle(0));

        // Смещение чанка = решёточная координата * размер чанка
        let corner = manager.get_chunk(-2, -2).unwrap();
        assert_eq!(corner.world_position(), [-16.0, 0.0, -16.0]);

        let origin = manager.get_chunk(0, 0).unwrap();
        assert_eq!(origin.world_position(), [0.0, 0.0, 0.0]);

        let last = manager.get_chunk(1, 1).unwrap();
        assert_eq!(last.world_position(), [8.0, 0.0, 8.0]);
    }

    #[test]
    fn test_out_of_lattice_is_none() {
        let mut manager = ChunkManager::new(&test_config(), ShaderHandle(0));

        assert!(manager.get_chunk(2, 0).is_none());
        assert!(manager.get_chunk(0, -3).is_none());
        assert!(manager.get_chunk_mut(100, 100).is_none());
    }

    #[test]
    fn test_fixed_seed_is_kept() {
        let config = test_config();
        let manager = ChunkManager::new(&config, ShaderHandle(0));
        assert_eq!(manager.world_seed(), config.world_seed);
    }

    #[test]
    fn test_same_seed_same_world() {
        let config = test_config();
        let a = ChunkManager::new(&config, ShaderHandle(0));
        let b = ChunkManager::new(&config, ShaderHandle(0));

        for x in -2..2 {
            for z in -2..2 {
                let chunk_a = a.get_chunk(x, z).unwrap();
                let chunk_b = b.get_chunk(x, z).unwrap();
                assert_eq!(
                    chunk_a.mesh_data().indices,
                    chunk_b.mesh_data().indices
                );
            }
        }
    }

    #[test]
    fn test_draw_visits_every_chunk() {
        let manager = ChunkManager::new(&test_config(), ShaderHandle(7));
        let mut renderer = MeshStatsRenderer::default();

        manager.draw_chunks(&mut renderer);

        assert_eq!(renderer.draw_calls, manager.chunk_count());
        assert!(renderer.vertices > 0);
    }

    #[test]
    fn test_edit_through_manager() {
        let mut manager = ChunkManager::new(&test_config(), ShaderHandle(0));

        let chunk = manager.get_chunk_mut(0, 0).unwrap();
        chunk.set_block_type([0, 15, 0], crate::blocks::BlockType::HardCloud);
        assert_eq!(
            manager.get_chunk(0, 0).unwrap().get_block([0, 15, 0]),
            crate::blocks::BlockType::HardCloud
        );
    }
}
