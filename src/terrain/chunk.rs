// ============================================
// Chunk - Один чанк мира
// ============================================
// Владеет воксельной сеткой и готовым мешем. Любое изменение
// блока перестраивает меш целиком - дёшево на таких размерах
// и не оставляет рассинхрона между сеткой и мешем.

use crate::blocks::BlockType;
use crate::render::{ChunkRenderer, ShaderHandle};
use crate::terrain::grid::VoxelGrid;
use crate::terrain::mesh::ChunkMeshData;
use crate::terrain::mesher::generate_mesh;
use crate::terrain::noise::NoiseField;

pub struct Chunk {
    world_position: [f32; 3],
    block_size: i32,
    shader: ShaderHandle,
    /// Своя копия шумового поля, но сид общий на весь мир
    noise: NoiseField,
    grid: VoxelGrid,
    mesh_data: ChunkMeshData,
}

impl Chunk {
    /// Создать чанк: застроить сетку по шуму и сразу собрать меш
    pub fn new(
        size: [i32; 3],
        world_position: [f32; 3],
        block_size: i32,
        shader: ShaderHandle,
        world_seed: i32,
        noise_frequency: f32,
    ) -> Self {
        let mut chunk = Self {
            world_position,
            block_size,
            shader,
            noise: NoiseField::new(world_seed, noise_frequency),
            grid: VoxelGrid::new(size),
            mesh_data: ChunkMeshData::new(),
        };
        chunk.grid.populate(&chunk.noise, world_position);
        chunk.rebuild_mesh();
        chunk
    }

    #[inline]
    pub fn world_position(&self) -> [f32; 3] {
        self.world_position
    }

    /// Тип блока в локальных координатах чанка (за границами Air)
    #[inline]
    pub fn get_block(&self, position: [i32; 3]) -> BlockType {
        self.grid.get(position)
    }

    /// Заменить блок и перестроить меш.
    /// Координаты вне чанка игнорируются с записью в лог.
    pub fn set_block_type(&mut self, position: [i32; 3], block_type: BlockType) {
        if !self.grid.set(position, block_type) {
            log::error!(
                "Block position {:?} is outside chunk at {:?}, edit ignored",
                position,
                self.world_position
            );
            return;
        }

        self.rebuild_mesh();
    }

    #[inline]
    pub fn mesh_data(&self) -> &ChunkMeshData {
        &self.mesh_data
    }

    /// Отдать меш рендереру
    pub fn draw(&self, renderer: &mut dyn ChunkRenderer) {
        renderer.draw(&self.mesh_data, self.shader);
    }

    fn rebuild_mesh(&mut self) {
        self.mesh_data.clear();
        generate_mesh(
            &self.grid,
            self.world_position,
            self.block_size,
            &mut self.mesh_data,
        );
    }
}
