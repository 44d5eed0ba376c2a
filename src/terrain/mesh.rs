// ============================================
// Chunk Mesh Data - Вершины и порядок отрисовки
// ============================================

/// Вершина меша чанка.
/// texture хранит UV и слой текстурного массива (какая текстура рисуется).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable, Default)]
pub struct ChunkVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
    pub texture: [f32; 3],
}

impl ChunkVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4], texture: [f32; 3]) -> Self {
        Self {
            position,
            normal,
            color,
            texture,
        }
    }
}

/// Меш одного чанка: вершины + порядок их отрисовки.
/// Пересобирается с нуля при каждой генерации.
#[derive(Debug, Default)]
pub struct ChunkMeshData {
    pub vertices: Vec<ChunkVertex>,

    /// Порядок отрисовки вершин (6 индексов на квад = 2 треугольника)
    pub indices: Vec<u32>,
}

impl ChunkMeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Количество квадов в меше
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }
}
