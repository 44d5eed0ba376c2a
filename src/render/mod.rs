// ============================================
// Render Module - Граница с рендерером
// ============================================
// Ядро не трогает GPU: оно отдаёт готовый меш и непрозрачный
// хэндл шейдера реализации ChunkRenderer.

use crate::terrain::ChunkMeshData;

/// Непрозрачный хэндл шейдера. Ядро его не инспектирует,
/// только пробрасывает рендереру.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

/// Рендерер чанков. Вызывается один раз на чанк за кадр.
/// Загрузка буферов на GPU - забота реализации, не ядра.
pub trait ChunkRenderer {
    fn draw(&mut self, mesh: &ChunkMeshData, shader: ShaderHandle);
}

/// Рендерер-счётчик: накапливает статистику вместо отрисовки.
/// Используется в бинарнике и тестах.
#[derive(Debug, Default)]
pub struct MeshStatsRenderer {
    pub draw_calls: usize,
    pub vertices: usize,
    pub indices: usize,
}

impl MeshStatsRenderer {
    /// Количество квадов (6 индексов на квад)
    pub fn quads(&self) -> usize {
        self.indices / 6
    }
}

impl ChunkRenderer for MeshStatsRenderer {
    fn draw(&mut self, mesh: &ChunkMeshData, _shader: ShaderHandle) {
        self.draw_calls += 1;
        self.vertices += mesh.vertices.len();
        self.indices += mesh.indices.len();
    }
}
