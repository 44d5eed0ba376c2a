// ============================================
// Voxel Grid - Плотная 3D сетка блоков чанка
// ============================================
// Плоский массив, X быстрее всего, потом Y, потом Z.
// Любое чтение за границами сетки возвращает Air (открытая граница),
// благодаря этому мешер заглядывает на один воксель за грань без
// особых случаев на краях.

use crate::blocks::BlockType;
use crate::terrain::noise::NoiseField;

/// Воксельная сетка одного чанка
pub struct VoxelGrid {
    size: [i32; 3],
    blocks: Vec<BlockType>,
}

impl VoxelGrid {
    /// Создать сетку заданного размера, заполненную Air
    pub fn new(size: [i32; 3]) -> Self {
        let len = (size[0] as usize) * (size[1] as usize) * (size[2] as usize);
        Self {
            size,
            blocks: vec![BlockType::Air; len],
        }
    }

    #[inline]
    pub fn size(&self) -> [i32; 3] {
        self.size
    }

    #[inline]
    fn block_index(&self, position: [i32; 3]) -> usize {
        (position[0] + self.size[0] * (position[1] + self.size[1] * position[2])) as usize
    }

    /// Находится ли позиция вне сетки
    #[inline]
    pub fn is_outside(&self, position: [i32; 3]) -> bool {
        position[0] < 0
            || position[0] >= self.size[0]
            || position[1] < 0
            || position[1] >= self.size[1]
            || position[2] < 0
            || position[2] >= self.size[2]
    }

    /// Тип блока в позиции. За границами сетки всегда Air.
    #[inline]
    pub fn get(&self, position: [i32; 3]) -> BlockType {
        if self.is_outside(position) {
            return BlockType::Air;
        }

        self.blocks[self.block_index(position)]
    }

    /// Записать тип блока. Возвращает false если позиция вне сетки
    /// (запись при этом не происходит).
    #[inline]
    pub fn set(&mut self, position: [i32; 3], block_type: BlockType) -> bool {
        if self.is_outside(position) {
            return false;
        }

        let index = self.block_index(position);
        self.blocks[index] = block_type;
        true
    }

    /// Застроить сетку по шуму: на каждый (x, z) столбец вычисляется
    /// высота ландшафта, ниже неё блоки раздаются по глубинным полосам,
    /// выше - Air.
    pub fn populate(&mut self, noise: &NoiseField, world_position: [f32; 3]) {
        for x in 0..self.size[0] {
            for z in 0..self.size[2] {
                let world_x = world_position[0] + x as f32;
                let world_z = world_position[2] + z as f32;

                let height = column_height(noise.sample(world_x, world_z), self.size[1]);

                for y in 0..height {
                    let index = self.block_index([x, y, z]);
                    self.blocks[index] = column_block(y, height);
                }

                // Всё что выше height становится Air
                for y in height..self.size[1] {
                    let index = self.block_index([x, y, z]);
                    self.blocks[index] = BlockType::Air;
                }
            }
        }
    }
}

/// Высота столбца ландшафта из значения шума [-1, 1],
/// зажатая в [0, chunk_height]
#[inline]
pub(crate) fn column_height(sample: f32, chunk_height: i32) -> i32 {
    let height = ((sample + 1.0) * chunk_height as f32 / 2.0).round() as i32;
    height.clamp(0, chunk_height)
}

/// Тип блока по глубине в столбце. Полосы проверяются от самой
/// глубокой к поверхности, побеждает первая подходящая - порядок
/// менять нельзя, иначе широкие полосы затенят узкие.
#[inline]
pub(crate) fn column_block(y: i32, height: i32) -> BlockType {
    // NOTE : Начинаем с самого низа карты
    if y < height - 30 {
        BlockType::ElectrifiedCloud // Руда
    } else if y < height - 29 {
        BlockType::DarkCloud // Окружение
    } else if y < height - 25 {
        BlockType::VeryDarkCloud // Окружение
    } else if y < height - 20 {
        BlockType::VeryVeryDarkCloud // Окружение
    } else if y < height - 17 {
        BlockType::VeryDarkCloud // Окружение
    } else if y < height - 16 {
        BlockType::DarkCloud // Окружение
    } else if y < height - 15 {
        BlockType::NormalCloud // Окружение
    } else if y == height - 15 {
        BlockType::HardCloud // Руда
    } else if y == height - 14 {
        BlockType::NormalCloud // Окружение
    } else if y < height - 10 {
        BlockType::VeryVeryDarkCloud // Окружение
    } else if y < height - 7 {
        BlockType::VeryDarkCloud // Окружение
    } else if y < height - 4 {
        BlockType::DarkCloud // Окружение
    } else if y < height - 1 {
        BlockType::NormalCloud // Окружение
    } else {
        BlockType::LightCloud // Поверхность (y == height - 1)
    }
}
