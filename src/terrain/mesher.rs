// ============================================
// Greedy Mesher - Жадный мешинг чанка
// ============================================
// Превращает воксельную сетку в минимальный набор квадов:
// по каждой оси сравниваем соседние срезы, собираем маску видимых
// граней и жадно склеиваем одинаковые клетки в прямоугольники.

use crate::blocks::{texture_layer, BlockType};
use crate::terrain::grid::VoxelGrid;
use crate::terrain::mesh::{ChunkMeshData, ChunkVertex};

// Подкраска квада по ориентации: верхние грани самые светлые,
// боковые темнее, нижние самые тёмные
const CHUNK_BLOCK_TOP_TEXTURE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const CHUNK_BLOCK_SIDE_TEXTURE_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
const CHUNK_BLOCK_BOTTOM_TEXTURE_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 1.0];

/// Клетка маски среза: какой блок открыт и в какую сторону
/// смотрит его грань. normal == 0 значит "грани нет".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Mask {
    block: BlockType,
    normal: i8,
}

impl Mask {
    const EMPTY: Mask = Mask {
        block: BlockType::Null,
        normal: 0,
    };
}

/// Сгенерировать меш сетки в mesh (поверх уже записанных квадов;
/// вызывающий сам делает clear перед полной пересборкой).
pub fn generate_mesh(
    grid: &VoxelGrid,
    world_position: [f32; 3],
    block_size: i32,
    mesh: &mut ChunkMeshData,
) {
    let size = grid.size();

    // Проходим каждую ось независимо
    for axis in 0..3usize {
        // Две оси, натягивающие срез поперёк основной
        let axis1 = (axis + 1) % 3;
        let axis2 = (axis + 2) % 3;

        let main_axis_limit = size[axis];
        let axis1_limit = size[axis1];
        let axis2_limit = size[axis2];

        let mut axis_mask = [0i32; 3];
        axis_mask[axis] = 1;

        let mut masks = vec![Mask::EMPTY; (axis1_limit * axis2_limit) as usize];

        let mut iteration = [0i32; 3];
        iteration[axis] = -1;

        // Старт с -1: первый срез сравнивается с открытой границей,
        // которая читается как Air
        while iteration[axis] < main_axis_limit {
            // -- Заполняем маску текущего среза -- //

            let mut mask_index = 0usize;

            iteration[axis2] = 0;
            while iteration[axis2] < axis2_limit {
                iteration[axis1] = 0;
                while iteration[axis1] < axis1_limit {
                    let current_block = grid.get(iteration);
                    let compared_block = grid.get([
                        iteration[0] + axis_mask[0],
                        iteration[1] + axis_mask[1],
                        iteration[2] + axis_mask[2],
                    ]);

                    let is_current_opaque = current_block.is_opaque();
                    let is_compared_opaque = compared_block.is_opaque();

                    // Между двумя непрозрачными (или двумя Air) блоками
                    // квад не нужен - его всё равно не видно
                    masks[mask_index] = if is_current_opaque == is_compared_opaque {
                        Mask::EMPTY
                    } else if is_current_opaque {
                        Mask {
                            block: current_block,
                            normal: 1,
                        }
                    } else {
                        Mask {
                            block: compared_block,
                            normal: -1,
                        }
                    };
                    mask_index += 1;

                    iteration[axis1] += 1;
                }
                iteration[axis2] += 1;
            }

            // Плоскость квадов этого среза
            iteration[axis] += 1;

            // -- Жадная склейка маски в прямоугольники -- //

            let mut mask_index = 0usize;

            for y in 0..axis2_limit {
                let mut x = 0;
                while x < axis1_limit {
                    if masks[mask_index].normal == 0 {
                        x += 1;
                        mask_index += 1;
                        continue;
                    }

                    let current_mask = masks[mask_index];

                    iteration[axis1] = x;
                    iteration[axis2] = y;

                    // Растим ширину вдоль axis1 пока клетки совпадают
                    let mut width = 1;
                    while x + width < axis1_limit
                        && masks[mask_index + width as usize] == current_mask
                    {
                        width += 1;
                    }

                    // Растим высоту вдоль axis2 пока совпадает весь ряд
                    let mut height = 1;
                    'grow: while y + height < axis2_limit {
                        for i in 0..width {
                            let index = mask_index + (i + height * axis1_limit) as usize;
                            if masks[index] != current_mask {
                                break 'grow;
                            }
                        }
                        height += 1;
                    }

                    let mut delta_axis1 = [0i32; 3];
                    delta_axis1[axis1] = width;
                    let mut delta_axis2 = [0i32; 3];
                    delta_axis2[axis2] = height;

                    create_quad(
                        mesh,
                        current_mask,
                        axis_mask,
                        width as u32,
                        height as u32,
                        [
                            iteration,
                            add(iteration, delta_axis1),
                            add(iteration, delta_axis2),
                            add(add(iteration, delta_axis1), delta_axis2),
                        ],
                        world_position,
                        block_size,
                    );

                    // Съеденные клетки сбрасываем, чтобы не склеить их дважды
                    for j in 0..height {
                        for i in 0..width {
                            masks[mask_index + (i + j * axis1_limit) as usize] = Mask::EMPTY;
                        }
                    }

                    x += width;
                    mask_index += width as usize;
                }
            }
        }
    }
}

#[inline]
fn add(a: [i32; 3], b: [i32; 3]) -> [i32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Добавить один квад (4 вершины + 6 индексов) в меш
fn create_quad(
    mesh: &mut ChunkMeshData,
    mask: Mask,
    axis_mask: [i32; 3],
    width: u32,
    height: u32,
    corners: [[i32; 3]; 4],
    world_position: [f32; 3],
    block_size: i32,
) {
    let normal_sign = mask.normal as i32;
    let quad_normal = [
        axis_mask[0] * normal_sign,
        axis_mask[1] * normal_sign,
        axis_mask[2] * normal_sign,
    ];

    let layer = texture_layer(mask.block, quad_normal) as f32;

    // Верх
    let mut color = CHUNK_BLOCK_TOP_TEXTURE_COLOR;

    // Лево, право, вперёд, назад
    if quad_normal[1] == 0 {
        color = CHUNK_BLOCK_SIDE_TEXTURE_COLOR;
    }

    // Низ
    if quad_normal[1] == -1 {
        color = CHUNK_BLOCK_BOTTOM_TEXTURE_COLOR;
    }

    let (w, h) = (width as f32, height as f32);

    // Чтобы спрайт не оказался повёрнутым (из-за того как мы
    // раздаём индексы вершин) UV подбираются по ориентации квада
    let texture_positions = if quad_normal[0] == 1 || quad_normal[0] == -1 {
        [
            [w, h, layer],
            [0.0, h, layer],
            [w, 0.0, layer],
            [0.0, 0.0, layer],
        ]
    } else {
        [
            [h, w, layer],
            [h, 0.0, layer],
            [0.0, w, layer],
            [0.0, 0.0, layer],
        ]
    };

    let normal = [
        quad_normal[0] as f32,
        quad_normal[1] as f32,
        quad_normal[2] as f32,
    ];

    let base = mesh.vertices.len() as i32;

    for (corner, texture) in corners.iter().zip(texture_positions) {
        let position = [
            (corner[0] as f32 + world_position[0]) * block_size as f32,
            (corner[1] as f32 + world_position[1]) * block_size as f32,
            (corner[2] as f32 + world_position[2]) * block_size as f32,
        ];
        mesh.vertices
            .push(ChunkVertex::new(position, normal, color, texture));
    }

    // Знак нормали маски задаёт обход, чтобы лицевые стороны
    // были намотаны одинаково с какой бы стороны грань ни была открыта

    // Первый треугольник
    mesh.indices.push(base as u32); //                         низ-лево
    mesh.indices.push((base + 2 - normal_sign) as u32); //     низ-право
    mesh.indices.push((base + 2 + normal_sign) as u32); //     верх-право
    // Второй треугольник
    mesh.indices.push((base + 3) as u32); //                   верх-право
    mesh.indices.push((base + 1 + normal_sign) as u32); //     верх-лево
    mesh.indices.push((base + 1 - normal_sign) as u32); //     низ-лево
}
