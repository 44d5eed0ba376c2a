// ============================================
// Block Types - Типы облачных блоков
// ============================================
// Null и Air никогда не рендерятся, все остальные непрозрачные.

use crate::blocks::registry::global_registry;

/// Слой текстуры, который вернётся если блока нет в реестре.
/// Почему 255 ? Потому что для цветов 255 это максимум который можно передать.
pub const FALLBACK_TEXTURE_LAYER: u32 = 255;

/// Тип блока. Числовое значение совпадает с numeric_id в JSON реестра.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlockType {
    Null = 0,

    // -- Прозрачные блоки -- //
    Air = 1,

    // -- Непрозрачные блоки -- //

    // Окружение
    LightCloud = 2,
    NormalCloud = 3,
    DarkCloud = 4,
    VeryDarkCloud = 5,
    VeryVeryDarkCloud = 6,

    // Руды
    HardCloud = 7,
    ElectrifiedCloud = 8,
}

impl BlockType {
    /// Непрозрачен ли блок (участвует ли он в окклюзии)
    #[inline]
    pub fn is_opaque(self) -> bool {
        !matches!(self, BlockType::Null | BlockType::Air)
    }
}

/// Слой текстурного массива для блока из реестра.
///
/// Особый случай: нижняя грань поверхностного блока (LightCloud)
/// использует отдельную текстуру (bottom_texture_layer).
///
/// Блок, которого нет в реестре - это рассинхрон enum'а и таблицы,
/// поэтому логируем ошибку вместо тихой подмены значения.
pub fn texture_layer(block: BlockType, quad_normal: [i32; 3]) -> u32 {
    let registry = match global_registry().read() {
        Ok(registry) => registry,
        Err(_) => {
            log::error!("Block registry lock is poisoned");
            return FALLBACK_TEXTURE_LAYER;
        }
    };

    match registry.get_by_numeric(block as u8) {
        Some(appearance) => {
            // Нижняя грань
            if quad_normal == [0, -1, 0] {
                if let Some(bottom_layer) = appearance.bottom_texture_layer {
                    return bottom_layer;
                }
            }

            appearance.texture_layer
        }
        None => {
            log::error!(
                "The block type '{}' (enum ID) is not present in the block registry",
                block as u8
            );
            FALLBACK_TEXTURE_LAYER
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity() {
        assert!(!BlockType::Null.is_opaque());
        assert!(!BlockType::Air.is_opaque());
        assert!(BlockType::LightCloud.is_opaque());
        assert!(BlockType::NormalCloud.is_opaque());
        assert!(BlockType::HardCloud.is_opaque());
        assert!(BlockType::ElectrifiedCloud.is_opaque());
    }

    #[test]
    fn test_texture_layer_table() {
        let up = [0, 1, 0];
        assert_eq!(texture_layer(BlockType::Null, up), 0);
        assert_eq!(texture_layer(BlockType::Air, up), 0);
        assert_eq!(texture_layer(BlockType::LightCloud, up), 0);
        assert_eq!(texture_layer(BlockType::NormalCloud, up), 1);
        assert_eq!(texture_layer(BlockType::DarkCloud, up), 2);
        assert_eq!(texture_layer(BlockType::VeryDarkCloud, up), 3);
        assert_eq!(texture_layer(BlockType::VeryVeryDarkCloud, up), 4);
        assert_eq!(texture_layer(BlockType::HardCloud, up), 5);
        assert_eq!(texture_layer(BlockType::ElectrifiedCloud, up), 6);
    }

    #[test]
    fn test_light_cloud_bottom_override() {
        // Нижняя грань поверхностного блока использует другую текстуру
        assert_eq!(texture_layer(BlockType::LightCloud, [0, -1, 0]), 1);
        // Боковые грани - нет
        assert_eq!(texture_layer(BlockType::LightCloud, [1, 0, 0]), 0);
        assert_eq!(texture_layer(BlockType::LightCloud, [0, 0, -1]), 0);
    }
}
