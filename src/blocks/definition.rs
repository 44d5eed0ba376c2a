// ============================================
// Block Appearance Definition
// ============================================
// Структуры для загрузки внешнего вида блоков из JSON

use serde::{Deserialize, Serialize};

/// Внешний вид блока из JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockAppearance {
    /// Уникальный ID блока (string, например "normal_cloud")
    pub id: String,

    /// Числовой ID (совпадает с discriminant'ом BlockType)
    pub numeric_id: u8,

    /// Отображаемое имя
    pub name: String,

    /// Слой текстурного массива для всех граней
    pub texture_layer: u32,

    /// Отдельный слой для нижней грани (если есть)
    #[serde(default)]
    pub bottom_texture_layer: Option<u32>,
}

/// Файл с определениями блоков
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocksFile {
    /// Версия формата
    #[serde(default = "default_version")]
    pub version: String,

    /// Список блоков
    pub blocks: Vec<BlockAppearance>,
}

fn default_version() -> String {
    "1.0".to_string()
}
