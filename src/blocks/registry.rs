// ============================================
// Block Registry - Data-Driven из JSON
// ============================================
// Единый источник правды для внешнего вида блоков

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{OnceLock, RwLock};

use super::definition::{BlockAppearance, BlocksFile};

/// Реестр внешнего вида блоков
pub struct BlockRegistry {
    /// Блоки по numeric ID
    blocks_by_numeric: HashMap<u8, BlockAppearance>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            blocks_by_numeric: HashMap::new(),
        }
    }

    /// Загрузить блоки из JSON строки
    pub fn load_from_json(&mut self, json: &str) -> Result<usize, String> {
        let blocks_file: BlocksFile =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse JSON: {}", e))?;

        let count = blocks_file.blocks.len();
        for block in blocks_file.blocks {
            self.register(block);
        }
        Ok(count)
    }

    /// Загрузить блоки из файла
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read file: {}", e))?;
        self.load_from_json(&content)
    }

    /// Зарегистрировать блок
    pub fn register(&mut self, block: BlockAppearance) {
        self.blocks_by_numeric.insert(block.numeric_id, block);
    }

    /// Получить блок по numeric ID
    pub fn get_by_numeric(&self, id: u8) -> Option<&BlockAppearance> {
        self.blocks_by_numeric.get(&id)
    }

    /// Количество блоков
    pub fn count(&self) -> usize {
        self.blocks_by_numeric.len()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================
// Global Registry Singleton
// ============================================

static GLOBAL_REGISTRY: OnceLock<RwLock<BlockRegistry>> = OnceLock::new();

/// Получить глобальный реестр блоков
pub fn global_registry() -> &'static RwLock<BlockRegistry> {
    GLOBAL_REGISTRY.get_or_init(|| {
        let mut registry = BlockRegistry::new();

        // Загружаем из встроенного JSON (nimbus_blocks.json)
        if let Err(e) =
            registry.load_from_json(include_str!("../../assets/blocks/nimbus_blocks.json"))
        {
            log::warn!("Failed to load default blocks: {}", e);
            register_fallback_blocks(&mut registry);
        }

        RwLock::new(registry)
    })
}

/// Fallback блоки если JSON не загрузился
fn register_fallback_blocks(registry: &mut BlockRegistry) {
    registry.register(BlockAppearance {
        id: "air".to_string(),
        numeric_id: 1,
        name: "Air".to_string(),
        texture_layer: 0,
        bottom_texture_layer: None,
    });

    registry.register(BlockAppearance {
        id: "normal_cloud".to_string(),
        numeric_id: 3,
        name: "Normal Cloud".to_string(),
        texture_layer: 1,
        bottom_texture_layer: None,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_json() {
        let json = r#"{
            "version": "1.0",
            "blocks": [
                { "id": "air", "numeric_id": 1, "name": "Air", "texture_layer": 0 },
                { "id": "light_cloud", "numeric_id": 2, "name": "Light Cloud",
                  "texture_layer": 0, "bottom_texture_layer": 1 }
            ]
        }"#;

        let mut registry = BlockRegistry::new();
        assert_eq!(registry.load_from_json(json), Ok(2));
        assert_eq!(registry.count(), 2);

        let light_cloud = registry.get_by_numeric(2).unwrap();
        assert_eq!(light_cloud.name, "Light Cloud");
        assert_eq!(light_cloud.bottom_texture_layer, Some(1));
        assert_eq!(registry.get_by_numeric(200), None);
    }

    #[test]
    fn test_loaded_block_matches_definition() {
        let json = r#"{
            "blocks": [
                { "id": "hard_cloud", "numeric_id": 7, "name": "Hard Cloud", "texture_layer": 5 }
            ]
        }"#;

        let mut registry = BlockRegistry::new();
        registry.load_from_json(json).unwrap();

        // Сравниваем целиком, вместе с отсутствующим bottom_texture_layer
        assert_eq!(
            registry.get_by_numeric(7),
            Some(&BlockAppearance {
                id: "hard_cloud".to_string(),
                numeric_id: 7,
                name: "Hard Cloud".to_string(),
                texture_layer: 5,
                bottom_texture_layer: None,
            })
        );
        assert_eq!(registry.get_by_numeric(200), None);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let mut registry = BlockRegistry::new();
        assert!(registry.load_from_json("{ not json").is_err());
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_global_registry_has_all_blocks() {
        let registry = global_registry().read().unwrap();
        // Null, Air + 7 непрозрачных
        assert_eq!(registry.count(), 9);
    }
}
