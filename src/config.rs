// ============================================
// World Config - Параметры генерации мира
// ============================================
// Загружается из JSON, при ошибке берутся дефолты

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Параметры мира, которые приложение передаёт ядру
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Заменить world_seed случайным числом при старте
    #[serde(default)]
    pub randomize_seed: bool,

    /// Сид мира, меняя его меняем как генерируется мир
    #[serde(default = "default_world_seed")]
    pub world_seed: i32,

    /// Частота шума: чем ниже частота тем мягче склоны,
    /// чем выше тем круче
    #[serde(default = "default_noise_frequency")]
    pub noise_frequency: f32,

    /// 3D размер чанка (в блоках), не обязан быть кубом
    #[serde(default = "default_chunk_size")]
    pub chunk_size: [i32; 3],

    /// Размер блока в пикселях
    #[serde(default = "default_block_pixel_size")]
    pub block_pixel_size: i32,

    /// Радиус решётки чанков: строится (2 * chunk_count)^2 чанков
    #[serde(default = "default_chunk_count")]
    pub chunk_count: i32,
}

fn default_world_seed() -> i32 {
    1789
}

fn default_noise_frequency() -> f32 {
    0.03
}

fn default_chunk_size() -> [i32; 3] {
    [32, 32, 32]
}

fn default_block_pixel_size() -> i32 {
    1
}

fn default_chunk_count() -> i32 {
    2
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            randomize_seed: false,
            world_seed: default_world_seed(),
            noise_frequency: default_noise_frequency(),
            chunk_size: default_chunk_size(),
            block_pixel_size: default_block_pixel_size(),
            chunk_count: default_chunk_count(),
        }
    }
}

impl WorldConfig {
    /// Загрузить конфиг из JSON файла
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&content).map_err(|e| format!("Failed to parse JSON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorldConfig::default();
        assert_eq!(config.world_seed, 1789);
        assert_eq!(config.chunk_size, [32, 32, 32]);
        assert_eq!(config.chunk_count, 2);
        assert!(!config.randomize_seed);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WorldConfig =
            serde_json::from_str(r#"{ "world_seed": 42, "chunk_count": 1 }"#).unwrap();
        assert_eq!(config.world_seed, 42);
        assert_eq!(config.chunk_count, 1);
        // Остальное из дефолтов
        assert_eq!(config.noise_frequency, 0.03);
        assert_eq!(config.block_pixel_size, 1);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(WorldConfig::load_from_file("no_such_config.json").is_err());
    }
}
