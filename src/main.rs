// ============================================
// Nimbus - Точка входа
// ============================================
// Собирает мир по конфигу и прогоняет его через рендерер-счётчик:
// вся статистика мешинга видна без окна и GPU.

use nimbus::{ChunkManager, MeshStatsRenderer, ShaderHandle, WorldConfig};

fn main() {
    env_logger::init();

    // Путь к конфигу первым аргументом, иначе дефолты
    let config = match std::env::args().nth(1) {
        Some(path) => match WorldConfig::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config '{}': {}, using defaults", path, e);
                WorldConfig::default()
            }
        },
        None => WorldConfig::default(),
    };

    let manager = ChunkManager::new(&config, ShaderHandle(0));

    let mut renderer = MeshStatsRenderer::default();
    manager.draw_chunks(&mut renderer);

    log::info!(
        "Seed {}: {} chunks, {} quads, {} vertices, {} indices",
        manager.world_seed(),
        renderer.draw_calls,
        renderer.quads(),
        renderer.vertices,
        renderer.indices
    );

    println!(
        "seed={} chunks={} quads={} vertices={} indices={}",
        manager.world_seed(),
        renderer.draw_calls,
        renderer.quads(),
        renderer.vertices,
        renderer.indices
    );
}
