// Small config struct read from environment variables with hard-coded
// fallbacks; there is no config file. Every tunable is either a
// compile-time constant or an optional request field.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub default_board_size: u8,
    pub default_depth: u8,
    pub pool_size: usize,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            default_board_size: env_u8("GOMOKU_DEFAULT_BOARD_SIZE", 15),
            default_depth: env_u8("GOMOKU_DEFAULT_DEPTH", 6),
            pool_size: env_usize("GOMOKU_POOL_SIZE", default_pool_size()),
        }
    }
}

fn env_u8(key: &str, fallback: u8) -> u8 {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(fallback)
}

fn env_usize(key: &str, fallback: usize) -> usize {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(fallback)
}

fn default_pool_size() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(2)
        .saturating_sub(1)
        .clamp(1, 64)
}
