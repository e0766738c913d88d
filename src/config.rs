use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Directory served as static content alongside the relay
    pub static_dir: PathBuf,
    pub command_channel_capacity: usize,
    pub broadcast_channel_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            static_dir: PathBuf::from("public"),
            command_channel_capacity: 256,
            broadcast_channel_capacity: 64,
        }
    }
}

impl ServerConfig {
    /// Build from defaults with environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var("LOBBY_LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        if let Ok(dir) = std::env::var("LOBBY_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        config
    }

    pub fn validate(&self) -> Result<(), String> {
        self.listen_addr
            .parse::<SocketAddr>()
            .map_err(|e| format!("invalid listen_addr '{}': {}", self.listen_addr, e))?;
        if self.command_channel_capacity == 0 {
            return Err("command_channel_capacity must be > 0".to_string());
        }
        if self.broadcast_channel_capacity == 0 {
            return Err("broadcast_channel_capacity must be > 0".to_string());
        }
        Ok(())
    }
}
