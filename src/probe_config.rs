pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5566;
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// How a received chunk is written to the output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ChunkFormat {
    /// Byte-string literal, one chunk per line.
    Escaped,
    /// Bytes as received, followed by a newline.
    Raw,
}

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub host: String,
    pub port: u16,
    pub chunk_size: usize,
    pub chunk_format: ChunkFormat,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_format: ChunkFormat::Escaped,
        }
    }
}

impl ProbeConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub struct ProbeConfigBuilder {
    probe_config: ProbeConfig,
}

#[allow(clippy::new_without_default)]
impl ProbeConfigBuilder {
    pub fn new() -> Self {
        ProbeConfigBuilder {
            probe_config: ProbeConfig::default(),
        }
    }

    pub fn host(mut self, host: &str) -> Self {
        self.probe_config.host = host.to_string();

        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.probe_config.port = port;

        self
    }

    /// A zero chunk size would make every read look like a peer close, so it is clamped to 1.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.probe_config.chunk_size = chunk_size.max(1);

        self
    }

    pub fn chunk_format(mut self, chunk_format: ChunkFormat) -> Self {
        self.probe_config.chunk_format = chunk_format;

        self
    }

    pub fn get(self) -> ProbeConfig {
        self.probe_config
    }
}
