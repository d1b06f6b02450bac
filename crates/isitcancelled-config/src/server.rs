use std::net::{Ipv4Addr, SocketAddr};

/// Port the API listens on. Not configurable.
pub const PORT: u16 = 3003;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT)),
        }
    }
}
