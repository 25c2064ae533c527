use std::net::SocketAddr;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub host: String,
    pub port: u16,
    pub seed_books: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_books: true,
        }
    }

    // Applies CATALOG_HOST and CATALOG_PORT on top of the defaults.
    pub fn from_env(branch_id: &str) -> LibraryResult<Self> {
        let mut config = Self::new(branch_id);
        if let Ok(host) = std::env::var("CATALOG_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("CATALOG_PORT") {
            config.port = port.parse().map_err(|_| LibraryError::runtime(
                format!("invalid CATALOG_PORT {:?}", port).as_str(), None))?;
        }
        Ok(config)
    }

    pub fn without_seed(mut self) -> Self {
        self.seed_books = false;
        self
    }

    // Resolves the host so names such as `localhost` work as well as IPs.
    pub async fn bind_addr(&self) -> LibraryResult<SocketAddr> {
        let mut addrs = tokio::net::lookup_host((self.host.as_str(), self.port)).await
            .map_err(|err| LibraryError::runtime(
                format!("invalid bind address {}:{} {:?}", self.host, self.port, err).as_str(), None))?;
        addrs.next().ok_or_else(|| LibraryError::runtime(
            format!("no address for {}:{}", self.host, self.port).as_str(), None))
    }
}
