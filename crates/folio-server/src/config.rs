use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use folio_core::models::portfolio::GroundingDocument;

/// The one secret the relay needs.
pub const API_KEY_VAR: &str = "GOOGLE_GENERATIVE_AI_API_KEY";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Startup configuration, read from the environment.
///
/// | Variable               | Default         |
/// |------------------------|-----------------|
/// | `FOLIO_BIND_ADDR`      | `0.0.0.0:3000`  |
/// | `FOLIO_PORTFOLIO_PATH` | bundled JSON    |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub portfolio_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        let bind =
            std::env::var("FOLIO_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|e| eyre::eyre!("invalid FOLIO_BIND_ADDR {bind:?}: {e}"))?;

        let portfolio_path = std::env::var_os("FOLIO_PORTFOLIO_PATH").map(PathBuf::from);

        Ok(Self {
            bind_addr,
            portfolio_path,
        })
    }

    pub fn load_grounding(&self) -> eyre::Result<GroundingDocument> {
        let Some(path) = &self.portfolio_path else {
            return Ok(GroundingDocument::bundled()?);
        };

        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read portfolio at {}: {e}", path.display()))?;
        let doc = GroundingDocument::from_json(&contents)
            .map_err(|e| eyre::eyre!("failed to load portfolio at {}: {e}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded grounding document from disk");
        Ok(doc)
    }
}

/// Where the provider key comes from.
///
/// `Env` reads the variable on every call so a key set after startup is
/// picked up without a restart. `Fixed` is for tests and embedding.
#[derive(Clone)]
pub enum CredentialSource {
    Env(String),
    Fixed(Option<String>),
}

impl CredentialSource {
    pub fn provider_key() -> Self {
        CredentialSource::Env(API_KEY_VAR.to_string())
    }

    /// The key, or `None` when it is unset, empty or only whitespace.
    pub fn read(&self) -> Option<String> {
        let raw = match self {
            CredentialSource::Env(var) => std::env::var(var).ok(),
            CredentialSource::Fixed(key) => key.clone(),
        };
        raw.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
    }
}

impl fmt::Debug for CredentialSource {
    // Never print the key itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Env(var) => f.debug_tuple("Env").field(var).finish(),
            CredentialSource::Fixed(key) => f
                .debug_tuple("Fixed")
                .field(&key.as_ref().map(|_| "<redacted>"))
                .finish(),
        }
    }
}
