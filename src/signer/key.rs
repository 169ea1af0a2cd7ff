//! Wallet loading and signer dispatch.

use std::fs;
use std::path::Path;

use crate::signer::arweave::ArweaveSigner;
use crate::signer::ethereum::EthereumSigner;
use crate::signer::types::{SignerError, SignerKind, SignerResult};

/// A loaded signer of either account family.
#[derive(Debug, Clone)]
pub enum Signer {
    Ethereum(EthereumSigner),
    Arweave(ArweaveSigner),
}

impl Signer {
    /// Load a signer from a wallet file.
    ///
    /// A file holding a JSON object is treated as an Arweave JWK; anything
    /// else must be a hex private key.
    pub fn load(path: &Path) -> SignerResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SignerError::ReadWallet {
            path: path.display().to_string(),
            source,
        })?;
        let signer = Self::from_wallet_contents(&contents)?;

        tracing::info!(
            wallet = %path.display(),
            kind = %signer.kind(),
            address = %signer.address(),
            "Wallet loaded"
        );
        Ok(signer)
    }

    /// Detect the key type from raw wallet contents.
    pub fn from_wallet_contents(contents: &str) -> SignerResult<Self> {
        // An all-digit hex key is valid JSON too, so require an object.
        let parsed = serde_json::from_str::<serde_json::Value>(contents);
        if matches!(parsed, Ok(serde_json::Value::Object(_))) {
            return ArweaveSigner::from_jwk(contents).map(Signer::Arweave);
        }
        EthereumSigner::from_private_key(contents).map(Signer::Ethereum)
    }

    /// Load from an optional wallet path, falling back to `HALO_PRIVATE_KEY`.
    pub fn from_path_or_env(path: Option<&Path>) -> SignerResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => EthereumSigner::from_env().map(Signer::Ethereum),
        }
    }

    pub fn kind(&self) -> SignerKind {
        match self {
            Signer::Ethereum(_) => SignerKind::Ethereum,
            Signer::Arweave(_) => SignerKind::Arweave,
        }
    }

    /// Account ID as the router expects it.
    pub fn address(&self) -> String {
        match self {
            Signer::Ethereum(s) => s.address().to_string(),
            Signer::Arweave(s) => s.address().to_string(),
        }
    }

    /// Sign a canonical message string.
    pub async fn sign(&self, message: &str) -> SignerResult<String> {
        match self {
            Signer::Ethereum(s) => s.sign_message(message).await,
            Signer::Arweave(s) => s.sign_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::arweave::tests::generate_jwk;
    use crate::signer::types::PRIVATE_KEY_ENV_VAR;
    use std::io::Write;

    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_hex_file_is_ethereum() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", TEST_PRIVATE_KEY).unwrap();

        let signer = Signer::load(file.path()).unwrap();
        assert_eq!(signer.kind(), SignerKind::Ethereum);
        assert_eq!(signer.address(), "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    }

    #[test]
    fn test_json_file_is_arweave() {
        let (_, jwk) = generate_jwk();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(jwk.as_bytes()).unwrap();

        let signer = Signer::load(file.path()).unwrap();
        assert_eq!(signer.kind(), SignerKind::Arweave);
        assert_eq!(signer.address().len(), 43);
    }

    #[test]
    fn test_missing_file() {
        let err = Signer::load(Path::new("/nonexistent/wallet.key")).unwrap_err();
        assert!(matches!(err, SignerError::ReadWallet { .. }));
        assert!(err.to_string().contains("/nonexistent/wallet.key"));
    }

    #[test]
    fn test_json_that_is_not_a_jwk() {
        let err = Signer::from_wallet_contents("{\"hello\": 1}").unwrap_err();
        assert!(matches!(err, SignerError::InvalidJwk(_)));
    }

    /// Env vars are process-global; tests touching them take this lock.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn test_env_fallback_loads_key() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var(PRIVATE_KEY_ENV_VAR, TEST_PRIVATE_KEY);

        let result = Signer::from_path_or_env(None);
        std::env::remove_var(PRIVATE_KEY_ENV_VAR);

        let signer = result.unwrap();
        assert_eq!(signer.kind(), SignerKind::Ethereum);
        assert_eq!(signer.address(), "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    }

    #[test]
    fn test_env_fallback_unset() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::remove_var(PRIVATE_KEY_ENV_VAR);

        let err = Signer::from_path_or_env(None).unwrap_err();
        assert!(matches!(err, SignerError::MissingEnv(PRIVATE_KEY_ENV_VAR)));
    }

    #[test]
    fn test_wallet_path_wins_over_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::remove_var(PRIVATE_KEY_ENV_VAR);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", TEST_PRIVATE_KEY).unwrap();
        let signer = Signer::from_path_or_env(Some(file.path())).unwrap();
        assert_eq!(signer.address(), "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    }

    #[tokio::test]
    async fn test_dispatch_sign() {
        let signer = Signer::from_wallet_contents(TEST_PRIVATE_KEY).unwrap();
        let sig = signer.sign("hello").await.unwrap();
        assert!(sig.starts_with("0x"));
    }
}
