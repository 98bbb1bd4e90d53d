//! Environment-based viewer identity for the demo host.

use async_trait::async_trait;
use reaction_viewer::{IdentityError, IdentityProvider, Username};

/// Resolves the viewer from the config override or the environment.
///
/// Precedence: config `username`, then `REACTIONS_USER`, then `USER`.
pub struct EnvIdentity {
    override_name: Option<String>,
}

impl EnvIdentity {
    /// Create a provider with an optional config-supplied override.
    pub fn new(override_name: Option<String>) -> Self {
        Self { override_name }
    }
}

#[async_trait]
impl IdentityProvider for EnvIdentity {
    async fn current_user(&self) -> Result<Username, IdentityError> {
        if let Some(name) = &self.override_name {
            return Ok(name.clone());
        }

        std::env::var("REACTIONS_USER")
            .or_else(|_| std::env::var("USER"))
            .map_err(|_| {
                IdentityError::LookupFailed(
                    "neither REACTIONS_USER nor USER is set".to_string(),
                )
            })
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_override_wins() {
        let identity = EnvIdentity::new(Some("from-config".to_string()));
        assert_eq!(identity.current_user().await.unwrap(), "from-config");
    }

    #[tokio::test]
    async fn test_env_variable_fallback() {
        std::env::set_var("REACTIONS_USER", "octocat");
        let identity = EnvIdentity::new(None);
        assert_eq!(identity.current_user().await.unwrap(), "octocat");
    }
}
