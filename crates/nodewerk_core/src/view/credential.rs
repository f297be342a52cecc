//! Credential vault reveal state.
//!
//! Secrets stay masked until their credential is explicitly revealed.

use crate::model::activity::Credential;
use std::collections::BTreeSet;

/// Placeholder length used for every masked secret.
pub const MASK_LENGTH: usize = 12;
const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialReveal {
    revealed: BTreeSet<String>,
}

impl CredentialReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether credential `id` is revealed afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.revealed.remove(id) {
            return false;
        }
        self.revealed.insert(id.to_string());
        true
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn hide_all(&mut self) {
        self.revealed.clear();
    }

    /// Password as displayed: plaintext when revealed, bullets otherwise.
    pub fn masked_secret(&self, credential: &Credential) -> String {
        self.display(&credential.id, &credential.password)
    }

    /// API key as displayed, if the credential has one.
    pub fn masked_api_key(&self, credential: &Credential) -> Option<String> {
        credential
            .api_key
            .as_deref()
            .map(|key| self.display(&credential.id, key))
    }

    fn display(&self, id: &str, secret: &str) -> String {
        if self.is_revealed(id) {
            secret.to_string()
        } else {
            mask()
        }
    }
}

fn mask() -> String {
    std::iter::repeat(MASK_CHAR).take(MASK_LENGTH).collect()
}

#[cfg(test)]
mod tests {
    use super::{CredentialReveal, MASK_LENGTH};
    use crate::model::activity::Credential;

    fn credential() -> Credential {
        Credential {
            id: "cred1".to_string(),
            system: "n8n Production".to_string(),
            icon: "workflow".to_string(),
            username: "admin".to_string(),
            password: "hunter2".to_string(),
            api_key: Some("n8n_api_xyz".to_string()),
            notes: None,
            last_updated: "2025-01-10".to_string(),
        }
    }

    #[test]
    fn secrets_are_masked_until_revealed() {
        let credential = credential();
        let mut reveal = CredentialReveal::new();

        let masked = reveal.masked_secret(&credential);
        assert_eq!(masked.chars().count(), MASK_LENGTH);
        assert!(!masked.contains("hunter2"));

        assert!(reveal.toggle("cred1"));
        assert_eq!(reveal.masked_secret(&credential), "hunter2");
        assert_eq!(
            reveal.masked_api_key(&credential).as_deref(),
            Some("n8n_api_xyz")
        );

        assert!(!reveal.toggle("cred1"));
        assert!(!reveal.is_revealed("cred1"));
    }
}
