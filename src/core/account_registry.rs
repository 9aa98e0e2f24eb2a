//! Registry of accounts defined in `!Account` blocks
//!
//! The registry records each account's declared type. It plays no part in the
//! totals; it is only exported on request.

use crate::types::AccountDefinition;
use std::collections::HashMap;

/// Map of account name to account type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountRegistry {
    accounts: HashMap<String, String>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        AccountRegistry {
            accounts: HashMap::new(),
        }
    }

    /// Record an account, replacing the type of an earlier definition with the same name
    pub fn register(&mut self, name: String, account_type: String) {
        self.accounts.insert(name, account_type);
    }

    /// Declared type of an account
    pub fn account_type(&self, name: &str) -> Option<&str> {
        self.accounts.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All definitions sorted by name
    pub fn definitions(&self) -> Vec<AccountDefinition> {
        let mut definitions: Vec<_> = self
            .accounts
            .iter()
            .map(|(name, account_type)| AccountDefinition::new(name, account_type))
            .collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }
}
