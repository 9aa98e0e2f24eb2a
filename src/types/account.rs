//! Account definitions collected from `!Account` blocks

use serde::Serialize;

/// One entry of the account registry
///
/// Built from the last `N` and `T` lines of an account block when its `^`
/// terminator is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountDefinition {
    /// Account or category name as written after `N`
    pub name: String,

    /// Account type as written after `T` (`Bank`, `CCard`, `Oth A`, ...)
    #[serde(rename = "type")]
    pub account_type: String,
}

impl AccountDefinition {
    pub fn new(name: impl Into<String>, account_type: impl Into<String>) -> Self {
        AccountDefinition {
            name: name.into(),
            account_type: account_type.into(),
        }
    }
}
