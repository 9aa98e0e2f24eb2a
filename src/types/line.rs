//! Tagged QIF lines
//!
//! Every QIF line inside a block starts with a single tag character followed by
//! its payload: `T-12.50`, `LFood:Groceries`, `^`.

/// Header line opening an account-definition block
pub const ACCOUNT_HEADER: &str = "!Account";

/// Prefix of a transaction-type header line (`!Type:Bank`, `!Type:CCard`, ...)
pub const TYPE_HEADER_PREFIX: &str = "!Type:";

/// Type codes whose blocks carry no amounts worth aggregating
pub const NON_MONETARY_CODES: [&str; 2] = ["Class", "Cat"];

/// Tag of a block-start line
pub const TAG_HEADER: char = '!';
/// Tag of the line terminating a record
pub const TAG_END: char = '^';
/// Name of an account definition
pub const TAG_NAME: char = 'N';
/// Account type inside an account block, transaction total inside a transaction block
pub const TAG_TOTAL: char = 'T';
/// Category or transfer account of a transaction
pub const TAG_CATEGORY: char = 'L';
/// Category of a split line
pub const TAG_SPLIT_CATEGORY: char = 'S';
/// Amount of a split line
pub const TAG_SPLIT_AMOUNT: char = '$';

/// A line split into its tag and payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub tag: char,
    pub payload: &'a str,
}

impl<'a> Line<'a> {
    /// Split a text line into tag and payload
    ///
    /// Returns `None` for an empty line, which has no tag.
    pub fn parse(text: &'a str) -> Option<Self> {
        let mut chars = text.chars();
        let tag = chars.next()?;
        Some(Line {
            tag,
            payload: chars.as_str(),
        })
    }
}

/// Classification of a line seen between blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockHeader<'a> {
    /// `!Account`
    Account,
    /// `!Type:<code>` for a code that carries amounts
    Transactions(&'a str),
    /// `!Type:Cat` or `!Type:Class`
    NonMonetary(&'a str),
}

impl<'a> BlockHeader<'a> {
    /// Recognize a block-start line
    ///
    /// `!Type:` with an empty code is not a header.
    pub fn parse(text: &'a str) -> Option<Self> {
        if text == ACCOUNT_HEADER {
            return Some(BlockHeader::Account);
        }
        let code = text.strip_prefix(TYPE_HEADER_PREFIX)?;
        if code.is_empty() {
            None
        } else if NON_MONETARY_CODES.contains(&code) {
            Some(BlockHeader::NonMonetary(code))
        } else {
            Some(BlockHeader::Transactions(code))
        }
    }
}
