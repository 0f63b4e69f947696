use derive_more::Display;

/// Label used for the generated enumeration when none is given.
pub const DEFAULT_ENUM_NAME: &str = "custom_icons";

/// One icon extracted from a stylesheet
///
/// ```text
/// .icon-NAME:before { content: '\CODEPOINT'; }
/// ```
///
/// Displays as the body of an enumeration entry:
///
/// ```text
///     NAME = 0xCODEPOINT,
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "\t{} = 0x{}, ", name, codepoint)]
pub struct IconRule {
    pub name: String,
    /// Raw hex digits as scanned, without the leading backslash
    pub codepoint: String,
}

impl IconRule {
    pub fn new(name: impl Into<String>, codepoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            codepoint: codepoint.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationDocument {
    name: String,
    rules: Vec<IconRule>,
}

impl EnumerationDocument {
    pub fn new(name: impl Into<String>, rules: Vec<IconRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    pub fn with_default_name(rules: Vec<IconRule>) -> Self {
        Self::new(DEFAULT_ENUM_NAME, rules)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in the order they appeared in the source text
    pub fn rules(&self) -> &[IconRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
