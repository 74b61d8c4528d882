use std::{
    collections::HashMap,
    sync::LazyLock,
};

use regex::{Captures, Regex};

/// Identifier-shaped tokens, Unicode letters included.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}_][\p{L}\p{N}_]*").expect("IDENTIFIER pattern compiles")
});

/// Maps identifiers the engine can not lex to synthetic ASCII names.
///
/// Only identifiers containing a non-ASCII character are aliased. Aliases are
/// `_v0`, `_v1`, ... in order of first appearance, and stay stable for the
/// lifetime of the table, which is one evaluation pass.
///
/// # Example
/// ```
/// use calcpad::sheet::alias::AliasTable;
///
/// let mut aliases = AliasTable::new();
///
/// assert_eq!(aliases.substitute("房租 = 3500"), "_v0 = 3500");
/// assert_eq!(aliases.substitute("水电 + 房租 + rent"), "_v1 + _v0 + rent");
/// assert!(aliases.contains("房租"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    names:   HashMap<String, String>,
    counter: usize,
}

impl AliasTable {
    /// Creates an empty table whose first alias is `_v0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `identifier` must be aliased before it reaches the engine.
    #[must_use]
    pub fn needs_alias(identifier: &str) -> bool {
        !identifier.is_ascii()
    }

    /// Returns the alias for `identifier`, allocating the next one on first
    /// use.
    pub fn alias(&mut self, identifier: &str) -> String {
        if let Some(name) = self.names.get(identifier) {
            return name.clone();
        }

        let name = format!("_v{}", self.counter);
        self.counter += 1;
        self.names.insert(identifier.to_string(), name.clone());
        name
    }

    /// Whether `identifier` has already been given an alias.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.names.contains_key(identifier)
    }

    /// Number of aliased identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no identifier has been aliased yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Replaces every non-ASCII identifier in `line` with its alias.
    ///
    /// ASCII identifiers, numbers and operators are left as they are.
    pub fn substitute(&mut self, line: &str) -> String {
        IDENTIFIER.replace_all(line, |caps: &Captures| {
                      let token = &caps[0];
                      if Self::needs_alias(token) {
                          self.alias(token)
                      } else {
                          token.to_string()
                      }
                  })
                  .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn identifier_pattern_compiles() {
        assert!(IDENTIFIER.is_match("房租"));
        assert!(!IDENTIFIER.is_match("12 + 3"));
    }

    #[test]
    fn mixed_script_identifier_is_one_token() {
        let mut aliases = AliasTable::new();
        assert_eq!(aliases.substitute("total_円 * 2"), "_v0 * 2");
        assert_eq!(aliases.len(), 1);
    }

    #[test]
    fn repeated_identifier_keeps_alias() {
        let mut aliases = AliasTable::new();
        let first = aliases.alias("ä");
        aliases.alias("ö");
        assert_eq!(aliases.alias("ä"), first);
        assert_eq!(aliases.alias("ü"), "_v2");
    }

    #[test]
    fn ascii_lines_are_untouched() {
        let mut aliases = AliasTable::new();
        assert_eq!(aliases.substitute("sqrt(pi) + x_1"), "sqrt(pi) + x_1");
        assert!(aliases.is_empty());
    }
}
