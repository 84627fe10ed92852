//! Ordered rule chain with named insertion and alternate chains.

use crate::Error;

struct RuleEntry<R> {
    name: String,
    /// Names of the alternate chains this rule also participates in
    /// (e.g. the paragraph terminator lookahead).
    alt: Vec<String>,
    rule: R,
}

/// Holds rules in priority order. Dispatch is first-match-wins, so insertion
/// position matters; `before` allows a rule to be slotted ahead of a named
/// existing one. Iteration order is registration order, keeping dispatch
/// deterministic.
pub struct Ruler<R> {
    entries: Vec<RuleEntry<R>>,
}

impl<R> Ruler<R> {
    pub fn new() -> Self {
        Ruler {
            entries: Vec::new(),
        }
    }

    /// Append a rule at the end of the chain.
    pub fn push(&mut self, name: &str, alt: &[&str], rule: R) {
        self.entries.push(RuleEntry {
            name: name.to_string(),
            alt: alt.iter().map(|s| s.to_string()).collect(),
            rule,
        });
    }

    /// Insert a rule immediately before the rule named `anchor`.
    pub fn before(&mut self, anchor: &str, name: &str, alt: &[&str], rule: R) -> Result<(), Error> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.name == anchor)
            .ok_or_else(|| Error::UnknownRule(anchor.to_string()))?;
        self.entries.insert(
            idx,
            RuleEntry {
                name: name.to_string(),
                alt: alt.iter().map(|s| s.to_string()).collect(),
                rule,
            },
        );
        Ok(())
    }

    /// Rules active for a chain: all of them for the root chain `""`,
    /// otherwise those whose alt list names the chain. Unknown chain names
    /// simply select no rules.
    pub fn rules<'a>(&'a self, chain: &'a str) -> impl Iterator<Item = (&'a str, &'a R)> {
        self.entries
            .iter()
            .filter(move |e| chain.is_empty() || e.alt.iter().any(|a| a == chain))
            .map(|e| (e.name.as_str(), &e.rule))
    }
}

impl<R> Default for Ruler<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ruler: &Ruler<u8>, chain: &str) -> Vec<String> {
        ruler.rules(chain).map(|(n, _)| n.to_string()).collect()
    }

    #[test]
    fn test_push_keeps_order() {
        let mut ruler = Ruler::new();
        ruler.push("fence", &[], 0u8);
        ruler.push("paragraph", &[], 1u8);
        assert_eq!(names(&ruler, ""), vec!["fence", "paragraph"]);
    }

    #[test]
    fn test_before_inserts_ahead_of_anchor() {
        let mut ruler = Ruler::new();
        ruler.push("fence", &[], 0u8);
        ruler.push("paragraph", &[], 1u8);
        ruler.before("fence", "shortcode", &["paragraph"], 2u8).unwrap();
        assert_eq!(names(&ruler, ""), vec!["shortcode", "fence", "paragraph"]);
    }

    #[test]
    fn test_before_unknown_anchor_errors() {
        let mut ruler = Ruler::new();
        ruler.push("fence", &[], 0u8);
        let err = ruler.before("code", "shortcode", &[], 1u8).unwrap_err();
        assert!(matches!(err, Error::UnknownRule(name) if name == "code"));
    }

    #[test]
    fn test_chain_selection() {
        let mut ruler = Ruler::new();
        ruler.push("shortcode", &["paragraph", "blockquote"], 0u8);
        ruler.push("fence", &["paragraph"], 1u8);
        ruler.push("paragraph", &[], 2u8);
        assert_eq!(names(&ruler, "paragraph"), vec!["shortcode", "fence"]);
        assert_eq!(names(&ruler, "blockquote"), vec!["shortcode"]);
        assert!(names(&ruler, "list").is_empty());
    }
}
