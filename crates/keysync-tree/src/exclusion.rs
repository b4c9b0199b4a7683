//! Branch-scoped exclusion rules
//!
//! An exclusion rule is a [`KeyPath`] naming one branch of the document that
//! should be left out of comparison. Rules are matched one level at a time:
//! at every node the reconciler asks whether the current key is excluded and
//! then [advances](ExclusionSet::advance) the set into the key's children.
//!
//! A rule only ever applies along the exact path it names. `a.b.c`
//! suppresses `a → b → c` and nothing else; visiting `a → x` drops it from
//! the subtree under `x`.
//!
//! ```
//! use keysync_tree::{ExclusionSet, KeyPath};
//!
//! let rules = vec![KeyPath::new(["a", "b"])];
//! let root = ExclusionSet::new(&rules);
//!
//! assert!(!root.is_excluded("a"));
//! assert!(root.advance("a").is_excluded("b"));
//! assert!(root.advance("x").is_empty());
//! ```

use crate::KeyPath;

/// The exclusion rules still in play at one node of the traversal.
///
/// Each entry is the unmatched tail of an original rule. Sets are values:
/// [`advance`](Self::advance) builds a new set and leaves `self` untouched,
/// so sibling branches never observe each other's progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet<'a> {
    rules: Vec<&'a [String]>,
}

impl<'a> ExclusionSet<'a> {
    /// Seed the root set from a list of rules.
    pub fn new(rules: &'a [KeyPath]) -> Self {
        Self {
            rules: rules
                .iter()
                .map(KeyPath::segments)
                .filter(|segments| !segments.is_empty())
                .collect(),
        }
    }

    /// A set with no rules.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True when some rule has exactly one segment left and it is `key`.
    pub fn is_excluded(&self, key: &str) -> bool {
        self.rules
            .iter()
            .any(|rule| matches!(rule, [last] if last.as_str() == key))
    }

    /// The set to use for the children of `key`.
    ///
    /// Rules starting with `key` keep their tail; rules that diverge here,
    /// or that are fully matched by `key`, are dropped.
    pub fn advance(&self, key: &str) -> Self {
        let rules = self
            .rules
            .iter()
            .copied()
            .filter_map(|rule| match rule.split_first() {
                Some((first, tail)) if first.as_str() == key && !tail.is_empty() => Some(tail),
                _ => None,
            })
            .collect();
        Self { rules }
    }
}
