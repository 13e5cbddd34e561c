//! # Merge Rule Table
//!
//! Merge rules arrive as ordered ``"<left> <right>"`` surface pairs.
//! Position in the list is the rule's *rank*; lower ranks were learned
//! earlier and are applied first.

use core::fmt::Debug;

use crate::{
    errors::{BCResult, BytechipperError},
    types::{BCHashMap, Pair, TokenType},
    vocab::{PairRanksMap, SurfaceVocab},
};

/// One resolved merge rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRule<T: TokenType> {
    /// The adjacent pair to replace.
    pub pair: Pair<T>,

    /// The replacement token.
    pub merged: T,
}

/// Ordered merge rules, indexed by pair.
#[derive(Default, Clone, PartialEq)]
pub struct MergeTable<T: TokenType> {
    rules: Vec<MergeRule<T>>,
    pair_ranks: PairRanksMap<T>,
}

impl<T: TokenType> Debug for MergeTable<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("MergeTable")
            .field("rules", &self.rules.len())
            .field("pairs", &self.pair_ranks.len())
            .finish()
    }
}

impl<T: TokenType> MergeTable<T> {
    /// Resolve merge rules against a vocab.
    ///
    /// Each rule is split on its first ``' '``; the left part, the right part
    /// and their concatenation must all be in `vocab`.
    ///
    /// ## Arguments
    /// * `merges` - The rules, in priority order.
    /// * `vocab` - The (extended) surface vocab.
    ///
    /// ## Returns
    /// The table, or:
    /// * [`BytechipperError::MalformedMerge`] for a rule without a separator.
    /// * [`BytechipperError::UnknownMergePart`] for a failed lookup.
    pub fn from_merges<S: AsRef<str>>(
        merges: &[S],
        vocab: &SurfaceVocab<T>,
    ) -> BCResult<Self> {
        let lookup = |rule: &str, part: &str| {
            vocab
                .lookup_token(part)
                .ok_or_else(|| BytechipperError::UnknownMergePart {
                    rule: rule.to_string(),
                    part: part.to_string(),
                })
        };

        let rules = merges
            .iter()
            .map(|rule| {
                let rule = rule.as_ref();
                let (left, right) =
                    rule.split_once(' ')
                        .ok_or_else(|| BytechipperError::MalformedMerge {
                            rule: rule.to_string(),
                        })?;

                Ok(MergeRule {
                    pair: (lookup(rule, left)?, lookup(rule, right)?),
                    merged: lookup(rule, &format!("{left}{right}"))?,
                })
            })
            .collect::<BCResult<Vec<_>>>()?;

        Ok(Self::from_rules(rules))
    }

    /// Build from resolved rules, in priority order.
    pub fn from_rules(rules: Vec<MergeRule<T>>) -> Self {
        let mut pair_ranks: PairRanksMap<T> = BCHashMap::with_capacity(rules.len());
        for (rank, rule) in rules.iter().enumerate() {
            pair_ranks.entry(rule.pair).or_default().push(rank as u32);
        }
        Self { rules, pair_ranks }
    }

    /// The rules, in priority order.
    pub fn rules(&self) -> &[MergeRule<T>] {
        &self.rules
    }

    /// The number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Is this table empty?
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Get the rule at `rank`.
    #[inline]
    pub fn rule(
        &self,
        rank: u32,
    ) -> Option<&MergeRule<T>> {
        self.rules.get(rank as usize)
    }

    /// The lowest rank ``>= min_rank`` of a rule for `pair`.
    ///
    /// A pair can repeat in the list; every occurrence is a separate rule.
    #[inline]
    pub fn next_rank(
        &self,
        pair: Pair<T>,
        min_rank: u32,
    ) -> Option<u32> {
        let ranks = self.pair_ranks.get(&pair)?;
        let idx = ranks.partition_point(|&r| r < min_rank);
        ranks.get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixture_merges, fixture_raw_vocab};

    fn vocab() -> SurfaceVocab<u32> {
        SurfaceVocab::from_raw(&fixture_raw_vocab()).unwrap()
    }

    #[test]
    fn test_from_merges() {
        let table = MergeTable::from_merges(&fixture_merges(), &vocab()).unwrap();
        assert_eq!(table.len(), fixture_merges().len());

        assert_eq!(
            table.rules()[0],
            MergeRule {
                pair: (104, 101),
                merged: 256
            }
        );
        assert_eq!(table.rule(3).unwrap().merged, 259);
        assert_eq!(table.rule(1_000), None);

        assert_eq!(table.next_rank((104, 101), 0), Some(0));
        assert_eq!(table.next_rank((104, 101), 1), None);
        assert_eq!(table.next_rank((258, 111), 0), Some(3));
        assert_eq!(table.next_rank((1, 2), 0), None);
    }

    #[test]
    fn test_repeated_pair() {
        let table = MergeTable::<u32>::from_rules(vec![
            MergeRule {
                pair: (1, 2),
                merged: 10,
            },
            MergeRule {
                pair: (3, 4),
                merged: 11,
            },
            MergeRule {
                pair: (1, 2),
                merged: 12,
            },
        ]);

        assert_eq!(table.next_rank((1, 2), 0), Some(0));
        assert_eq!(table.next_rank((1, 2), 1), Some(2));
        assert_eq!(table.next_rank((1, 2), 3), None);
    }

    #[test]
    fn test_split_on_first_space() {
        let mut raw = fixture_raw_vocab();
        raw.insert("ĠĠ".to_string(), 400);

        let vocab = SurfaceVocab::<u32>::from_raw(&raw).unwrap();
        let table = MergeTable::from_merges(&["Ġ Ġ"], &vocab).unwrap();
        assert_eq!(table.rules()[0].pair, (32, 32));
        assert_eq!(table.rules()[0].merged, 400);
    }

    #[test]
    fn test_bad_merges() {
        let vocab = vocab();

        assert!(matches!(
            MergeTable::from_merges(&["hello"], &vocab),
            Err(BytechipperError::MalformedMerge { rule }) if rule == "hello"
        ));

        assert!(matches!(
            MergeTable::from_merges(&["h e", "x yz"], &vocab),
            Err(BytechipperError::UnknownMergePart { rule, part })
                if rule == "x yz" && part == "yz"
        ));

        // Parts exist; their concatenation does not.
        assert!(matches!(
            MergeTable::from_merges(&["q z"], &vocab),
            Err(BytechipperError::UnknownMergePart { part, .. }) if part == "qz"
        ));
    }
}
