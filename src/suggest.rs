use derive_builder::Builder;
use tracing::trace;

use crate::edit_distance::{EditDistance, next_row};
use crate::suggestion::Suggestion;
use crate::trie::{Node, PrefixTree};

pub const DEFAULT_MAX_DISTANCE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// How the tree is searched. Both give the same suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStrategy {
    /// Walks the trie with one edit-distance row per depth and skips subtrees
    /// that cannot come back within the bound.
    #[default]
    Pruned,
    /// Scores every stored word against the query.
    ///
    /// Costs O(words x word length x query length) per call.
    Exhaustive,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuggestConfig {
    /// Inclusive edit-distance bound.
    #[builder(default = "DEFAULT_MAX_DISTANCE")]
    pub max_distance: usize,
    /// Maximum number of suggestions returned.
    #[builder(default = "DEFAULT_LIMIT")]
    pub limit: usize,
    #[builder(default)]
    pub strategy: SearchStrategy,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            max_distance: DEFAULT_MAX_DISTANCE,
            limit: DEFAULT_LIMIT,
            strategy: SearchStrategy::default(),
        }
    }
}

pub struct SuggestionEngine<'a> {
    tree: &'a PrefixTree,
    strategy: SearchStrategy,
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(tree: &'a PrefixTree, strategy: SearchStrategy) -> SuggestionEngine<'a> {
        SuggestionEngine { tree, strategy }
    }

    /// Stored words within `max_distance` of `query`, closest first, then
    /// alphabetical, at most `limit` of them.
    ///
    /// `query` is expected to be normalized already. An empty query has no
    /// suggestions.
    pub fn suggest(&self, query: &str, max_distance: usize, limit: usize) -> Vec<Suggestion> {
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let comparer = EditDistance::new(query);
        let mut suggestions = match self.strategy {
            SearchStrategy::Exhaustive => self.exhaustive(&comparer, max_distance),
            SearchStrategy::Pruned => self.pruned(comparer.chars(), max_distance),
        };

        trace!(
            query,
            strategy = ?self.strategy,
            matches = suggestions.len(),
            "suggest"
        );

        suggestions.sort();
        suggestions.truncate(limit);
        suggestions
    }

    fn exhaustive(&self, comparer: &EditDistance, max_distance: usize) -> Vec<Suggestion> {
        self.tree
            .words()
            .filter(|word| !word.is_empty())
            .filter_map(|word| {
                comparer
                    .compare(&word, max_distance)
                    .map(|distance| Suggestion::new(word, distance))
            })
            .collect()
    }

    fn pruned(&self, query: &[char], max_distance: usize) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        // rows[d] belongs to the current path cut to d chars
        let mut rows: Vec<Vec<usize>> = vec![(0..=query.len()).collect()];
        let mut path = String::new();
        // (depth of the parent, byte length of the parent path, edge label, node)
        let mut stack: Vec<(usize, usize, char, &Node)> = Vec::new();

        for (&ch, child) in self.tree.root().children().rev() {
            stack.push((0, 0, ch, child));
        }

        while let Some((depth, parent_len, ch, node)) = stack.pop() {
            path.truncate(parent_len);
            path.push(ch);

            let row = next_row(&rows[depth], ch, query);
            rows.truncate(depth + 1);

            let distance = row[query.len()];
            if node.is_word() && distance <= max_distance {
                suggestions.push(Suggestion::new(path.as_str(), distance));
            }

            // every extension of the path costs at least the row minimum
            let reachable = row.iter().min().is_some_and(|&min| min <= max_distance);
            rows.push(row);

            if reachable {
                for (&next, child) in node.children().rev() {
                    stack.push((depth + 1, path.len(), next, child));
                }
            }
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit_distance::levenshtein;

    const VOCABULARY: &[&str] = &[
        "a", "an", "and", "ant", "cat", "car", "cart", "care", "cast", "bat", "bar", "dog",
        "dot", "do", "daleko", "aleko", "sitting", "kitten", "mitten", "smitten",
    ];

    fn tree() -> PrefixTree {
        VOCABULARY.iter().collect()
    }

    fn terms(suggestions: Vec<Suggestion>) -> Vec<String> {
        suggestions.into_iter().map(String::from).collect()
    }

    #[test]
    fn close_to_caat() {
        let t: PrefixTree = ["cat", "car", "cart", "dog"].iter().collect();
        for strategy in [SearchStrategy::Exhaustive, SearchStrategy::Pruned] {
            let engine = SuggestionEngine::new(&t, strategy);
            assert_eq!(
                engine.suggest("caat", 1, 10),
                vec![Suggestion::new("cart", 1), Suggestion::new("cat", 1)]
            );
        }
    }

    #[test]
    fn strategies_agree() {
        let t = tree();
        let exhaustive = SuggestionEngine::new(&t, SearchStrategy::Exhaustive);
        let pruned = SuggestionEngine::new(&t, SearchStrategy::Pruned);

        for query in ["caat", "ct", "dg", "kiten", "aleko", "x", "anndd", "smiten", "b"] {
            for max_distance in 0..=3 {
                assert_eq!(
                    exhaustive.suggest(query, max_distance, usize::MAX),
                    pruned.suggest(query, max_distance, usize::MAX),
                    "{query} within {max_distance}"
                );
            }
        }
    }

    #[test]
    fn results_within_bound() {
        let t = tree();
        let engine = SuggestionEngine::new(&t, SearchStrategy::Pruned);
        for query in ["cat", "dot", "kitten"] {
            for s in engine.suggest(query, 2, usize::MAX) {
                assert!(s.distance <= 2);
                assert_eq!(levenshtein(&s.term, query), s.distance);
            }
        }
    }

    #[test]
    fn capped_at_limit() {
        let t = tree();
        let engine = SuggestionEngine::new(&t, SearchStrategy::Pruned);
        let all = engine.suggest("cat", 3, usize::MAX);
        assert!(all.len() > DEFAULT_LIMIT);

        let capped = engine.suggest("cat", 3, DEFAULT_LIMIT);
        assert_eq!(capped.len(), DEFAULT_LIMIT);
        assert_eq!(capped[..], all[..DEFAULT_LIMIT]);
    }

    #[test]
    fn ordered_by_distance_then_term() {
        let t = tree();
        let engine = SuggestionEngine::new(&t, SearchStrategy::Exhaustive);
        assert_eq!(
            terms(engine.suggest("cat", 1, 10)),
            vec!["cat", "bat", "car", "cart", "cast"]
        );
    }

    #[test]
    fn exact_match_has_distance_zero() {
        let t = tree();
        let engine = SuggestionEngine::new(&t, SearchStrategy::Pruned);
        assert_eq!(engine.suggest("daleko", 0, 10), vec![Suggestion::new("daleko", 0)]);
    }

    #[test]
    fn nothing_close() {
        let t = tree();
        let engine = SuggestionEngine::new(&t, SearchStrategy::Pruned);
        assert!(engine.suggest("zzzzzz", 1, 10).is_empty());
        assert!(engine.suggest("", 1, 10).is_empty());
        assert!(engine.suggest("cat", 1, 0).is_empty());
    }

    #[test]
    fn empty_tree() {
        let t = PrefixTree::new();
        for strategy in [SearchStrategy::Exhaustive, SearchStrategy::Pruned] {
            assert!(SuggestionEngine::new(&t, strategy).suggest("cat", 2, 10).is_empty());
        }
    }

    #[test]
    fn builder_defaults() {
        let config = SuggestConfigBuilder::default().build().unwrap();
        assert_eq!(config, SuggestConfig::default());
        assert_eq!(config.max_distance, 1);
        assert_eq!(config.limit, 10);
        assert_eq!(config.strategy, SearchStrategy::Pruned);
    }

    #[test]
    fn builder_overrides() {
        let config = SuggestConfigBuilder::default()
            .max_distance(2)
            .strategy(SearchStrategy::Exhaustive)
            .build()
            .unwrap();
        assert_eq!(config.max_distance, 2);
        assert_eq!(config.limit, DEFAULT_LIMIT);
        assert_eq!(config.strategy, SearchStrategy::Exhaustive);
    }
}
