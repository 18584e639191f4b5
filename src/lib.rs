/*!

Spell-checking dictionary backed by a prefix tree, with suggestions bounded by
Levenshtein distance.

```rust
use triespell::Dictionary;

let dictionary = Dictionary::from_words(["cat", "car", "cart", "dog"]);

assert!(dictionary.exists("Cat"));
assert!(!dictionary.exists("caat"));

// within one edit, closest first, at most ten
assert_eq!(dictionary.suggest("caat"), vec!["cart", "cat"]);
```

A vocabulary file holds whitespace separated words and is read once with
[`Dictionary::load`]. The dictionary is read-only afterwards.

*/

pub mod dictionary;
pub mod edit_distance;
pub mod error;
pub mod normalize;
pub mod suggest;
pub mod suggestion;
pub mod trie;

pub use dictionary::Dictionary;
pub use edit_distance::levenshtein;
pub use error::{Error, Result};
pub use normalize::{AsciiNormalizer, Normalizer, is_checkable, normalize};
pub use suggest::{SearchStrategy, SuggestConfig, SuggestConfigBuilder, SuggestionEngine};
pub use suggestion::Suggestion;
pub use trie::PrefixTree;
