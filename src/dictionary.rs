use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::normalize::{AsciiNormalizer, Normalizer};
use crate::suggest::{SuggestConfig, SuggestionEngine};
use crate::suggestion::Suggestion;
use crate::trie::{PrefixTree, Words};

/// Vocabulary built once from a word source and only read afterwards.
///
/// Every query is normalized with `N` before it reaches the tree. The value is
/// `Send + Sync` when `N` is, so it can be shared across threads as is.
#[derive(Debug, Clone)]
pub struct Dictionary<N: Normalizer = AsciiNormalizer> {
    tree: PrefixTree,
    config: SuggestConfig,
    normalizer: N,
}

impl Dictionary {
    /// Loads whitespace separated words from the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Dictionary> {
        Dictionary::load_with(path, SuggestConfig::default(), AsciiNormalizer::new())
    }

    /// Like [`Dictionary::load`], reading from `reader`. `name` is only used
    /// in errors and logs.
    pub fn read<R: Read>(reader: R, name: &str) -> Result<Dictionary> {
        Dictionary::read_with(reader, name, SuggestConfig::default(), AsciiNormalizer::new())
    }

    pub fn from_words<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Dictionary::from_words_with(words, SuggestConfig::default(), AsciiNormalizer::new())
    }
}

impl<N: Normalizer> Dictionary<N> {
    pub fn load_with(path: impl AsRef<Path>, config: SuggestConfig, normalizer: N) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|err| Error::source_unavailable(&name, err))?;

        Self::read_with(file, &name, config, normalizer)
    }

    /// Fails with [`Error::SourceUnavailable`] if reading fails or no token
    /// normalizes to a word.
    pub fn read_with<R: Read>(
        reader: R,
        name: &str,
        config: SuggestConfig,
        normalizer: N,
    ) -> Result<Self> {
        let mut dictionary = Dictionary {
            tree: PrefixTree::new(),
            config,
            normalizer,
        };
        let mut tokens = 0usize;
        let mut skipped = 0usize;

        for line in BufReader::new(reader).split(b'\n') {
            let line = line.map_err(|err| Error::source_unavailable(name, err))?;
            let line = String::from_utf8_lossy(&line);

            for token in line.split_whitespace() {
                tokens += 1;
                if !dictionary.insert(token) {
                    skipped += 1;
                    debug!(token, "skipping token without letters");
                }
            }
        }

        if dictionary.is_empty() {
            return Err(Error::source_unavailable(
                name,
                io::Error::new(io::ErrorKind::InvalidData, "no words found"),
            ));
        }

        info!(
            source = name,
            tokens,
            words = dictionary.len(),
            skipped,
            "loaded vocabulary"
        );

        Ok(dictionary)
    }

    /// Builds from an in-memory list. An empty list gives an empty dictionary.
    pub fn from_words_with<I, S>(words: I, config: SuggestConfig, normalizer: N) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary {
            tree: PrefixTree::new(),
            config,
            normalizer,
        };
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    // false when the token has no key; duplicates still count as inserted
    fn insert(&mut self, token: &str) -> bool {
        let key = self.normalizer.normalize(token);
        if key.is_empty() {
            return false;
        }
        self.tree.insert(&key);
        true
    }

    /// Whether the normalized form of `word` is stored.
    ///
    /// A word with no letters normalizes to an empty key and is reported as
    /// missing. Spell-checking callers usually treat such tokens as correct
    /// and skip them (see [`crate::is_checkable`]); that choice is theirs.
    pub fn exists(&self, word: &str) -> bool {
        self.tree.contains(&self.normalizer.normalize(word))
    }

    /// Stored words close to `word`, closest first.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        self.suggestions(word).into_iter().map(String::from).collect()
    }

    /// Same as [`Dictionary::suggest`], keeping the distances.
    pub fn suggestions(&self, word: &str) -> Vec<Suggestion> {
        let key = self.normalizer.normalize(word);
        SuggestionEngine::new(&self.tree, self.config.strategy).suggest(
            &key,
            self.config.max_distance,
            self.config.limit,
        )
    }

    pub fn words(&self) -> Words<'_> {
        self.tree.words()
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}
