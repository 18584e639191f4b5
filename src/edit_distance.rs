use std::cmp;

/// Levenshtein distance between `a` and `b`, counted in characters.
///
/// Fills the whole `(|a|+1) x (|b|+1)` table.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    table_distance(&a, &b)
}

fn table_distance(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();
    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + cmp::min(dp[i - 1][j], cmp::min(dp[i][j - 1], dp[i - 1][j - 1]))
            };
        }
    }

    dp[m][n]
}

/// Computes the row for `prefix + ch` from the row of `prefix`.
///
/// `prev[j]` is the distance between the prefix and the first `j` characters
/// of `query`.
pub(crate) fn next_row(prev: &[usize], ch: char, query: &[char]) -> Vec<usize> {
    let mut row = Vec::with_capacity(prev.len());
    row.push(prev[0] + 1);

    for (j, &q) in query.iter().enumerate() {
        let cell = if q == ch {
            prev[j]
        } else {
            1 + cmp::min(prev[j + 1], cmp::min(row[j], prev[j]))
        };
        row.push(cell);
    }

    row
}

/// A query string compared against many candidates.
pub struct EditDistance {
    base: Vec<char>,
}

impl EditDistance {
    pub fn new(base_string: &str) -> EditDistance {
        EditDistance {
            base: base_string.chars().collect(),
        }
    }

    /// Distance to `other` if it is at most `max_distance`.
    pub fn compare(&self, other: &str, max_distance: usize) -> Option<usize> {
        let other: Vec<char> = other.chars().collect();

        // the distance is at least the length difference
        if self.base.len().abs_diff(other.len()) > max_distance {
            return None;
        }

        let distance = table_distance(&other, &self.base);
        (distance <= max_distance).then_some(distance)
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "", "a", "cat", "caat", "car", "cart", "dog", "kitten", "sitting", "flaw", "lawn",
        "daleko", "aleko", "intention", "execution",
    ];

    #[test]
    fn identical_strings() {
        for w in WORDS {
            assert_eq!(levenshtein(w, w), 0);
        }
    }

    #[test]
    fn empty_side_is_length() {
        assert_eq!(levenshtein("", "daleko"), 6);
        assert_eq!(levenshtein("kitten", ""), 6);
    }

    #[test]
    fn known_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("cat", "caat"), 1);
        assert_eq!(levenshtein("car", "caat"), 2);
        assert_eq!(levenshtein("cart", "caat"), 1);
    }

    #[test]
    fn matches_strsim() {
        for a in WORDS {
            for b in WORDS {
                assert_eq!(levenshtein(a, b), strsim::levenshtein(a, b), "{a} / {b}");
                assert_eq!(levenshtein(a, b), levenshtein(b, a));
            }
        }
    }

    #[test]
    fn compare_within_bound() {
        assert_eq!(EditDistance::new("caat").compare("cat", 1), Some(1));
        assert_eq!(EditDistance::new("caat").compare("caat", 0), Some(0));
    }

    #[test]
    fn compare_over_bound() {
        assert_eq!(EditDistance::new("caat").compare("car", 1), None);
        assert_eq!(EditDistance::new("a").compare("daleko", 2), None);
    }

    #[test]
    fn rows_agree_with_table() {
        let query: Vec<char> = "sitting".chars().collect();
        let mut row: Vec<usize> = (0..=query.len()).collect();
        for ch in "kitten".chars() {
            row = next_row(&row, ch, &query);
        }
        assert_eq!(row.last(), Some(&3));
    }
}
