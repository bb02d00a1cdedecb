/*!
 * Whitespace tokenization of exercise sentences.
 */

/// A sentence split into whitespace-delimited tokens.
///
/// Tokens keep their punctuation and case; positions are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Sentence<'a> {
    /// Split text on any run of whitespace
    pub fn tokenize(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace().collect(),
        }
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&'a str> {
        self.tokens.get(position).copied()
    }

    /// Position of the first token equal to `word`
    pub fn position_of(&self, word: &str) -> Option<usize> {
        self.tokens.iter().position(|token| *token == word)
    }

    /// Adjacent token pairs with the position of the first token
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (usize, &'a str, &'a str)> + '_ {
        self.tokens
            .windows(2)
            .enumerate()
            .map(|(i, pair)| (i, pair[0], pair[1]))
    }
}
