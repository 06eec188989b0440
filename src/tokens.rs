use regex::{Regex, RegexBuilder};

lazy_static! {
    // URL-like spans: a scheme or a leading 'www.' followed by anything
    // that is not whitespace
    static ref URL_RE: Regex = RegexBuilder::new(
        r"
        ( https?:// | www\. )  # scheme or bare www
        \S+                    # rest of the URL
        "
    ).ignore_whitespace(true).build().expect("syntax error in static regex");

    // Fenced code spans, possibly spanning several lines
    static ref FENCED_CODE_RE: Regex = RegexBuilder::new(
        r"
        (?s)        # let '.' match newlines
        ``` .*? ```
        "
    ).ignore_whitespace(true).build().expect("syntax error in static regex");

    // Inline code spans
    static ref INLINE_CODE_RE: Regex = Regex::new(r"`[^`]*`")
        .expect("syntax error in static regex");

    // A word is a maximal run of unicode characters matching the
    // Alphabetic group
    static ref WORD_RE: Regex = Regex::new(r"\p{Alphabetic}+")
        .expect("syntax error in static regex");
}

/// A word as it appeared in the source text, and the zero-based
/// *character* index of its first character in the unmodified text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub word: &'a str,
    pub offset: usize,
}

/// Extracts word tokens from free-form text.
///
/// Words are found in a working copy of the input with URLs and code
/// spans blanked out character for character, so the working copy has
/// the same character count as the input and every surviving character
/// sits at the same index in both. Offsets measured in the working copy
/// therefore refer directly to the unmodified text the host will apply
/// edits against - a reported offset can never land inside a removed
/// span.
pub struct Tokenizer<'a> {
    input: &'a str,
    words: std::vec::IntoIter<(String, usize)>,
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        let stripped = strip_excluded_spans(input);
        let words = extract_words(&stripped);
        Self {
            input,
            words: words.into_iter(),
            byte_pos: 0,
            char_pos: 0,
        }
    }

    // Walk the input up to `target`, counting characters. Offsets only
    // ever increase, so this never rewinds.
    fn advance_to(&mut self, target: usize) -> Option<()> {
        while self.char_pos < target {
            let c = self.input[self.byte_pos..].chars().next()?;
            self.byte_pos += c.len_utf8();
            self.char_pos += 1;
        }
        Some(())
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (word, offset) = self.words.next()?;
        self.advance_to(offset)?;
        let start = self.byte_pos;
        self.advance_to(offset + word.chars().count())?;
        Some(Token {
            word: &self.input[start..self.byte_pos],
            offset,
        })
    }
}

// Blank out URLs, then fenced code spans, then inline code spans.
fn strip_excluded_spans(text: &str) -> String {
    let text = blank_spans(text, &URL_RE);
    let text = blank_spans(&text, &FENCED_CODE_RE);
    blank_spans(&text, &INLINE_CODE_RE)
}

// Replace every match with one space per character. Same-length padding
// keeps character offsets identical between the working copy and the
// original text, and two spans separated by removed text cannot fuse
// into a token that exists in neither.
fn blank_spans(text: &str, re: &Regex) -> String {
    re.replace_all(text, |captures: &regex::Captures| {
        " ".repeat(captures[0].chars().count())
    })
    .into_owned()
}

// Maximal alphabetic runs with their character offsets, skipping runs
// adjacent to a word character, an asterisk, an underscore or a hyphen.
// This keeps code-like identifiers (foo_bar, example123) and markdown
// emphasis markers out of the token stream.
fn extract_words(text: &str) -> Vec<(String, usize)> {
    let mut words = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;
    for word_match in WORD_RE.find_iter(text) {
        char_pos += text[byte_pos..word_match.start()].chars().count();
        byte_pos = word_match.start();
        let before = text[..word_match.start()].chars().next_back();
        let after = text[word_match.end()..].chars().next();
        if before.is_some_and(is_joining_char) || after.is_some_and(is_joining_char) {
            continue;
        }
        words.push((word_match.as_str().to_string(), char_pos));
    }
    words
}

fn is_joining_char(c: char) -> bool {
    // The match is a maximal alphabetic run, so an adjacent
    // alphanumeric can only be a digit
    c.is_alphanumeric() || c == '*' || c == '_' || c == '-'
}
