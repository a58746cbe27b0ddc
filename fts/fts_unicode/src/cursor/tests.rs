use super::*;
use crate::{Tokenizer, UnicodeClassifier};
use pretty_assertions::assert_eq;

/// Tokenize `input` and return `(text, start, end, ordinal)` tuples.
fn tokens(input: &[u8]) -> Vec<(String, usize, usize, usize)> {
    let tokenizer = Tokenizer::new();
    let mut cursor = tokenizer.open(input);
    let mut out = Vec::new();
    while let Some(token) = cursor.next_token().unwrap() {
        out.push((
            token.as_str().to_owned(),
            token.start,
            token.end,
            token.ordinal,
        ));
    }
    out
}

fn tok(text: &str, start: usize, end: usize, ordinal: usize) -> (String, usize, usize, usize) {
    (text.to_owned(), start, end, ordinal)
}

// === Segmentation ===

#[test]
fn hello_world() {
    assert_eq!(
        tokens(b"Hello, World!"),
        vec![tok("hello", 0, 5, 0), tok("world", 7, 12, 1)]
    );
}

#[test]
fn empty_input_is_exhausted() {
    assert!(tokens(b"").is_empty());
}

#[test]
fn only_delimiters_is_exhausted() {
    assert!(tokens(b"  ").is_empty());
    assert!(tokens(b" ,.;!? \n\t").is_empty());
}

#[test]
fn single_character_token() {
    assert_eq!(tokens(b"x"), vec![tok("x", 0, 1, 0)]);
}

#[test]
fn leading_and_trailing_delimiters() {
    assert_eq!(tokens(b"  abc  "), vec![tok("abc", 2, 5, 0)]);
}

#[test]
fn digits_are_word_characters() {
    assert_eq!(
        tokens(b"route 66, v2"),
        vec![
            tok("route", 0, 5, 0),
            tok("66", 6, 8, 1),
            tok("v2", 10, 12, 2),
        ]
    );
}

#[test]
fn underscore_and_apostrophe_split_words() {
    assert_eq!(
        tokens(b"snake_case don't"),
        vec![
            tok("snake", 0, 5, 0),
            tok("case", 6, 10, 1),
            tok("don", 11, 14, 2),
            tok("t", 15, 16, 3),
        ]
    );
}

#[test]
fn case_is_folded() {
    assert_eq!(tokens(b"MiXeD"), vec![tok("mixed", 0, 5, 0)]);
    assert_eq!(
        tokens("ÉCOLE Straße ΟΔΟΣ".as_bytes()),
        vec![
            tok("école", 0, 6, 0),
            tok("straße", 7, 14, 1),
            tok("οδοσ", 15, 23, 2),
        ]
    );
}

#[test]
fn folded_text_may_differ_in_length_from_span() {
    // U+0130 (2 bytes) folds to 'i' (1 byte).
    assert_eq!(
        tokens("\u{130}stanbul".as_bytes()),
        vec![tok("istanbul", 0, 9, 0)]
    );
}

#[test]
fn span_len_measures_input_not_folded_text() {
    let tokenizer = Tokenizer::new();
    let mut cursor = tokenizer.open("\u{130}stanbul".as_bytes());
    let token = cursor.next_token().unwrap().unwrap();
    assert_eq!(token.span_len(), 9);
    assert_eq!(token.text.len(), 8);
}

#[test]
fn multibyte_token_at_end_of_input() {
    // U+4E2D is 3 bytes and alphanumeric.
    let input = "ab 中".as_bytes();
    assert_eq!(tokens(input), vec![tok("ab", 0, 2, 0), tok("中", 3, 6, 1)]);
    assert_eq!(tokens(input)[1].2, input.len());
}

#[test]
fn cjk_run_is_one_token() {
    assert_eq!(tokens("東京タワー".as_bytes()).len(), 1);
}

#[test]
fn non_ascii_delimiters() {
    // NO-BREAK SPACE, EM DASH, IDEOGRAPHIC COMMA
    let input = "a\u{A0}b\u{2014}c\u{3001}d".as_bytes();
    assert_eq!(
        tokens(input),
        vec![
            tok("a", 0, 1, 0),
            tok("b", 3, 4, 1),
            tok("c", 7, 8, 2),
            tok("d", 11, 12, 3),
        ]
    );
}

// === Malformed input ===

#[test]
fn lone_continuation_byte_splits_tokens() {
    assert_eq!(
        tokens(&[b'a', 0x80, b'b']),
        vec![tok("a", 0, 1, 0), tok("b", 2, 3, 1)]
    );
}

#[test]
fn encoded_surrogate_is_a_delimiter() {
    assert_eq!(
        tokens(&[b'a', b'b', 0xED, 0xA0, 0x80, b'c']),
        vec![tok("ab", 0, 2, 0), tok("c", 5, 6, 1)]
    );
}

#[test]
fn truncated_sequence_at_end() {
    assert_eq!(tokens(&[b'o', b'k', b' ', 0xE4]), vec![tok("ok", 0, 2, 0)]);
}

#[test]
fn only_malformed_bytes_is_exhausted() {
    assert!(tokens(&[0x80, 0xFF, 0xC0, 0x80, 0xFE]).is_empty());
}

// === Cursor state ===

#[test]
fn trailing_delimiter_is_consumed_with_token() {
    let tokenizer = Tokenizer::new();
    let mut cursor = tokenizer.open(b"ab, cd");
    let token = cursor.next_token().unwrap().unwrap();
    assert_eq!((token.start, token.end), (0, 2));
    // The comma that ended the run was read as lookahead.
    assert_eq!(cursor.position(), 3);
}

#[test]
fn position_at_end_after_final_token() {
    let tokenizer = Tokenizer::new();
    let mut cursor = tokenizer.open(b"word");
    assert!(cursor.next_token().unwrap().is_some());
    assert_eq!(cursor.position(), 4);
    assert_eq!(cursor.state(), CursorState::Scanning);
    assert!(cursor.next_token().unwrap().is_none());
    assert_eq!(cursor.state(), CursorState::Exhausted);
}

#[test]
fn exhaustion_is_repeatable() {
    let tokenizer = Tokenizer::new();
    let mut cursor = tokenizer.open(b"one  ");
    assert!(cursor.next_token().unwrap().is_some());
    for _ in 0..5 {
        assert_eq!(cursor.next_token(), Ok(None));
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.next_ordinal(), 1);
    }
}

#[test]
fn ordinals_count_up_from_zero() {
    let ordinals: Vec<usize> = tokens(b"a b c d e f g").iter().map(|t| t.3).collect();
    assert_eq!(ordinals, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn position_never_decreases() {
    let tokenizer = Tokenizer::new();
    let mut cursor = tokenizer.open("x, yy; zzz…".as_bytes());
    let mut last = cursor.position();
    while cursor.next_token().unwrap().is_some() {
        assert!(cursor.position() >= last);
        last = cursor.position();
    }
    assert_eq!(cursor.position(), cursor.input().len());
}

// === Output buffer ===

#[test]
fn long_token_grows_buffer() {
    let word = "a".repeat(1000);
    let tokenizer = Tokenizer::new();
    let mut cursor = tokenizer.open(word.as_bytes());
    let token = cursor.next_token().unwrap().unwrap();
    assert_eq!(token.text.len(), 1000);
    assert_eq!((token.start, token.end), (0, 1000));
    assert!(cursor.buffer_capacity() >= 1000 + MAX_UTF8_LEN - 1);
}

#[test]
fn buffer_reused_across_tokens() {
    let tokenizer = Tokenizer::new();
    let mut cursor = tokenizer.open(b"first second");
    assert_eq!(
        cursor.next_token().unwrap().map(|t| t.as_str()),
        Some("first")
    );
    let capacity = cursor.buffer_capacity();
    assert_eq!(
        cursor.next_token().unwrap().map(|t| t.as_str()),
        Some("second")
    );
    assert_eq!(cursor.buffer_capacity(), capacity);
}

#[test]
fn small_grow_step_still_fits_wide_characters() {
    let config = TokenizerConfig::default().with_grow_step(1);
    // U+10400 DESERET CAPITAL LETTER LONG I folds to U+10428.
    let input = "\u{10400}".repeat(5);
    let mut cursor = TokenCursor::new(input.as_bytes(), UnicodeClassifier, config);
    let token = cursor.next_token().unwrap().unwrap();
    assert_eq!(token.as_str(), "\u{10428}".repeat(5));
}

#[test]
fn zero_grow_step_field_is_treated_as_minimum() {
    let config = TokenizerConfig {
        grow_step: 0,
        initial_capacity: 0,
    };
    let mut cursor = TokenCursor::new(b"abcdefgh", UnicodeClassifier, config);
    assert_eq!(
        cursor.next_token().unwrap().map(|t| t.as_str()),
        Some("abcdefgh")
    );
}

#[test]
fn initial_capacity_applies_on_first_growth() {
    let config = TokenizerConfig::default().with_initial_capacity(512);
    let mut cursor = TokenCursor::new(b"abc", UnicodeClassifier, config);
    assert_eq!(cursor.buffer_capacity(), 0);
    assert!(cursor.next_token().unwrap().is_some());
    assert!(cursor.buffer_capacity() >= 512);
}

#[test]
fn allocation_failure_poisons_cursor() {
    let config = TokenizerConfig::default().with_grow_step(usize::MAX);
    let mut cursor = TokenCursor::new(b"abc def", UnicodeClassifier, config);
    assert_eq!(
        cursor.next_token(),
        Err(TokenizerError::OutOfMemory {
            requested: usize::MAX
        })
    );
    assert_eq!(cursor.state(), CursorState::Failed);
    assert_eq!(cursor.next_token(), Err(TokenizerError::CursorFailed));
    assert_eq!(cursor.next_token(), Err(TokenizerError::CursorFailed));
}

#[test]
fn allocation_failure_on_delimiter_only_input_is_not_reached() {
    let config = TokenizerConfig::default().with_grow_step(usize::MAX);
    let mut cursor = TokenCursor::new(b" - ", UnicodeClassifier, config);
    assert_eq!(cursor.next_token(), Ok(None));
}

// === Custom classifier ===

/// Treats only ASCII letters as word characters and folds to uppercase.
struct AsciiUpper;

impl Classifier for AsciiUpper {
    fn is_alphanumeric(&self, c: char) -> bool {
        c.is_ascii_alphabetic()
    }

    fn fold(&self, c: char) -> char {
        c.to_ascii_uppercase()
    }
}

#[test]
fn custom_classifier_drives_segmentation() {
    let config = TokenizerConfig::default();
    let mut cursor = TokenCursor::new("ab1cd é".as_bytes(), AsciiUpper, config);
    let mut texts = Vec::new();
    while let Some(token) = cursor.next_token().unwrap() {
        texts.push(token.as_str().to_owned());
    }
    assert_eq!(texts, vec!["AB", "CD"]);
}

#[test]
fn collect_owned_drains_remaining_tokens() {
    let tokenizer = Tokenizer::new();
    let mut cursor = tokenizer.open(b"skip keep this");
    assert!(cursor.next_token().unwrap().is_some());
    let rest = cursor.collect_owned().unwrap();
    assert_eq!(
        rest,
        vec![
            OwnedToken::new("keep", 5, 9, 1),
            OwnedToken::new("this", 10, 14, 2),
        ]
    );
    assert!(cursor.collect_owned().unwrap().is_empty());
}
