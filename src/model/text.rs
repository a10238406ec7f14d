// File: src/model/text.rs
// Word splitting and residual clean-up shared by the extractors.

/// A whitespace-delimited word with its byte span in the source text.
///
/// `end` excludes trailing sentence punctuation so that excising a word keeps
/// the comma or full stop that followed it. `norm` is the lower-cased word
/// without that punctuation and is what recognizers compare against.
/// `clause_end` is set when such punctuation was trimmed.
#[derive(Debug, Clone)]
pub(crate) struct Word {
    pub start: usize,
    pub end: usize,
    pub norm: String,
    pub clause_end: bool,
}

const TRAILING_PUNCT: &[char] = &[',', '.', ';', ':', '!', '?'];

pub(crate) fn split_words(input: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in input.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                push_word(&mut words, input, s, idx);
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        push_word(&mut words, input, s, input.len());
    }
    words
}

fn push_word(words: &mut Vec<Word>, input: &str, start: usize, end: usize) {
    let raw = &input[start..end];
    let trimmed = raw.trim_end_matches(TRAILING_PUNCT);
    // A word made only of punctuation keeps its full span.
    let (word_end, norm_src) = if trimmed.is_empty() {
        (end, raw)
    } else {
        (start + trimmed.len(), trimmed)
    };
    words.push(Word {
        start,
        end: word_end,
        norm: norm_src.to_lowercase(),
        clause_end: word_end < end,
    });
}

pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes `text[start..end]` and tidies what is left: whitespace runs are
/// collapsed, a space left in front of punctuation is dropped and stray
/// separators at either end are stripped.
pub(crate) fn excise(text: &str, start: usize, end: usize) -> String {
    let mut joined = String::with_capacity(text.len());
    joined.push_str(&text[..start]);
    joined.push(' ');
    joined.push_str(&text[end..]);
    tidy(&joined)
}

pub(crate) fn tidy(s: &str) -> String {
    let collapsed = collapse_whitespace(s);
    let mut out = String::with_capacity(collapsed.len());
    for c in collapsed.chars() {
        if TRAILING_PUNCT.contains(&c) && out.ends_with(' ') {
            out.pop();
        }
        out.push(c);
    }
    out.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '-'))
        .to_string()
}
