// File: src/model/similarity.rs
// Fuzzy name scoring used by the project matcher.

/// Scores how far a spoken fragment is from a project name.
///
/// 0.0 means identical, 1.0 means unrelated. Implementations must be pure and
/// return values within that range.
pub trait StringDistance: Send + Sync {
    fn distance(&self, fragment: &str, name: &str) -> f64;
}

/// Normalized Levenshtein distance over the whole (lower-cased) strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedLevenshtein;

impl StringDistance for NormalizedLevenshtein {
    fn distance(&self, fragment: &str, name: &str) -> f64 {
        normalized(&fragment.to_lowercase(), &name.to_lowercase())
    }
}

/// Location-agnostic scoring: the fragment is compared with the whole name and
/// with every run of consecutive name words of the same length, so "marketing"
/// scores 0.0 against "Marketing Dashboard".
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowedLevenshtein;

impl StringDistance for WindowedLevenshtein {
    fn distance(&self, fragment: &str, name: &str) -> f64 {
        let frag_words = simplify(fragment);
        let name_words = simplify(name);
        if frag_words.is_empty() || name_words.is_empty() {
            return 1.0;
        }
        let frag = frag_words.join(" ");
        let whole = normalized(&frag, &name_words.join(" "));

        name_words
            .windows(frag_words.len())
            .map(|w| normalized(&frag, &w.join(" ")))
            .fold(whole, f64::min)
    }
}

/// Lower-cases and splits on anything that is not alphanumeric.
fn simplify(s: &str) -> Vec<String> {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalized(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 0.0;
    }
    levenshtein(a, b) as f64 / longest as f64
}

pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn test_normalized_exact_and_unrelated() {
        let d = NormalizedLevenshtein;
        assert_eq!(d.distance("Sales", "sales"), 0.0);
        assert_eq!(d.distance("abc", "xyz"), 1.0);
    }

    #[test]
    fn test_windowed_matches_inside_name() {
        let d = WindowedLevenshtein;
        assert_eq!(d.distance("marketing", "Marketing Dashboard"), 0.0);
        assert_eq!(d.distance("dashboard", "Marketing Dashboard"), 0.0);
        assert!(d.distance("markting", "Marketing Dashboard") < 0.2);
        assert!(d.distance("finance", "Marketing Dashboard") > 0.5);
    }

    #[test]
    fn test_windowed_longer_fragment_than_name() {
        let d = WindowedLevenshtein;
        // No windows fit; only the whole-name comparison applies.
        assert!(d.distance("sales team rollout", "Sales") > 0.5);
        assert_eq!(d.distance("", "Sales"), 1.0);
    }
}
