//! Novelty tool scoring.
//!
//! These are toy heuristics with no correctness requirement beyond being
//! total and deterministic: the same pair of names always produces the same
//! score, so shared result links render the same page for everyone.

fn letters(name: &str) -> Vec<char> {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn vowel_ratio(name: &str) -> f64 {
    let letters = letters(name);
    if letters.is_empty() {
        return 0.0;
    }
    let vowels = letters.iter().filter(|c| is_vowel(**c)).count();
    vowels as f64 / letters.len() as f64
}

/// Rough syllable estimate: the number of vowel groups.
fn syllables(name: &str) -> usize {
    let mut count = 0;
    let mut in_group = false;
    for c in letters(name) {
        if is_vowel(c) {
            if !in_group {
                count += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }
    count.max(1)
}

/// Love calculator: character-code sum of both names, folded into 0..=100.
/// Symmetric by construction.
pub fn love_score(first: &str, second: &str) -> u8 {
    let sum: u32 = letters(first)
        .into_iter()
        .chain(letters(second))
        .map(|c| c as u32)
        .sum();
    (sum % 101) as u8
}

/// Compatibility checker: how closely the vowel ratios of the two names
/// agree, as a percentage.
pub fn compatibility_score(first: &str, second: &str) -> u8 {
    let diff = (vowel_ratio(first) - vowel_ratio(second)).abs();
    (100.0 - (diff * 100.0)).round() as u8
}

/// Sibling matcher: shared-letter overlap weighted against the difference
/// in syllable count.
pub fn match_score(name: &str, sibling: &str) -> u8 {
    let a: std::collections::BTreeSet<char> = letters(name).into_iter().collect();
    let b: std::collections::BTreeSet<char> = letters(sibling).into_iter().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let shared = a.intersection(&b).count();
    let overlap = shared as f64 / a.union(&b).count() as f64;

    let syllable_gap = syllables(name).abs_diff(syllables(sibling));
    let rhythm: f64 = (40 - 10 * syllable_gap.min(4)) as f64;

    (overlap * 60.0 + rhythm).round() as u8
}

/// Name combiner: blends a prefix of one name with a suffix of the other,
/// in both directions and at two split points each.
pub fn combine_names(first: &str, second: &str) -> Vec<String> {
    let a = letters(first);
    let b = letters(second);
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let splits = |name: &[char]| -> Vec<usize> {
        let after_vowel = name
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, c)| is_vowel(**c))
            .map(|(i, _)| i + 1);
        let half = (name.len() + 1) / 2;
        let mut points = vec![half];
        if let Some(p) = after_vowel
            && p < name.len()
        {
            points.push(p);
        }
        points
    };

    let capitalize = |word: String| -> String {
        let mut chars = word.chars();
        match chars.next() {
            Some(head) => head.to_uppercase().collect::<String>() + chars.as_str(),
            None => word,
        }
    };

    let mut suggestions = Vec::new();
    for (head, tail) in [(&a, &b), (&b, &a)] {
        for split in splits(head) {
            let prefix: String = head[..split].iter().collect();
            let suffix: String = tail[tail.len() / 2..].iter().collect();
            let blend = capitalize(format!("{prefix}{suffix}"));
            if blend.len() > 2 && !suggestions.contains(&blend) {
                suggestions.push(blend);
            }
        }
    }
    suggestions
}
