//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations that work on characters and
//! rotations directly. They share no code with the library, so agreement is
//! meaningful.

use bwt_suite::Mum;

/// Sort key that puts `#` below `$` below everything else.
pub fn oracle_key(c: char) -> (u8, char) {
    match c {
        '#' => (0, c),
        '$' => (1, c),
        _ => (2, c),
    }
}

fn keyed(symbols: &[char]) -> Vec<(u8, char)> {
    symbols.iter().map(|&c| oracle_key(c)).collect()
}

/// Suffix array by sorting whole rotations.
///
/// With a unique lowest final terminator this equals the suffix order.
pub fn oracle_suffix_array(input: &str) -> Vec<usize> {
    let symbols: Vec<char> = input.chars().collect();
    let n = symbols.len();
    let mut rows: Vec<usize> = (0..n).collect();
    rows.sort_by_key(|&offset| {
        let rotated: Vec<char> = symbols[offset..].iter().chain(&symbols[..offset]).copied().collect();
        keyed(&rotated)
    });
    rows
}

/// BWT as the last column of the sorted rotation matrix.
pub fn oracle_bwt(input: &str) -> String {
    let symbols: Vec<char> = input.chars().collect();
    let n = symbols.len();
    oracle_suffix_array(input)
        .into_iter()
        .map(|offset| symbols[(offset + n - 1) % n])
        .collect()
}

/// Longest common prefix of two suffixes, by direct comparison.
pub fn oracle_lcp(input: &str, a: usize, b: usize) -> usize {
    let symbols: Vec<char> = input.chars().collect();
    symbols[a..]
        .iter()
        .zip(&symbols[b..])
        .take_while(|(x, y)| x == y)
        .count()
}

/// Every MUM by brute force over substrings.
///
/// A substring qualifies when it does not start with a terminator, occurs
/// exactly once in each document, and cannot be extended on either side
/// without losing an occurrence.
pub fn oracle_mums(input: &str) -> Vec<(Vec<usize>, usize)> {
    let symbols: Vec<char> = input.chars().collect();
    let n = symbols.len();
    let docs = symbols.iter().filter(|&&c| c == '$').count();

    let mut doc_of = Vec::with_capacity(n);
    let mut doc = 0;
    for &c in &symbols {
        doc_of.push((doc < docs).then_some(doc));
        if c == '$' {
            doc += 1;
        }
    }

    let mut found = Vec::new();
    for start in 0..n {
        if symbols[start] == '$' || symbols[start] == '#' {
            continue;
        }
        for end in start + 1..=n {
            let pattern = &symbols[start..end];
            let len = pattern.len();
            let occurrences: Vec<usize> = (0..=n - len)
                .filter(|&p| &symbols[p..p + len] == pattern)
                .collect();
            if occurrences.len() != docs || occurrences[0] != start {
                continue;
            }

            let mut offsets = vec![None; docs];
            let mut unique = true;
            for &p in &occurrences {
                match doc_of[p] {
                    Some(d) if offsets[d].is_none() => offsets[d] = Some(p),
                    _ => unique = false,
                }
            }
            if !unique {
                continue;
            }

            let before = |p: usize| (p > 0).then(|| symbols[p - 1]);
            let after = |p: usize| (p + len < n).then(|| symbols[p + len]);
            let left_extendable = before(occurrences[0]).is_some()
                && occurrences.iter().all(|&p| before(p) == before(occurrences[0]));
            let right_extendable = after(occurrences[0]).is_some()
                && occurrences.iter().all(|&p| after(p) == after(occurrences[0]));
            if left_extendable || right_extendable {
                continue;
            }

            let offsets: Vec<usize> = offsets.into_iter().flatten().collect();
            found.push((offsets, len));
        }
    }
    found.sort();
    found
}

/// Normalize library MUMs for comparison with [`oracle_mums`].
pub fn mum_keys(mums: &[Mum]) -> Vec<(Vec<usize>, usize)> {
    let mut keys: Vec<(Vec<usize>, usize)> = mums
        .iter()
        .map(|mum| (mum.offsets.clone(), mum.length))
        .collect();
    keys.sort();
    keys
}

#[test]
fn oracles_agree_with_textbook_vectors() {
    assert_eq!(oracle_suffix_array("abaaba$"), vec![6, 5, 2, 3, 0, 4, 1]);
    assert_eq!(oracle_bwt("GATTACA$"), "ACTGA$TA");
    assert_eq!(oracle_lcp("abaaba$", 0, 3), 3);
    assert_eq!(oracle_mums("how$now$brown$cow$#"), vec![(vec![1, 5, 10, 15], 2)]);
}
