/// Levenshtein edit distance over characters, unit costs, two-row
/// O(min(m,n)) space.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let (m, n) = (a.len(), b.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Keep the shorter string in the outer loop to minimise row width.
    let (a, b, m, n) = if m <= n { (a, b, m, n) } else { (b, a, n, m) };

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity ratio `(max_len − distance) / max_len` in [0.0, 1.0].
/// Two empty strings are fully similar; the one-empty case is decided by
/// the caller before this is reached.
pub fn similarity(s1: &str, s2: &str) -> f32 {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();
    let max_len = len1.max(len2);
    if max_len == 0 {
        return 1.0;
    }
    (max_len - levenshtein_distance(s1, s2)) as f32 / max_len as f32
}

/// Lowercases, trims, and collapses inner whitespace.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when the shorter description abbreviates the longer one token by
/// token: each short token either equals the next long token or is the
/// initialism of a consecutive run of long tokens. Bank statements shorten
/// merchant names this way ("ah amsterdam" for "albert heijn amsterdam").
pub fn abbreviation_match(shorter: &str, longer: &str) -> bool {
    let short: Vec<&str> = shorter.split_whitespace().collect();
    let long: Vec<&str> = longer.split_whitespace().collect();
    if short.is_empty() || short.len() >= long.len() {
        return false;
    }

    let mut pos = 0;
    for token in &short {
        if pos >= long.len() {
            return false;
        }
        if *token == long[pos] {
            pos += 1;
            continue;
        }
        let initials: Vec<char> = token.chars().collect();
        let is_initialism = initials.len() >= 2
            && pos + initials.len() <= long.len()
            && initials
                .iter()
                .enumerate()
                .all(|(offset, initial)| long[pos + offset].starts_with(*initial));
        if is_initialism {
            pos += initials.len();
            continue;
        }
        return false;
    }
    pos == long.len()
}
