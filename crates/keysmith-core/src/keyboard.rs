//! QWERTY spatial pattern detection.
//!
//! A physical keyboard is modeled as four character rows plus the vertical
//! key columns between them. An undirected adjacency graph connects every
//! horizontally consecutive pair within a row and every vertically
//! consecutive pair within a column; shifted symbols are normalized to their
//! unshifted key before lookup. The graph is built once and shared
//! process-wide — it is read-only after construction and safe to use from
//! concurrent callers without locking.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Warning emitted when an adjacency chain of 3+ keys is found.
pub const KEYBOARD_PATTERN_WARNING: &str =
    "Keyboard pattern detected (e.g. adjacent keys like 'qwerty' or 'asdf')";

/// Minimum run of pairwise-adjacent keys that counts as a pattern.
const MIN_CHAIN: usize = 3;

/// Keyboard rows, top to bottom.
const ROWS: [&str; 4] = ["`1234567890-=", "qwertyuiop[]\\", "asdfghjkl;'", "zxcvbnm,./"];

/// Vertical key columns (digit row → top letter row → home row → bottom row).
const COLUMNS: [&str; 12] = [
    "1qaz", "2wsx", "3edc", "4rfv", "5tgb", "6yhn", "7ujm", "8ik,", "9ol.", "0p;/", "-['", "=]",
];

/// Map a shifted symbol back to its unshifted key.
const fn unshift(c: char) -> Option<char> {
    let unshifted = match c {
        '~' => '`',
        '!' => '1',
        '@' => '2',
        '#' => '3',
        '$' => '4',
        '%' => '5',
        '^' => '6',
        '&' => '7',
        '*' => '8',
        '(' => '9',
        ')' => '0',
        '_' => '-',
        '+' => '=',
        '{' => '[',
        '}' => ']',
        '|' => '\\',
        ':' => ';',
        '"' => '\'',
        '<' => ',',
        '>' => '.',
        '?' => '/',
        _ => return None,
    };
    Some(unshifted)
}

/// Normalize one character for graph lookup: unshift symbols, lowercase
/// letters.
fn normalize_key(c: char) -> char {
    unshift(c).unwrap_or_else(|| c.to_ascii_lowercase())
}

fn add_edge(graph: &mut HashMap<char, Vec<char>>, a: char, b: char) {
    let forward = graph.entry(a).or_default();
    if !forward.contains(&b) {
        forward.push(b);
    }
    let backward = graph.entry(b).or_default();
    if !backward.contains(&a) {
        backward.push(a);
    }
}

/// The shared adjacency graph, built on first use.
fn adjacency_graph() -> &'static HashMap<char, Vec<char>> {
    static GRAPH: OnceLock<HashMap<char, Vec<char>>> = OnceLock::new();
    GRAPH.get_or_init(|| {
        let mut graph = HashMap::new();
        for line in ROWS.iter().chain(COLUMNS.iter()) {
            let mut chars = line.chars().peekable();
            while let Some(a) = chars.next() {
                if let Some(&b) = chars.peek() {
                    add_edge(&mut graph, a, b);
                }
            }
        }
        graph
    })
}

/// Whether two normalized keys sit one key-step apart. Equal characters are
/// never adjacent — identical-character runs are a separate concern.
fn are_adjacent(a: char, b: char) -> bool {
    a != b
        && adjacency_graph()
            .get(&a)
            .is_some_and(|neighbors| neighbors.contains(&b))
}

/// Scan `text` for keyboard spatial patterns.
///
/// Returns the deduplicated warning list: a single fixed warning when any
/// run of 3+ pairwise-adjacent keys exists, empty otherwise. Text shorter
/// than 3 characters never warns.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn detect_patterns(text: &str) -> Vec<String> {
    let normalized: Vec<char> = text.chars().map(normalize_key).collect();
    if normalized.len() < MIN_CHAIN {
        return Vec::new();
    }

    let mut chain = 1usize;
    for pair in normalized.windows(2) {
        if are_adjacent(pair[0], pair[1]) {
            chain += 1;
            if chain >= MIN_CHAIN {
                return vec![KEYBOARD_PATTERN_WARNING.to_string()];
            }
        } else {
            chain = 1;
        }
    }
    Vec::new()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
