//! Hint label generation.

use crate::target::{PlacedTarget, Target};

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const RADIX: usize = ALPHABET.len();

/// Smallest label width that gives `count` distinct labels
pub fn label_width(count: usize) -> usize {
    let mut width = 1;
    let mut capacity = RADIX;
    while capacity < count {
        width += 1;
        capacity = capacity.saturating_mul(RADIX);
    }
    width
}

/// Encode `index` as a fixed-width base-26 label, most significant letter first.
fn encode(mut index: usize, width: usize) -> String {
    let mut letters = vec![ALPHABET[0]; width];
    for slot in letters.iter_mut().rev() {
        *slot = ALPHABET[index % RADIX];
        index /= RADIX;
    }
    letters.into_iter().map(char::from).collect()
}

/// Generate `count` unique labels of equal length.
///
/// Up to 26 targets get single letters. Beyond that every label has the
/// minimal width `L` with `26^L >= count`, so no label is a prefix of another.
pub fn generate_labels(count: usize) -> Vec<String> {
    let width = label_width(count);
    (0..count).map(|index| encode(index, width)).collect()
}

/// Attach labels to targets in order. Runs exactly once per discovery.
pub fn label_targets(placed: Vec<PlacedTarget>) -> Vec<Target> {
    let labels = generate_labels(placed.len());
    placed
        .into_iter()
        .zip(labels)
        .map(|(target, label)| target.with_label(label))
        .collect()
}
