use ndarray::Array1;

/// Number of features produced by `extract_features`, one per letter `a..=z`.
pub const ALPHABET_SIZE: usize = 26;

/// Turns raw text into its relative letter frequencies.
///
/// The text is lower-cased and every occurrence of `a..=z` is counted; each
/// count is then divided by the total amount of letters found (not by the
/// length of the text). Slot `0` holds `a` and slot `25` holds `z`.
///
/// # Arguments
/// * `text` - Any text, in any case.
///
/// # Returns
/// A vector of `ALPHABET_SIZE` frequencies summing up to `1.0`, or all zeros
/// when the text holds no letters.
pub fn extract_features(text: &str) -> Array1<f32> {
    frequencies(&count_letters(text))
}

/// Counts every `a..=z` occurrence of the lower-cased text.
fn count_letters(text: &str) -> [usize; ALPHABET_SIZE] {
    let mut counts = [0; ALPHABET_SIZE];
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() {
            counts[(c as u8 - b'a') as usize] += 1;
        }
    }

    counts
}

/// Divides every count by their sum. Counts stay integral until here, `f32`
/// can't hold them exactly past `2^24`.
fn frequencies(counts: &[usize; ALPHABET_SIZE]) -> Array1<f32> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return Array1::zeros(ALPHABET_SIZE);
    }

    counts
        .iter()
        .map(|&count| (count as f64 / total as f64) as f32)
        .collect()
}
