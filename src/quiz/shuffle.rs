use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelledOption {
    pub label: char,
    pub text: String,
}

/// Letter shown for the option at `position` (A, B, C, ...).
pub fn option_label(position: usize) -> char {
    u32::try_from(position)
        .ok()
        .and_then(|p| char::from_u32('A' as u32 + p))
        .unwrap_or('?')
}

/// Fresh Fisher-Yates permutation of `options`, labelled by position.
pub fn shuffle_options<R: Rng + ?Sized>(options: &[String], rng: &mut R) -> Vec<LabelledOption> {
    let mut shuffled = options.to_vec();
    shuffled.shuffle(rng);
    shuffled
        .into_iter()
        .enumerate()
        .map(|(i, text)| LabelledOption {
            label: option_label(i),
            text,
        })
        .collect()
}

/// Maps a typed letter to an option position. Only the first
/// `option_count` letters of the alphabet count, in either case.
pub fn option_index_for_key(key: char, option_count: usize) -> Option<usize> {
    let key = key.to_ascii_lowercase();
    if !key.is_ascii_lowercase() {
        return None;
    }
    let index = (key as u8 - b'a') as usize;
    (index < option_count).then_some(index)
}
