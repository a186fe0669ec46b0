use crate::domain::ports::Sampler;
use rand::Rng;

/// Word pool for generated names and sentences.
const WORDS: &[&str] = &[
    "alias", "aperiam", "aut", "beatae", "commodi", "debitis", "dolorem", "eius", "eligendi",
    "expedita", "facere", "illum", "impedit", "ipsa", "laborum", "magnam", "minima", "natus",
    "nemo", "officia", "pariatur", "quaerat", "quidem", "ratione", "rerum", "sequi", "soluta",
    "tempora", "ullam", "veniam", "vitae", "voluptas",
];

/// Lorem-ipsum style random data source backed by `rand::thread_rng`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoremSampler;

impl LoremSampler {
    pub fn new() -> Self {
        Self
    }
}

impl Sampler for LoremSampler {
    fn words(&self, count: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn sentence(&self) -> String {
        let count = rand::thread_rng().gen_range(6..=10);
        let mut sentence = self.words(count);
        if let Some(first) = sentence.get(..1) {
            let capitalized = first.to_uppercase();
            sentence.replace_range(..1, &capitalized);
        }
        sentence.push('.');
        sentence
    }

    fn chance(&self, percent: u8) -> bool {
        rand::thread_rng().gen_range(0..100u8) < percent.min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_count_and_separator() {
        let sampler = LoremSampler::new();
        let words = sampler.words(3);
        assert_eq!(words.split(' ').count(), 3);
        for word in words.split(' ') {
            assert!(WORDS.contains(&word));
        }
    }

    #[test]
    fn test_sentence_shape() {
        let sampler = LoremSampler::new();
        let sentence = sampler.sentence();
        assert!(sentence.ends_with('.'));
        assert!(sentence.chars().next().unwrap().is_uppercase());
        let word_count = sentence.trim_end_matches('.').split(' ').count();
        assert!((6..=10).contains(&word_count));
    }

    #[test]
    fn test_chance_extremes() {
        let sampler = LoremSampler::new();
        for _ in 0..100 {
            assert!(!sampler.chance(0));
            assert!(sampler.chance(100));
        }
    }
}
