//! Question generation.
//!
//! Callers guarantee the catalog holds at least `options` countries and that
//! `options >= 2`; [`GameConfig::validate`](crate::config::GameConfig::validate)
//! enforces this before a game is built.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Country, Question};

/// A shuffled copy of `items`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(rng);
    copy
}

/// Countries for one classic session, drawn without replacement.
pub fn draw_session<R: Rng + ?Sized>(catalog: &[Country], count: usize, rng: &mut R) -> Vec<Country> {
    let mut drawn = shuffled(catalog, rng);
    drawn.truncate(count);
    drawn
}

/// Uniform pick from `pool`, resampled while it matches `exclude_code`.
///
/// The pool must contain a country other than the excluded one.
pub fn pick_country<R: Rng + ?Sized>(
    pool: &[Country],
    exclude_code: Option<&str>,
    rng: &mut R,
) -> Country {
    loop {
        let index = rng.gen_range(0..pool.len());
        let candidate = &pool[index];
        match exclude_code {
            Some(code) if candidate.code == code => continue,
            _ => return candidate.clone(),
        }
    }
}

/// Build the option set around `correct`.
pub fn build_question<R: Rng + ?Sized>(
    correct: Country,
    catalog: &[Country],
    options: usize,
    rng: &mut R,
) -> Question {
    let others: Vec<Country> = catalog
        .iter()
        .filter(|c| !c.same_as(&correct))
        .cloned()
        .collect();

    let mut choices = shuffled(&others, rng);
    choices.truncate(options - 1);
    choices.push(correct.clone());
    choices.shuffle(rng);

    Question {
        correct_answer: correct,
        options: choices,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::data::builtin_catalog;

    #[test]
    fn test_shuffled_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<u32> = (0..20).collect();
        let mut result = shuffled(&items, &mut rng);
        result.sort();
        assert_eq!(result, items);
    }

    #[test]
    fn test_draw_session_has_no_repeats() {
        let catalog = builtin_catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let drawn = draw_session(&catalog, 10, &mut rng);
        let codes: HashSet<_> = drawn.iter().map(|c| c.code.clone()).collect();

        assert_eq!(drawn.len(), 10);
        assert_eq!(codes.len(), 10);
    }

    #[test]
    fn test_draw_session_is_capped_by_catalog() {
        let catalog = builtin_catalog()[..5].to_vec();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(draw_session(&catalog, 10, &mut rng).len(), 5);
    }

    #[test]
    fn test_pick_country_skips_excluded() {
        let pool = vec![Country::new("Chad", "TD"), Country::new("Romania", "RO")];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(pick_country(&pool, Some("TD"), &mut rng).code, "RO");
        }
    }

    #[test]
    fn test_build_question_with_exact_catalog() {
        let catalog = builtin_catalog()[..4].to_vec();
        let mut rng = StdRng::seed_from_u64(9);
        let question = build_question(catalog[2].clone(), &catalog, 4, &mut rng);

        let mut codes: Vec<_> = question.options.iter().map(|c| c.code.clone()).collect();
        let mut expected: Vec<_> = catalog.iter().map(|c| c.code.clone()).collect();
        codes.sort();
        expected.sort();
        assert_eq!(codes, expected);
    }
}
