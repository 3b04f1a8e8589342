//! Property-based tests for question generation.

use std::collections::HashSet;

use flag_quiz::builtin_catalog;
use flag_quiz::game::generator::{build_question, draw_session, pick_country};
use flag_quiz::{Game, GameConfig, GameMode};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn options_are_unique_and_contain_answer_once(
        seed in any::<u64>(),
        catalog_len in 2usize..60,
        options_seed in any::<usize>(),
        target_seed in any::<usize>(),
    ) {
        let catalog = builtin_catalog()[..catalog_len].to_vec();
        let options = 2 + options_seed % (catalog_len - 1);
        let correct = catalog[target_seed % catalog_len].clone();
        let mut rng = StdRng::seed_from_u64(seed);

        let question = build_question(correct.clone(), &catalog, options, &mut rng);

        prop_assert_eq!(question.options.len(), options);
        let codes: HashSet<_> = question.options.iter().map(|c| c.code.as_str()).collect();
        prop_assert_eq!(codes.len(), options);
        let hits = question.options.iter().filter(|c| c.same_as(&correct)).count();
        prop_assert_eq!(hits, 1);
        prop_assert_eq!(question.correct_answer, correct);
    }

    #[test]
    fn pick_country_never_returns_excluded(seed in any::<u64>(), exclude in 0usize..60) {
        let catalog = builtin_catalog();
        let excluded = catalog[exclude % catalog.len()].code.clone();
        let mut rng = StdRng::seed_from_u64(seed);

        let picked = pick_country(&catalog, Some(&excluded), &mut rng);
        prop_assert_ne!(picked.code, excluded);
    }

    #[test]
    fn classic_session_draws_without_replacement(seed in any::<u64>(), count in 1usize..80) {
        let catalog = builtin_catalog();
        let mut rng = StdRng::seed_from_u64(seed);

        let drawn = draw_session(&catalog, count, &mut rng);
        let codes: HashSet<_> = drawn.iter().map(|c| c.code.as_str()).collect();
        prop_assert_eq!(drawn.len(), count.min(catalog.len()));
        prop_assert_eq!(codes.len(), drawn.len());
    }

    #[test]
    fn survival_questions_never_repeat_back_to_back(seed in any::<u64>(), rounds in 1usize..40) {
        let config = GameConfig {
            seed: Some(seed),
            ..GameConfig::new(GameMode::Survival)
        };
        let mut game = Game::new(config, builtin_catalog()[..5].to_vec()).unwrap();

        let mut previous = game.question().correct_answer.code.clone();
        for _ in 0..rounds {
            let answer = game.question().correct_answer.clone();
            game.submit_answer(&answer);
            game.next_question();

            let current = game.question().correct_answer.code.clone();
            prop_assert_ne!(&current, &previous);
            previous = current;
        }
    }
}
