use std::rc::Rc;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use quizr::quiz::answer::{AnswerOutcome, check_answer};
use quizr::quiz::dataset::{Dataset, RawQuestion};
use quizr::quiz::navigation::{AutoAdvanceMode, Navigator};

fn build_dataset(sizes: &[usize]) -> Rc<Dataset> {
    let raw = sizes
        .iter()
        .enumerate()
        .map(|(c, &n)| {
            let questions = (0..n)
                .map(|q| RawQuestion {
                    question: format!("c{c}q{q}"),
                    options: vec!["right".to_string(), "wrong".to_string()],
                    answer: "right".to_string(),
                })
                .collect();
            (format!("Chapter {c}"), questions)
        })
        .collect();
    Rc::new(Dataset::from_raw(raw).unwrap())
}

fn navigator(sizes: &[usize], seed: u64) -> Navigator<SmallRng> {
    Navigator::new(build_dataset(sizes), SmallRng::seed_from_u64(seed))
}

fn chapter_sizes() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..12, 1..6)
}

proptest! {
    #[test]
    fn select_question_twice_keeps_chapter(sizes in chapter_sizes(), chapter in 0usize..6, i in 0usize..12, j in 0usize..12) {
        let mut nav = navigator(&sizes, 0);
        let chapter = chapter % sizes.len();
        let name = format!("Chapter {chapter}");
        nav.select_chapter(&name).unwrap();
        let len = sizes[chapter];
        let (i, j) = (i % len, j % len);

        nav.select_question(i).unwrap();
        nav.select_question(j).unwrap();
        prop_assert_eq!(nav.current_chapter_name(), name.as_str());
        prop_assert_eq!(nav.state().question, j);
    }

    #[test]
    fn advance_question_len_times_is_identity(sizes in chapter_sizes(), start in 0usize..12) {
        let mut nav = navigator(&sizes, 0);
        let len = sizes[0];
        nav.select_question(start % len).unwrap();
        let before = nav.state().clone();
        for _ in 0..len {
            nav.advance_question();
        }
        prop_assert_eq!(nav.state(), &before);
    }

    #[test]
    fn retreat_inverts_advance(sizes in chapter_sizes(), start in 0usize..12) {
        let mut nav = navigator(&sizes, 0);
        let len = sizes[0];
        nav.select_question(start % len).unwrap();
        let before = nav.state().clone();

        nav.advance_question();
        nav.retreat_question();
        prop_assert_eq!(nav.state(), &before);

        nav.retreat_question();
        nav.advance_question();
        prop_assert_eq!(nav.state(), &before);
    }

    #[test]
    fn advance_chapter_count_times_is_identity(sizes in chapter_sizes(), start in 0usize..6) {
        let mut nav = navigator(&sizes, 0);
        for _ in 0..(start % sizes.len()) {
            nav.advance_chapter();
        }
        let original = nav.state().chapter;
        for _ in 0..sizes.len() {
            nav.advance_chapter();
            prop_assert_eq!(nav.state().question, 0);
        }
        prop_assert_eq!(nav.state().chapter, original);
    }

    #[test]
    fn answer_check_is_exact_equality(x in ".+", y in ".+") {
        prop_assert_eq!(check_answer(&x, &x), AnswerOutcome::Correct);
        if x != y {
            prop_assert_eq!(check_answer(&x, &y), AnswerOutcome::Incorrect);
        }
    }

    #[test]
    fn random_jumps_stay_in_bounds(sizes in chapter_sizes(), seed in any::<u64>()) {
        let mut nav = navigator(&sizes, seed);
        for _ in 0..50 {
            nav.jump_to_random_question();
            prop_assert!(nav.state().question < sizes[nav.state().chapter]);
            nav.jump_to_random_chapter_and_question();
            prop_assert!(nav.state().chapter < sizes.len());
            prop_assert!(nav.state().question < sizes[nav.state().chapter]);
        }
    }
}

#[test]
fn two_chapter_walkthrough() {
    let dataset = Dataset::from_json(
        r#"{
            "Ch1": [{"question": "Q1", "options": ["A", "B"], "answer": "A"}],
            "Ch2": [{"question": "Q2", "options": ["C", "D"], "answer": "D"}]
        }"#,
    )
    .unwrap();
    let mut nav = Navigator::new(Rc::new(dataset), SmallRng::seed_from_u64(1));

    assert_eq!(nav.current_chapter_name(), "Ch1");
    assert_eq!(nav.state().question, 0);
    nav.advance_chapter();
    assert_eq!(nav.current_chapter_name(), "Ch2");
    assert_eq!(nav.state().question, 0);
    assert_eq!(nav.current_question().answer, "D");
    nav.advance_chapter();
    assert_eq!(nav.current_chapter_name(), "Ch1");
    assert_eq!(nav.state().question, 0);
}

#[test]
fn cycle_mode_three_times_from_off() {
    let mut nav = navigator(&[1], 0);
    for _ in 0..3 {
        nav.cycle_auto_advance_mode();
    }
    assert_eq!(nav.mode(), AutoAdvanceMode::Off);
}

#[test]
fn paris_is_not_paris_lowercase() {
    assert_eq!(check_answer("Paris", "paris"), AnswerOutcome::Incorrect);
}
