extern crate rand;

use crate::problem::{Problem, ProblemKey, Submission};
use rand::{seq::SliceRandom, Rng};
use std::collections::HashSet;

/// Unrated problems are never inside a band.
pub fn in_band(problems: Vec<Problem>, min: i32, max: i32) -> Vec<Problem> {
    problems
        .into_iter()
        .filter(|p| matches!(p.rating, Some(r) if min <= r && r <= max))
        .collect()
}

/// Keys of problems with at least one accepted submission.
#[derive(Debug, Default, Clone)]
pub struct SolvedSet(HashSet<ProblemKey>);

impl SolvedSet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn extend<'a, I: IntoIterator<Item = &'a Submission>>(&mut self, submissions: I) {
        self.0.extend(
            submissions
                .into_iter()
                .filter(|s| s.accepted())
                .map(|s| s.problem.key()),
        );
    }
    pub fn contains(&self, key: &ProblemKey) -> bool {
        self.0.contains(key)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn unsolved(problems: Vec<Problem>, solved: &SolvedSet) -> Vec<Problem> {
    problems
        .into_iter()
        .filter(|p| !solved.contains(&p.key()))
        .collect()
}

/// Uniform shuffle, then keep at most `count`.
pub fn pick<T, R: Rng + ?Sized>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items.truncate(count);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn problem(contest: u32, index: &str, rating: Option<i32>) -> Problem {
        Problem {
            contest_id: Some(contest),
            index: index.to_string(),
            name: format!("Problem {}{}", contest, index),
            rating,
            tags: vec!["implementation".to_string()],
        }
    }
    fn submission(id: u64, contest: u32, index: &str, verdict: Option<&str>) -> Submission {
        Submission {
            id,
            problem: problem(contest, index, None),
            verdict: verdict.map(String::from),
        }
    }

    #[test]
    fn band_is_inclusive_and_drops_unrated() {
        let got = in_band(
            vec![
                problem(1, "A", Some(1100)),
                problem(1, "B", Some(1200)),
                problem(1, "C", Some(1300)),
                problem(1, "D", Some(1400)),
                problem(1, "E", Some(1500)),
                problem(1, "F", None),
            ],
            1200,
            1400,
        );
        let idx: Vec<&str> = got.iter().map(|p| p.index.as_str()).collect();
        assert_eq!(idx, vec!["B", "C", "D"]);
    }

    #[test]
    fn solved_set_counts_accepted_only_once() {
        let mut solved = SolvedSet::new();
        solved.extend(&[
            submission(1, 4, "A", Some("OK")),
            submission(2, 4, "A", Some("OK")),
            submission(3, 5, "B", Some("WRONG_ANSWER")),
            submission(4, 6, "C", None),
        ]);
        assert_eq!(solved.len(), 1);
        assert!(solved.contains(&problem(4, "A", None).key()));
        assert!(!solved.contains(&problem(5, "B", None).key()));
    }

    #[test]
    fn unsolved_never_returns_solved() {
        let mut solved = SolvedSet::new();
        solved.extend(&[
            submission(1, 10, "A", Some("OK")),
            submission(2, 11, "B", Some("OK")),
        ]);
        let problems = vec![
            problem(10, "A", Some(800)),
            problem(10, "B", Some(800)),
            problem(11, "B", Some(900)),
            problem(1, "1B", Some(900)),
        ];
        let left = unsolved(problems, &solved);
        assert!(left.iter().all(|p| !solved.contains(&p.key())));
        assert_eq!(left.len(), 2);
    }

    #[test]
    fn key_does_not_collide_on_concatenation() {
        let mut solved = SolvedSet::new();
        solved.extend(&[submission(1, 11, "A", Some("OK"))]);
        assert!(!solved.contains(&problem(1, "1A", None).key()));
    }

    #[test]
    fn pick_keeps_multiset_and_truncates() {
        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<u32> = (0..20).collect();
        let mut all = pick(items.clone(), 100, &mut rng);
        all.sort_unstable();
        assert_eq!(all, items);

        let some = pick(items.clone(), 5, &mut rng);
        assert_eq!(some.len(), 5);
        let unique: HashSet<u32> = some.iter().copied().collect();
        assert_eq!(unique.len(), 5);
        assert!(some.iter().all(|x| items.contains(x)));

        assert!(pick(items, 0, &mut rng).is_empty());
    }
}
