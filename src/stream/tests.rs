use quickcheck::{quickcheck, TestResult};

use crate::stream::{filter, map, reduce, Filter, Map, Slice, Stream};

fn drain<S: Stream>(stream: &mut S) -> Vec<S::Item> {
    let mut got = vec![];
    while stream.next() {
        got.push(stream.value());
    }
    got
}

fn is_even(n: &i64) -> bool {
    n % 2 == 0
}

fn halve(n: i64) -> i64 {
    n / 2
}

macro_rules! replay_after_reset {
    ($name:ident, $build:expr) => {
        #[test]
        fn $name() {
            fn p(xs: Vec<i64>, pulls: usize) -> bool {
                let build = $build;
                let mut stream = build(xs.clone());
                let first = drain(&mut stream);

                stream.reset();
                let second = drain(&mut stream);

                // A partial run followed by a reset must not leak state.
                stream.reset();
                for _ in 0..pulls % (xs.len() + 1) {
                    stream.next();
                }
                stream.reset();
                let third = drain(&mut stream);

                let fresh = drain(&mut build(xs));
                first == second && second == third && third == fresh
            }
            quickcheck(p as fn(Vec<i64>, usize) -> bool);
        }
    };
}

replay_after_reset!(replay_slice, |xs: Vec<i64>| Slice::new(xs));
replay_after_reset!(replay_map, |xs: Vec<i64>| Map::new(xs, halve));
replay_after_reset!(replay_filter, |xs: Vec<i64>| Filter::new(xs, is_even));
replay_after_reset!(replay_filter_of_map, |xs: Vec<i64>| {
    Filter::new(Map::new(xs, halve), is_even)
});
replay_after_reset!(replay_map_of_filter, |xs: Vec<i64>| {
    Map::new(Filter::new(xs, is_even), halve)
});
replay_after_reset!(replay_filter_of_filter, |xs: Vec<i64>| {
    Filter::new(Filter::new(xs, is_even), |n: &i64| *n > 0)
});
replay_after_reset!(replay_map_of_map, |xs: Vec<i64>| {
    Map::new(Map::new(xs, halve), |n: i64| n.wrapping_mul(3))
});

#[test]
fn prop_collect_matches_drain() {
    fn p(xs: Vec<i64>) -> bool {
        let mut stream = Map::new(Filter::new(xs, is_even), halve);
        let collected = stream.collect();
        collected == drain(&mut stream)
    }
    quickcheck(p as fn(Vec<i64>) -> bool);
}

#[test]
fn prop_collect_is_idempotent_and_pure() {
    fn p(xs: Vec<i64>, pulls: usize) -> TestResult {
        if xs.is_empty() {
            return TestResult::discard();
        }
        let mut touched = Filter::new(Map::new(xs.clone(), halve), is_even);
        let mut sibling = Filter::new(Map::new(xs, halve), is_even);

        let pulls = pulls % 4;
        for _ in 0..pulls {
            touched.next();
            sibling.next();
        }
        let once = touched.collect();
        let twice = touched.collect();
        if once != twice {
            return TestResult::failed();
        }
        // The full sequence, regardless of how far the cursor moved.
        let full: Vec<i64> =
            sibling.source().collect().into_iter().filter(is_even).collect();
        if once != full {
            return TestResult::failed();
        }
        TestResult::from_bool(drain(&mut touched) == drain(&mut sibling))
    }
    quickcheck(p as fn(Vec<i64>, usize) -> TestResult);
}

#[test]
fn prop_shortcuts_match_std() {
    fn p(xs: Vec<i64>) -> bool {
        let mapped = map(&xs, halve);
        let filtered = filter(&xs, is_even);
        let summed = reduce(&xs, |acc: i64, n: i64| acc.wrapping_add(n));

        mapped == xs.iter().cloned().map(halve).collect::<Vec<_>>()
            && filtered == xs.iter().cloned().filter(is_even).collect::<Vec<_>>()
            && summed == xs.iter().fold(0i64, |acc, &n| acc.wrapping_add(n))
    }
    quickcheck(p as fn(Vec<i64>) -> bool);
}

#[test]
fn prop_filter_of_map_is_sequential() {
    fn p(xs: Vec<i64>) -> bool {
        let staged = Filter::new(Map::new(xs.clone(), halve), is_even).collect();
        staged == filter(&map(&xs, halve), is_even)
    }
    quickcheck(p as fn(Vec<i64>) -> bool);
}

#[test]
fn prop_exhausted_stays_exhausted() {
    fn p(xs: Vec<i64>, extra: u8) -> bool {
        let mut stream = Filter::new(xs, is_even);
        let all = drain(&mut stream);
        let last = stream.value();
        (0..extra % 8).all(|_| !stream.next() && stream.value() == last)
            && last == all.last().cloned().unwrap_or_default()
    }
    quickcheck(p as fn(Vec<i64>, u8) -> bool);
}

#[test]
fn nested_filter_words() {
    let words = vec!["hey", "train", "trample", "after", "say"];
    let mut stream = Filter::new(
        Filter::new(words, |w: &&str| w.len() > 3),
        |w: &&str| w.starts_with("tr"),
    );
    assert_eq!(stream.collect(), vec!["train", "trample"]);
    assert_eq!(drain(&mut stream), vec!["train", "trample"]);
    stream.reset();
    assert_eq!(stream.value(), "");
    assert_eq!(drain(&mut stream), vec!["train", "trample"]);
}

#[test]
fn collect_after_partial_pull_is_full() {
    let mut stream = Map::new(vec![1, 2, 3, 4], |n: i32| n + 1);
    assert!(stream.next());
    assert!(stream.next());
    assert_eq!(stream.collect(), vec![2, 3, 4, 5]);
    assert!(stream.next());
    assert_eq!(stream.value(), 4);
}

#[test]
fn iter_bridge() {
    let mut stream = Slice::new(vec![1, 2, 3]).filter(|n: &i32| *n != 2);
    let doubled: Vec<i32> = stream.iter().map(|n| n * 2).collect();
    assert_eq!(doubled, vec![2, 6]);
    assert!(!stream.next());

    stream.reset();
    assert_eq!(stream.iter().count(), 2);
}

#[test]
fn trait_adapters() {
    let mut stream = Slice::new(vec!["a", "bb", "ccc"])
        .map(|s: &str| s.len())
        .filter(|n: &usize| *n > 1);
    assert_eq!(stream.collect(), vec![2, 3]);
    assert_eq!(drain(&mut stream), vec![2, 3]);
}
