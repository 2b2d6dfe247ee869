use probability_rs::probability::{
    DefaultRandom, ProbabilityCollection, ProbabilityError, ProbabilityMap, RandomSource,
    SharedRandom, WeightedCollection,
};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use test_env_log::test;

const DRAWS: usize = 100_000;

fn frequencies<C>(collection: &mut C, draws: usize) -> HashMap<&'static str, f64>
where
    C: WeightedCollection<Element = &'static str>,
{
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for _ in 0..draws {
        *counts.entry(*collection.get().unwrap()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(element, count)| (element, count as f64 / draws as f64))
        .collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "observed {:.4}, expected {:.4}",
        actual,
        expected
    );
}

#[test]
fn test_equal_weights_converge() {
    let mut collection = ProbabilityCollection::with_seed(42);
    for element in ["a", "b", "c", "d"] {
        collection.add(element, 7).unwrap();
    }
    let observed = frequencies(&mut collection, DRAWS);
    for element in ["a", "b", "c", "d"] {
        assert_close(observed[element], 0.25);
    }
}

#[test]
fn test_unequal_weights_converge() {
    let mut collection = ProbabilityCollection::with_seed(7);
    collection.add("rare", 1).unwrap();
    collection.add("common", 9).unwrap();
    let observed = frequencies(&mut collection, DRAWS);
    assert_close(observed["rare"], 0.1);
    assert_close(observed["common"], 0.9);
}

#[test]
fn test_map_weights_converge() {
    let mut map = ProbabilityMap::with_seed(9);
    map.add("one", 1).unwrap();
    map.add("two", 2).unwrap();
    map.add("three", 3).unwrap();
    let observed = frequencies(&mut map, DRAWS);
    assert_close(observed["one"], 1.0 / 6.0);
    assert_close(observed["two"], 2.0 / 6.0);
    assert_close(observed["three"], 3.0 / 6.0);
}

///
/// Two collections with the same seed and the same operations draw the same sequence
///
#[test]
fn test_same_seed_same_draws() {
    let build = || {
        let mut collection = ProbabilityCollection::with_seed(1234);
        collection.add("a", 3).unwrap();
        collection.add("b", 1).unwrap();
        collection.add("c", 6).unwrap();
        collection.remove(&"b");
        collection.add("d", 2).unwrap();
        collection
    };
    let mut first = build();
    let mut second = build();
    let first_draws: Vec<&str> = (0..1000).map(|_| *first.get().unwrap()).collect();
    let second_draws: Vec<&str> = (0..1000).map(|_| *second.get().unwrap()).collect();
    assert_eq!(first_draws, second_draws);
}

///
/// Given the same draw, the linear walk and the binary search pick the same element
///
#[test]
fn test_backings_pick_same_block() {
    let draw = Rc::new(Cell::new(0));
    let collection_draw = draw.clone();
    let map_draw = draw.clone();
    let mut collection = ProbabilityCollection::with_random(move |_: u64| -> u64 {
        collection_draw.get()
    });
    let mut map = ProbabilityMap::with_random(move |_: u64| -> u64 { map_draw.get() });

    for (element, weight) in [("p", 4), ("q", 1), ("r", 2), ("p", 3), ("s", 5)] {
        collection.add(element, weight).unwrap();
        map.add(element, weight).unwrap();
    }
    assert_eq!(collection.total_probability(), 15);
    assert_eq!(map.total_probability(), 15);

    for value in 0..15 {
        draw.set(value);
        assert_eq!(collection.get(), map.get(), "draw {}", value);
    }
    draw.set(15);
    assert!(matches!(
        collection.get(),
        Err(ProbabilityError::InconsistentDraw { draw: 15, total: 15 })
    ));
    assert!(matches!(
        map.get(),
        Err(ProbabilityError::InconsistentDraw { draw: 15, total: 15 })
    ));
}

#[test]
fn test_remove_all_then_get_fails() {
    let mut map = ProbabilityMap::with_seed(5);
    map.add("only", 1).unwrap();
    map.add("only", 2).unwrap();
    map.add("only", 3).unwrap();
    assert_eq!(map.total_probability(), 6);
    assert!(map.remove(&"only"));
    assert_eq!(map.total_probability(), 0);
    assert_eq!(map.get(), Err(ProbabilityError::EmptyCollection));
}

#[test]
fn test_shared_stream_across_collections() {
    let shared = SharedRandom::new(DefaultRandom::seeded(77));
    let mut left = ProbabilityCollection::with_random(shared.clone());
    let mut right = ProbabilityCollection::with_random(shared);
    left.add("l", 1).unwrap();
    right.add("r", 1).unwrap();
    right.add("rr", 1).unwrap();

    // Both draws advance one stream: replay it on a private source
    let mut replay = DefaultRandom::seeded(77);
    let _ = replay.next_below(1);
    let expected = if replay.next_below(2) == 0 { "r" } else { "rr" };

    assert_eq!(left.get(), Ok(&"l"));
    assert_eq!(right.get(), Ok(&expected));
}

#[test]
fn test_owned_elements() {
    let mut collection = ProbabilityCollection::with_seed(3);
    collection.add(String::from("owned"), 2).unwrap();
    collection.add(String::from("other"), 2).unwrap();
    assert!(collection.contains(&"owned".to_string()));
    assert!(collection.remove(&"owned".to_string()));
    assert_eq!(collection.get().map(String::as_str), Ok("other"));
}
