#![allow(missing_docs)]
//! Randomized properties over the public surface.

use jsonlens::{Resolved, parse};
use quickcheck::{Arbitrary, Gen, QuickCheck};
use quickcheck_macros::quickcheck;
use serde_json::{Map, Value, json};

/// A JSON document with a bounded shape: depth at most two, containers of
/// at most three entries. Enough to cover every tag and nesting case
/// without making runs crawl.
#[derive(Clone, Debug)]
struct Doc(Value);

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = usize::arbitrary(g) % 3;
        Doc(gen_value(g, depth))
    }
}

fn gen_value(g: &mut Gen, depth: usize) -> Value {
    let kinds = if depth == 0 { 4 } else { 6 };
    match usize::arbitrary(g) % kinds {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => gen_number(g),
        3 => Value::String(small_string(g)),
        4 => Value::Array(
            (0..usize::arbitrary(g) % 4)
                .map(|_| gen_value(g, depth - 1))
                .collect(),
        ),
        _ => {
            let mut map = Map::new();
            for _ in 0..usize::arbitrary(g) % 4 {
                map.insert(small_string(g), gen_value(g, depth - 1));
            }
            Value::Object(map)
        }
    }
}

fn gen_number(g: &mut Gen) -> Value {
    match usize::arbitrary(g) % 3 {
        0 => json!(i64::arbitrary(g)),
        1 => json!(u64::arbitrary(g)),
        _ => {
            let mut f = f64::arbitrary(g);
            if !f.is_finite() {
                f = 0.5;
            }
            json!(f)
        }
    }
}

fn small_string(g: &mut Gen) -> String {
    (0..usize::arbitrary(g) % 3)
        .map(|_| char::arbitrary(g))
        .collect()
}

fn within_bounds(value: &Value, depth_left: usize) -> bool {
    match value {
        Value::Array(items) => {
            depth_left > 0
                && items.len() <= 3
                && items.iter().all(|item| within_bounds(item, depth_left - 1))
        }
        Value::Object(map) => {
            depth_left > 0
                && map.len() <= 3
                && map.values().all(|member| within_bounds(member, depth_left - 1))
        }
        _ => true,
    }
}

#[test]
fn generated_documents_stay_bounded() {
    let mut g = Gen::new(64);
    for _ in 0..256 {
        let Doc(value) = Doc::arbitrary(&mut g);
        assert!(within_bounds(&value, 2), "generator escaped its bounds: {value}");
    }
}

#[test]
fn root_kind_matches_the_parsed_document() {
    fn prop(doc: Doc) -> bool {
        let root = parse(doc.0.to_string()).unwrap();
        match (&doc.0, &root) {
            (Value::Null, Resolved::Null)
            | (Value::Bool(_), Resolved::Bool(_))
            | (
                Value::Number(_),
                Resolved::Int64(_) | Resolved::UInt64(_) | Resolved::Double(_),
            )
            | (Value::String(_), Resolved::String(_))
            | (Value::Array(_), Resolved::Array(_))
            | (Value::Object(_), Resolved::Object(_)) => true,
            _ => false,
        }
    }
    QuickCheck::new().tests(500).quickcheck(prop as fn(Doc) -> bool);
}

#[test]
fn materialized_snapshots_round_trip() {
    fn prop(doc: Doc) -> bool {
        match parse(doc.0.to_string()).unwrap() {
            Resolved::Object(obj) => Value::Object(obj.to_map()) == doc.0,
            Resolved::Array(arr) => Value::Array(arr.to_vec()) == doc.0,
            // Scalars materialized on resolution; nothing further to check.
            _ => true,
        }
    }
    QuickCheck::new().tests(500).quickcheck(prop as fn(Doc) -> bool);
}

#[quickcheck]
fn view_equality_is_reflexive_across_parses(doc: Doc) -> bool {
    let text = doc.0.to_string();
    parse(&text).unwrap() == parse(&text).unwrap()
}

#[quickcheck]
fn negative_and_positive_indices_agree(values: Vec<i64>) -> bool {
    if values.is_empty() {
        return true;
    }
    let text = serde_json::to_string(&values).unwrap();
    let Resolved::Array(arr) = parse(&text).unwrap() else {
        return false;
    };
    let len = isize::try_from(values.len()).unwrap();
    (0..len).all(|i| arr.get(i).unwrap() == arr.get(i - len).unwrap())
}

#[quickcheck]
fn count_agrees_with_a_naive_scan(values: Vec<i64>, needle: i64) -> bool {
    let text = serde_json::to_string(&values).unwrap();
    let Resolved::Array(arr) = parse(&text).unwrap() else {
        return false;
    };
    let expected = values.iter().filter(|&&v| v == needle).count();
    arr.count(needle) == expected
}

#[quickcheck]
fn index_of_returns_the_first_occurrence(values: Vec<i64>, needle: i64) -> bool {
    let text = serde_json::to_string(&values).unwrap();
    let Resolved::Array(arr) = parse(&text).unwrap() else {
        return false;
    };
    match values.iter().position(|&v| v == needle) {
        Some(expected) => arr.index_of(needle).ok() == Some(expected),
        None => arr.index_of(needle).is_err(),
    }
}
