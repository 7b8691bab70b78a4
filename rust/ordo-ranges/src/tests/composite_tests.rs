use ordered_float::OrderedFloat;

use crate::{
    BoundaryFrom, BoundaryTo, CompositeRange, Range,
    factory::{create, create_exclusive_from, create_exclusive_to, create_keyed, try_create},
};

fn composite(ranges: &[(i32, i32)]) -> CompositeRange<i32> {
    ranges.iter().map(|&(a, b)| try_create(a, b)).collect()
}

fn strings<K: crate::RangeKey>(c: &CompositeRange<i32, K>) -> Vec<String> {
    c.iter().map(|r| r.to_string()).collect()
}

#[test]
fn test_range_union_and_intersect() {
    assert_eq!(
        create(1, 5).unwrap().union(&create(3, 8).unwrap()),
        create(1, 8).unwrap()
    );
    assert_eq!(
        create(1, 5).unwrap().intersect(&create(3, 8).unwrap()),
        create(3, 5).unwrap()
    );
    assert!(create(1, 5).unwrap().intersect(&create(6, 8).unwrap()).is_empty());
}

#[test]
fn test_merge_and_complement() {
    let merged = composite(&[(1, 3), (2, 5), (10, 12)]).merge();
    assert_eq!(strings(&merged), vec!["[1..5]", "[10..12]"]);

    let complement = composite(&[(1, 5), (10, 12)]).complement();
    assert_eq!(complement.len(), 3);
    assert_eq!(
        complement.sub_ranges()[0],
        Range::try_new(BoundaryFrom::Infinite, BoundaryTo::Exclusive(1))
    );
    assert_eq!(
        complement.sub_ranges()[1],
        Range::try_new(BoundaryFrom::Exclusive(5), BoundaryTo::Exclusive(10))
    );
    assert_eq!(
        complement.sub_ranges()[2],
        Range::try_new(BoundaryFrom::Exclusive(12), BoundaryTo::Infinite)
    );
}

#[test]
fn test_get_intersections_contributors() {
    let c = composite(&[(1, 5), (3, 8)]);
    let regions: Vec<_> = c.get_intersections().map(|i| i.into_parts()).collect();
    assert_eq!(
        regions,
        vec![
            (create_exclusive_to(1, 3).unwrap(), vec![create(1, 5).unwrap()]),
            (
                create(3, 5).unwrap(),
                vec![create(1, 5).unwrap(), create(3, 8).unwrap()]
            ),
            (create_exclusive_from(5, 8).unwrap(), vec![create(3, 8).unwrap()]),
        ]
    );
}

#[test]
fn test_construction() {
    let c = CompositeRange::new(vec![
        try_create(10, 12),
        Range::empty(),
        try_create(3, 1),
        try_create(1, 3),
    ]);
    assert_eq!(strings(&c), vec!["[1..3]", "[10..12]"]);
    assert!(c.is_merged());
    assert_eq!(c.containing_range(), &create(1, 12).unwrap());

    let empty = CompositeRange::new(vec![Range::<i32>::empty()]);
    assert!(empty.is_empty());
    assert!(empty.containing_range().is_empty());
    assert_eq!(empty.to_string(), "∅");

    // Overlapping sub-ranges are kept until merged.
    let c = composite(&[(1, 10), (2, 3)]);
    assert!(!c.is_merged());
    assert_eq!(c.len(), 2);
    assert_eq!(c.containing_range(), &create(1, 10).unwrap());
    assert_eq!(c.to_string(), "[1..10]: { [1..10]; [2..3] }");
}

#[test]
fn test_membership() {
    let c = composite(&[(1, 10), (2, 3), (20, 25)]);
    assert!(c.contains(&1));
    assert!(c.contains(&25));
    assert!(!c.contains(&15));
    assert!(!c.contains(&0));

    assert!(c.contains_range(&create(4, 10).unwrap()));
    assert!(!c.contains_range(&create(4, 21).unwrap()));
    assert!(c.contains_range(&Range::<i32>::empty()));

    assert!(c.has_intersection(&create(10, 15).unwrap()));
    assert!(!c.has_intersection(&create_exclusive_from(10, 15).unwrap()));
    assert!(!c.has_intersection(&Range::<i32>::empty()));
}

#[test]
fn test_adjoining_coverage() {
    let c = CompositeRange::new(vec![
        create_exclusive_to(1, 5).unwrap(),
        create(5, 8).unwrap(),
    ]);
    assert!(!c.is_merged());
    assert!(c.contains_range(&create(2, 7).unwrap()));
    assert_eq!(strings(&c.merge()), vec!["[1..8]"]);
}

#[test]
fn test_extend_and_trim() {
    let c = composite(&[(1, 3), (1, 5), (4, 9), (7, 9)]);

    let extended = c.extend_from(BoundaryFrom::Inclusive(0));
    assert_eq!(strings(&extended), vec!["[0..3]", "[0..5]", "[4..9]", "[7..9]"]);
    assert_eq!(c.extend_from(BoundaryFrom::Inclusive(2)), c);

    let extended = c.extend_to(BoundaryTo::Infinite);
    assert_eq!(strings(&extended), vec!["[1..3]", "[1..5]", "[4..+∞)", "[7..+∞)"]);
    assert_eq!(extended.containing_range().to(), &BoundaryTo::Infinite);

    let trimmed = c.trim_from(BoundaryFrom::Exclusive(3));
    assert_eq!(strings(&trimmed), vec!["(3..5]", "[4..9]", "[7..9]"]);

    let trimmed = c.trim_to(BoundaryTo::Exclusive(7));
    assert_eq!(strings(&trimmed), vec!["[1..3]", "[1..5]", "[4..7)"]);

    assert!(c.trim_to(BoundaryTo::Exclusive(1)).is_empty());
}

#[test]
fn test_keyed_composite() {
    let c = CompositeRange::new(vec![
        create_keyed(5, 9, "b").unwrap(),
        create_keyed(1, 6, "a").unwrap(),
    ]);
    assert_eq!(strings(&c), vec!["'a':[1..6]", "'b':[5..9]"]);
    assert_eq!(c.to_string(), "[1..9]: { 'a':[1..6]; 'b':[5..9] }");

    let merged = c.merge();
    assert_eq!(strings(&merged), vec!["[1..9]"]);

    let unkeyed = c.without_keys();
    assert_eq!(strings(&unkeyed), vec!["[1..6]", "[5..9]"]);
    assert_eq!(unkeyed.merge(), merged);

    assert_eq!(c.get_intersection(&5).ranges().len(), 2);
    let from_one: CompositeRange<i32, &str> = create_keyed(1, 2, "x").unwrap().into();
    assert_eq!(from_one.sub_ranges()[0].key(), &"x");
}

#[test]
fn test_cheap_clone() {
    let c = composite(&[(1, 3), (5, 8)]);
    let copy = c.clone();
    assert!(std::ptr::eq(c.sub_ranges(), copy.sub_ranges()));
    let merged = c.union(&CompositeRange::empty());
    assert!(std::ptr::eq(c.sub_ranges(), merged.sub_ranges()));
}

#[test]
fn test_float_domain() {
    let f = OrderedFloat;
    let c: CompositeRange<OrderedFloat<f64>> = vec![
        create(f(0.5), f(1.5)).unwrap(),
        create_exclusive_from(f(1.5), f(2.25)).unwrap(),
        create(f(3.0), f(4.0)).unwrap(),
    ]
    .into_iter()
    .collect();

    let merged = c.merge();
    assert_eq!(merged.len(), 2);
    assert!(merged.contains(&f(2.0)));
    assert!(!merged.contains(&f(2.5)));

    let complement = merged.complement();
    assert_eq!(
        complement.sub_ranges()[1],
        Range::try_new(BoundaryFrom::Exclusive(f(2.25)), BoundaryTo::Exclusive(f(3.0)))
    );
    assert_eq!(
        create(f(0.5), f(1.25)).unwrap().clamp(f(7.0)).unwrap(),
        f(1.25)
    );
    assert_eq!(merged.to_string(), "[0.5..4]: { [0.5..2.25]; [3..4] }");
}
