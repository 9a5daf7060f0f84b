//! Cover resolution over a rank-sorted sample of records, lists, and one
//! minimal tagged value.

use passrank_core::{
    order::{
        FULL_RANK_COVER, IndexCover, RankCover, assert_rank_sorted, index_cover, pass_style_cover,
        pass_style_cover_named,
    },
    passable::{PassStyle, Passable, canonical_rank},
};

fn txt(s: &str) -> Passable {
    Passable::text(s)
}

fn rec(entries: &[(&str, Passable)]) -> Passable {
    Passable::record(
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect(),
    )
    .expect("record fixture should normalize")
}

fn list(items: &[&str]) -> Passable {
    Passable::from_slice(&items.iter().map(|s| txt(s)).collect::<Vec<_>>())
}

fn range_sample() -> Vec<Passable> {
    vec![
        rec(&[("bar", Passable::Null)]),                     // 0
        rec(&[]),                                            // 1
        rec(&[("bar", Passable::Null), ("foo", txt("x"))]),  // 2
        rec(&[("foo", txt("x"))]),                           // 3
        rec(&[("bar", txt("y")), ("foo", txt("x"))]),        // 4
        rec(&[("bar", txt("y")), ("foo", txt("x"))]),        // 5
        rec(&[("bar", txt("y")), ("foo", txt("x"))]),        // 6
        rec(&[("bar", Passable::Undefined)]),                // 7
        rec(&[("bar", Passable::Undefined), ("foo", txt("x"))]), // 8
        list(&["a"]),                                        // 9
        list(&["a", "b"]),                                   // 10
        list(&["a", "x"]),                                   // 11
        list(&["y", "x"]),                                   // 12
        Passable::tagged("", Passable::Null),                // 13
    ]
}

#[test]
fn range_queries() {
    let sample = range_sample();
    assert_rank_sorted(&sample).expect("range sample must be rank-sorted");

    let queries: Vec<(RankCover, IndexCover)> = vec![
        // no list starts with "c"
        (
            RankCover::between(list(&["c"]), list(&["c"])),
            IndexCover::EMPTY,
        ),
        // every list extending ["a"], up to the undefined sentinel
        (
            RankCover::between(
                list(&["a"]),
                Passable::from_slice(&[txt("a"), Passable::Undefined]),
            ),
            IndexCover::new(9, 11),
        ),
        // strict extensions only: second slot bounded below by null
        (
            RankCover::between(
                Passable::from_slice(&[txt("a"), Passable::Null]),
                Passable::from_slice(&[txt("a"), Passable::Undefined]),
            ),
            IndexCover::new(10, 11),
        ),
        (FULL_RANK_COVER, IndexCover::new(0, 13)),
        // no strings at all
        (
            pass_style_cover_named("Text").expect("known category"),
            IndexCover::EMPTY,
        ),
        (
            pass_style_cover_named("Record").expect("known category"),
            IndexCover::new(0, 8),
        ),
        (
            pass_style_cover_named("List").expect("known category"),
            IndexCover::new(9, 12),
        ),
        // no remotables at all
        (
            pass_style_cover_named("Remotable").expect("known category"),
            IndexCover::EMPTY,
        ),
    ];

    for (cover, want) in queries {
        let got = index_cover(&sample, &cover);
        assert_eq!(got, want, "cover {cover:?} resolved to {got:?}");
        assert_eq!(got.is_empty(), want.is_empty());
    }
}

#[test]
fn style_cover_never_excludes_a_matching_element() {
    let sample = range_sample();

    for style in [PassStyle::Record, PassStyle::List, PassStyle::Tagged] {
        let resolved = index_cover(&sample, &pass_style_cover(style));
        for (i, el) in sample.iter().enumerate() {
            if el.pass_style() == style {
                assert!(
                    resolved.start <= i && i <= resolved.end,
                    "index {i} escaped the {style} cover {resolved:?}"
                );
            }
        }
    }
}

#[test]
fn full_cover_spans_any_sorted_sequence() {
    let sample = range_sample();

    for n in 1..=sample.len() {
        let prefix = &sample[..n];
        let resolved = index_cover(prefix, &FULL_RANK_COVER);
        assert_eq!(resolved, IndexCover::new(0, n - 1));
    }
}

/// Every style cover resolves against a universe holding at least one value
/// of each category; distinct bands partition the sequence and the three
/// opaque wrapper styles share one span.
#[test]
fn style_covers_partition_a_universe_sample() {
    let universe = vec![
        Passable::Null,
        Passable::Bool(false),
        Passable::Bool(true),
        Passable::number(-1.5),
        Passable::number(f64::NAN),
        Passable::bigint(9i64),
        txt("a"),
        Passable::symbol("a"),
        rec(&[("a", txt("b"))]),
        list(&["a"]),
        Passable::tagged("t", Passable::Null),
        Passable::remotable(1, "alice"),
        Passable::error("broken"),
        Passable::promise(1),
        Passable::meta_tagged("m", Passable::Null),
        Passable::Undefined,
    ];
    assert_rank_sorted(&universe).expect("universe must be rank-sorted");

    let mut spans: Vec<(u8, IndexCover)> = Vec::new();
    for style in PassStyle::ALL {
        let band = canonical_rank(style);
        let resolved = index_cover(&universe, &pass_style_cover(style));

        if let Some((prev_band, prev)) = spans.last() {
            if *prev_band == band {
                assert_eq!(*prev, resolved, "shared band {band} must share its span");
                continue;
            }
        }
        spans.push((band, resolved));
    }

    let mut next_start = 0;
    for (band, span) in &spans {
        assert!(!span.is_empty(), "band {band} must match the universe");
        assert_eq!(span.start, next_start, "gap or overlap before band {band}");
        next_start = span.end + 1;
    }
    assert_eq!(next_start, universe.len());
}

#[test]
fn resolution_tolerates_boundary_keys_that_match_no_value() {
    let sample = range_sample();

    // the bound need not be the rank of any element
    let cover = RankCover::between(rec(&[("zzz", Passable::Null)]), list(&["a", "m"]));
    let resolved = index_cover(&sample, &cover);

    // {zzz: null} ties with {} via absence-as-null, so the span opens at the
    // first record and closes before ["a", "x"]
    assert_eq!(resolved, IndexCover::new(0, 10));
}
