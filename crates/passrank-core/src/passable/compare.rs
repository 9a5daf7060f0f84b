use crate::passable::{Passable, canonical_rank, pass_style_of};
use std::cmp::Ordering;

/// Absent record keys read as null during comparison; the key is never
/// materialized.
const ABSENT: &Passable = &Passable::Null;

/// One deferred unit of comparison work.
///
/// `Len` entries sit below the element pairs that were pushed for the same
/// composite, so a length tie-break only applies once the shared prefix has
/// compared equal.
enum Task<'a> {
    Cmp(&'a Passable, &'a Passable),
    Len(usize, usize),
}

/// Total canonical rank comparator over passable values.
///
/// Ordering rules:
/// 1. Canonical category band
/// 2. Category-specific comparison for same-banded values
///
/// Identity-only values (remotables, errors, promises, meta-tagged wrappers)
/// tie within their band; equal rank does not imply equal value.
///
/// Descent into records, lists, and tagged payloads runs on an explicit work
/// stack rather than native recursion, so adversarially deep nesting from
/// untrusted contract data cannot exhaust the call stack.
#[must_use]
pub fn compare_rank(left: &Passable, right: &Passable) -> Ordering {
    let mut tasks = vec![Task::Cmp(left, right)];

    while let Some(task) = tasks.pop() {
        let decided = match task {
            Task::Len(left_len, right_len) => left_len.cmp(&right_len),
            Task::Cmp(a, b) => {
                let band = canonical_rank(pass_style_of(a)).cmp(&canonical_rank(pass_style_of(b)));
                if band == Ordering::Equal {
                    compare_same_band(a, b, &mut tasks)
                } else {
                    band
                }
            }
        };

        if decided != Ordering::Equal {
            return decided;
        }
    }

    Ordering::Equal
}

// Leaf comparisons resolve immediately; composites defer children onto the
// work stack and report Equal for now.
fn compare_same_band<'a>(
    left: &'a Passable,
    right: &'a Passable,
    tasks: &mut Vec<Task<'a>>,
) -> Ordering {
    match (left, right) {
        (Passable::Bool(a), Passable::Bool(b)) => a.cmp(b),
        (Passable::Number(a), Passable::Number(b)) => a.cmp(b),
        (Passable::BigInt(a), Passable::BigInt(b)) => a.cmp(b),
        (Passable::Text(a), Passable::Text(b)) => cmp_text_utf16(a, b),
        (Passable::Symbol(a), Passable::Symbol(b)) => cmp_text_utf16(a.rank_key(), b.rank_key()),
        (Passable::Record(a), Passable::Record(b)) => {
            push_record_tasks(a, b, tasks);
            Ordering::Equal
        }
        (Passable::List(a), Passable::List(b)) => {
            push_list_tasks(a, b, tasks);
            Ordering::Equal
        }
        (Passable::Tagged(a), Passable::Tagged(b)) => {
            let tag = cmp_text_utf16(a.tag(), b.tag());
            if tag == Ordering::Equal {
                tasks.push(Task::Cmp(a.payload(), b.payload()));
            }
            tag
        }
        // Null/Undefined singletons, remotables, and the opaque wrapper
        // styles (which share a band across kinds) all tie here.
        _ => Ordering::Equal,
    }
}

// Lexicographic element order, then length; pairs are pushed in reverse so
// the first element is compared first.
fn push_list_tasks<'a>(left: &'a [Passable], right: &'a [Passable], tasks: &mut Vec<Task<'a>>) {
    tasks.push(Task::Len(left.len(), right.len()));
    for (l, r) in left.iter().zip(right).rev() {
        tasks.push(Task::Cmp(l, r));
    }
}

// Merge the two canonically sorted key sequences; at each union key compare
// the value on each side, a side missing the key contributing null. The
// first difference wins; an exhausted union means the records tie.
fn push_record_tasks<'a>(
    left: &'a [(String, Passable)],
    right: &'a [(String, Passable)],
    tasks: &mut Vec<Task<'a>>,
) {
    let mut merged: Vec<(&'a Passable, &'a Passable)> =
        Vec::with_capacity(left.len().max(right.len()));
    let mut li = 0;
    let mut ri = 0;

    while li < left.len() && ri < right.len() {
        match cmp_text_utf16(&left[li].0, &right[ri].0) {
            Ordering::Less => {
                merged.push((&left[li].1, ABSENT));
                li += 1;
            }
            Ordering::Greater => {
                merged.push((ABSENT, &right[ri].1));
                ri += 1;
            }
            Ordering::Equal => {
                merged.push((&left[li].1, &right[ri].1));
                li += 1;
                ri += 1;
            }
        }
    }
    while li < left.len() {
        merged.push((&left[li].1, ABSENT));
        li += 1;
    }
    while ri < right.len() {
        merged.push((ABSENT, &right[ri].1));
        ri += 1;
    }

    for (l, r) in merged.into_iter().rev() {
        tasks.push(Task::Cmp(l, r));
    }
}

/// Lexicographic comparison by UTF-16 code units.
///
/// Rust's native `str` order is Unicode-scalar order, which ranks
/// supplementary-plane text above U+E000..U+FFFF; the canonical order here is
/// code-unit order, where surrogate pairs sort below them.
#[must_use]
pub(crate) fn cmp_text_utf16(left: &str, right: &str) -> Ordering {
    left.encode_utf16().cmp(right.encode_utf16())
}
