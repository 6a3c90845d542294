//! Vertical ordering from `layoutAbove` hints.

use crate::model::timeline::{Event, EventId};
use std::cmp::Ordering;

/// Pairwise comparison on direct `layoutAbove` links only, no transitivity.
fn compare(events: &[Event], a: EventId, b: EventId) -> Ordering {
    if events[a.index()].layout_above.contains(&b) {
        Ordering::Less
    } else if events[b.index()].layout_above.contains(&a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Stable insertion sort of `ids` by direct `layoutAbove` links.
///
/// Each event is moved in front of the earliest preceding event it is directly
/// above, without crossing an event it is directly below. Unrelated events keep
/// their relative input order. The comparison is not a total order, so this
/// does not go through `slice::sort_by`, which may panic on inconsistent
/// comparators.
pub(crate) fn sort_events(events: &[Event], ids: &mut [EventId]) {
    for i in 1..ids.len() {
        let current = ids[i];
        let mut target = i;
        for j in (0..i).rev() {
            match compare(events, current, ids[j]) {
                Ordering::Less => target = j,
                Ordering::Greater => break,
                Ordering::Equal => {}
            }
        }
        ids[target..=i].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::sort_events;
    use crate::model::timeline::{Event, EventId};

    fn events(labels: &[&str]) -> Vec<Event> {
        labels.iter().map(|label| Event::new(*label, None)).collect()
    }

    #[test]
    fn direct_hint_moves_event_up() {
        let mut arena = events(&["a", "b", "c"]);
        arena[2].layout_above.insert(EventId(0));
        let mut ids = vec![EventId(0), EventId(1), EventId(2)];

        sort_events(&arena, &mut ids);

        assert_eq!(ids, vec![EventId(2), EventId(0), EventId(1)]);
    }

    #[test]
    fn chained_hints_are_not_closed_transitively() {
        // a above b, b above c, input order c, x, a.
        let mut arena = events(&["a", "b", "c", "x"]);
        arena[0].layout_above.insert(EventId(1));
        arena[1].layout_above.insert(EventId(2));
        let mut ids = vec![EventId(2), EventId(3), EventId(0)];

        sort_events(&arena, &mut ids);

        // a and c are unrelated without closure, so input order stays.
        assert_eq!(ids, vec![EventId(2), EventId(3), EventId(0)]);
    }

    #[test]
    fn hint_never_crosses_an_event_below_it() {
        // x above b, b above a.
        let mut arena = events(&["a", "b", "c", "x"]);
        arena[1].layout_above.insert(EventId(0));
        arena[3].layout_above.insert(EventId(1));
        let mut ids = vec![EventId(3), EventId(0), EventId(1)];

        sort_events(&arena, &mut ids);

        assert_eq!(ids, vec![EventId(3), EventId(1), EventId(0)]);
    }
}
