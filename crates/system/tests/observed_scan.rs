use turtle_calendar::{CalendarDay, day_count, day_range};
use turtle_system::{
    AnchorSelection, MAX_LUNATIONS, Tradition, TurtleSystemDate, compute_observed,
    lunar_year_start, lunation_starts, observed_year,
};

fn day(y: i32, m: u32, d: u32) -> CalendarDay {
    CalendarDay::new(y, m, d).unwrap()
}

fn anchors() -> Vec<AnchorSelection> {
    let mut anchors: Vec<_> = Tradition::ALL.into_iter().map(AnchorSelection::new).collect();
    anchors.push(AnchorSelection::custom(day(2001, 12, 31)));
    anchors
}

fn scan(anchor: &AnchorSelection) -> Vec<TurtleSystemDate> {
    day_range(day(1995, 1, 1), day(2045, 12, 31))
        .into_iter()
        .map(|d| compute_observed(d, anchor))
        .collect()
}

#[test]
fn every_day_lies_in_its_year() {
    for anchor in anchors() {
        for pos in scan(&anchor) {
            assert!(pos.contains(pos.gregorian_date), "{pos:?}");
            assert!(
                matches!(pos.turtle_year_length, 354 | 355 | 383 | 384),
                "{pos:?}"
            );
            if pos.month_index == Some(MAX_LUNATIONS as u32) {
                assert!(matches!(pos.month_length, Some(6 | 7 | 35 | 36)), "{pos:?}");
            } else {
                assert_eq!(pos.month_length, Some(29), "{pos:?}");
            }
        }
    }
}

#[test]
fn positions_advance_one_day_at_a_time() {
    for anchor in anchors() {
        let positions = scan(&anchor);
        for pair in positions.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.turtle_year_start != prev.turtle_year_start {
                assert_eq!(next.turtle_year_start, prev.turtle_year_end);
                assert_eq!(next.day_of_turtle_year, 1);
                assert_eq!((next.month_index, next.day_index), (Some(1), Some(1)));
            } else if next.month_index != prev.month_index {
                assert_eq!(next.month_index, prev.month_index.map(|m| m + 1));
                assert_eq!(next.day_index, Some(1));
                assert_eq!(prev.day_index, prev.month_length);
            } else {
                assert_eq!(next.day_of_turtle_year, prev.day_of_turtle_year + 1);
                assert_eq!(next.day_index, prev.day_index.map(|d| d + 1));
            }
        }
    }
}

#[test]
fn shell_fields_track_28_day_plates() {
    for anchor in anchors() {
        for pos in scan(&anchor) {
            let day_index = pos.day_index.unwrap();
            assert_eq!(pos.out_of_shell_day, day_index > 28);
            assert_eq!(pos.is_extra_day, pos.out_of_shell_day);
            assert_eq!(pos.shell_day_index.is_none(), pos.out_of_shell_day);
            assert_eq!(pos.extra_day_index, day_index.checked_sub(28).filter(|&n| n > 0));
            assert_eq!(pos.shell_month_index, pos.month_index);
        }
    }
}

#[test]
fn lunation_starts_are_strictly_increasing_and_bounded() {
    for anchor in anchors() {
        let marker = anchor.lunar_marker();
        for year in 1990..2060 {
            let start = lunar_year_start(year, marker);
            let end = lunar_year_start(year + 1, marker).day;
            let starts = lunation_starts(start.day, end);

            assert!(!starts.is_empty() && starts.len() <= MAX_LUNATIONS);
            assert_eq!(starts[0], start.day);
            assert!(starts.windows(2).all(|w| w[0] < w[1]), "{starts:?}");
            assert!(*starts.last().unwrap() < end);
        }
    }
}

#[test]
fn every_lunation_but_the_last_is_29_days() {
    for anchor in anchors() {
        let marker = anchor.lunar_marker();
        for year in 2000..2040 {
            let observed = observed_year(lunar_year_start(year, marker).day, marker);
            let (last, rest) = observed.lunations.split_last().unwrap();
            assert_eq!(observed.lunations.len(), MAX_LUNATIONS);
            assert!(rest.iter().all(|l| l.len_days() == 29), "{observed:?}");
            assert_eq!(last.len_days(), observed.len_days() - 12 * 29);
        }
    }
}

#[test]
fn lunations_cover_the_year() {
    let year = observed_year(day(2026, 6, 1), Tradition::Haudenosaunee.lunar_marker());
    assert_eq!(year.lunations.len(), 13);
    assert_eq!(year.lunations.first().unwrap().start, year.start);
    assert_eq!(year.lunations.last().unwrap().end, year.end);
    let total: i64 = year.lunations.iter().map(|l| l.len_days()).sum();
    assert_eq!(total, day_count(year.start, year.end));
}

#[test]
fn anishinaabe_2026() {
    let anchor = AnchorSelection::new(Tradition::Anishinaabe);

    let pos = compute_observed(day(2026, 3, 1), &anchor);
    assert_eq!(pos.turtle_year_start, day(2026, 2, 17));
    assert_eq!(pos.turtle_year_end, day(2027, 2, 6));
    assert_eq!(pos.turtle_year_length, 354);
    assert_eq!(pos.day_of_turtle_year, 13);
    assert_eq!((pos.month_index, pos.day_index), (Some(1), Some(13)));
    assert_eq!(pos.month_length, Some(29));
    assert!(!pos.out_of_shell_day);

    let third = compute_observed(day(2026, 4, 16), &anchor);
    assert_eq!((third.month_index, third.day_index), (Some(3), Some(1)));

    let before = compute_observed(day(2026, 2, 1), &anchor);
    assert_eq!(before.turtle_year_start, day(2025, 2, 27));
    assert_eq!((before.month_index, before.day_index), (Some(12), Some(21)));
    assert_eq!(before.day_of_turtle_year, 340);
}

#[test]
fn haudenosaunee_thirteenth_moon_runs_past_shell() {
    let anchor = AnchorSelection::new(Tradition::Haudenosaunee);

    let early = compute_observed(day(2026, 1, 20), &anchor);
    assert_eq!(early.turtle_year_start, day(2026, 1, 18));
    assert_eq!((early.month_index, early.day_index), (Some(1), Some(3)));
    assert_eq!(early.month_length, Some(29));

    let first_of_13 = compute_observed(day(2027, 1, 1), &anchor);
    assert_eq!((first_of_13.month_index, first_of_13.day_index), (Some(13), Some(1)));
    assert_eq!(first_of_13.month_length, Some(36));

    let last = compute_observed(day(2027, 2, 5), &anchor);
    assert_eq!((last.month_index, last.day_index), (Some(13), Some(36)));
    assert_eq!(last.shell_month_index, Some(13));
    assert_eq!(last.shell_day_index, None);
    assert_eq!(last.extra_day_index, Some(8));
    assert_eq!(last.day_of_turtle_year, 384);
}
