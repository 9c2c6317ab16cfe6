use turtle_calendar::{CalendarDay, day_range};
use turtle_system::{AnchorSelection, Tradition, TurtleSystemDate, compute_teaching};

fn day(y: i32, m: u32, d: u32) -> CalendarDay {
    CalendarDay::new(y, m, d).unwrap()
}

fn anchors() -> Vec<AnchorSelection> {
    let mut anchors: Vec<_> = Tradition::ALL.into_iter().map(AnchorSelection::new).collect();
    anchors.push(AnchorSelection::custom(day(2010, 10, 31)));
    anchors.push(AnchorSelection::custom(day(2012, 2, 29)));
    anchors
}

fn scan(anchor: &AnchorSelection) -> Vec<TurtleSystemDate> {
    day_range(day(1998, 1, 1), day(2032, 12, 31))
        .into_iter()
        .map(|d| compute_teaching(d, anchor))
        .collect()
}

#[test]
fn every_day_lies_in_its_year() {
    for anchor in anchors() {
        for pos in scan(&anchor) {
            assert!(pos.contains(pos.gregorian_date), "{pos:?}");
            assert!(matches!(pos.turtle_year_length, 365 | 366), "{pos:?}");
        }
    }
}

#[test]
fn exactly_one_of_plate_or_extra() {
    for anchor in anchors() {
        for pos in scan(&anchor) {
            let on_plate = pos.month_index.is_some() && pos.day_index.is_some();
            assert_ne!(on_plate, pos.is_extra_day, "{pos:?}");
            assert_eq!(pos.is_extra_day, pos.out_of_shell_day);
            assert_eq!(pos.is_extra_day, pos.extra_day_index.is_some());
        }
    }
}

#[test]
fn day_of_year_advances_and_wraps_at_year_start() {
    for anchor in anchors() {
        let positions = scan(&anchor);
        for pair in positions.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.turtle_year_start == prev.turtle_year_start {
                assert_eq!(next.day_of_turtle_year, prev.day_of_turtle_year + 1);
            } else {
                assert_eq!(next.day_of_turtle_year, 1);
                assert_eq!(next.turtle_year_start, prev.turtle_year_end);
                assert!(prev.is_extra_day, "year must close on an extra day: {prev:?}");
            }
        }
    }
}

#[test]
fn extra_days_follow_month_13_day_28() {
    let anchor = AnchorSelection::new(Tradition::Haudenosaunee);
    let last = compute_teaching(day(2027, 1, 13), &anchor);
    assert_eq!((last.month_index, last.day_index), (Some(13), Some(28)));

    let extra = compute_teaching(day(2027, 1, 13).succ(), &anchor);
    assert_eq!(extra.extra_day_index, Some(1));
    assert_eq!(extra.turtle_year_start, day(2026, 1, 15));
}

#[test]
fn custom_anchor_on_feb_29_rolls_to_march_first() {
    let anchor = AnchorSelection::custom(day(2012, 2, 29));
    let pos = compute_teaching(day(2027, 3, 1), &anchor);
    assert_eq!(pos.turtle_year_start, day(2027, 3, 1));
    assert_eq!(pos.day_of_turtle_year, 1);

    let leap = compute_teaching(day(2028, 2, 29), &anchor);
    assert_eq!(leap.turtle_year_start, day(2028, 2, 29));
}
