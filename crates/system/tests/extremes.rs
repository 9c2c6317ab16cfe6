use chrono::NaiveDate;
use turtle_calendar::{CalendarDay, normalize};
use turtle_system::{AnchorSelection, CalendarModel, Tradition, compute_turtle_date};

fn anchors() -> Vec<AnchorSelection> {
    let mut anchors: Vec<_> = Tradition::ALL.into_iter().map(AnchorSelection::new).collect();
    anchors.push(AnchorSelection::custom(CalendarDay::new(2000, 12, 31).unwrap()));
    anchors.push(AnchorSelection::custom(CalendarDay::new(2000, 2, 29).unwrap()));
    anchors
}

#[test]
fn chrono_extremes_map_into_a_turtle_year() {
    for date in [NaiveDate::MAX, NaiveDate::MIN] {
        let day = normalize(date);
        for anchor in anchors() {
            for model in CalendarModel::ALL {
                let pos = compute_turtle_date(date, model, &anchor);
                assert_eq!(pos.gregorian_date, day);
                assert!(pos.contains(day), "{pos:?}");
                assert!(pos.day_of_turtle_year >= 1);
            }
        }
    }
}

#[test]
fn supported_bounds_map_into_a_turtle_year() {
    for day in [CalendarDay::earliest(), CalendarDay::latest()] {
        for anchor in anchors() {
            for model in CalendarModel::ALL {
                let pos = compute_turtle_date(day, model, &anchor);
                assert!(pos.contains(day), "{pos:?}");
            }
        }
    }
}
