//! Digital clock above the search box: `HH:MM:SS` plus a zh-CN long date.

use chrono::{Datelike, Local, NaiveDateTime, Timelike, Weekday};

use crate::ui::ClockSurface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub time: String,
    pub date: String,
}

impl ClockFace {
    pub fn at(moment: &NaiveDateTime) -> Self {
        Self {
            time: format_time(moment),
            date: format_date(moment),
        }
    }
}

pub fn format_time<T: Timelike>(moment: &T) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        moment.hour(),
        moment.minute(),
        moment.second()
    )
}

/// Long date as zh-CN renders it, e.g. `2026年10月19日星期一`.
pub fn format_date<T: Datelike>(moment: &T) -> String {
    format!(
        "{}年{}月{}日{}",
        moment.year(),
        moment.month(),
        moment.day(),
        weekday_name(moment.weekday())
    )
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}

/// Repaints the clock only when the shown second changes.
#[derive(Debug, Default)]
pub struct Clock {
    shown: Option<ClockFace>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Option<&ClockFace> {
        self.shown.as_ref()
    }

    pub fn paint_now<S: ClockSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        self.paint_at(&Local::now().naive_local(), surface)
    }

    pub fn paint_at<S: ClockSurface + ?Sized>(
        &mut self,
        moment: &NaiveDateTime,
        surface: &mut S,
    ) -> bool {
        let face = ClockFace::at(moment);
        if self.shown.as_ref() == Some(&face) {
            return false;
        }
        surface.set_clock(&face.time, &face.date);
        self.shown = Some(face);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::RecordingSurface;
    use chrono::NaiveDate;

    fn moment(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .expect("valid fixture timestamp")
    }

    #[test]
    fn time_is_zero_padded() {
        assert_eq!(format_time(&moment(2026, 1, 5, 7, 3, 9)), "07:03:09");
        assert_eq!(format_time(&moment(2026, 1, 5, 23, 59, 59)), "23:59:59");
    }

    #[test]
    fn date_uses_chinese_long_form_with_weekday() {
        assert_eq!(
            format_date(&moment(2026, 10, 19, 12, 0, 0)),
            "2026年10月19日星期一"
        );
        assert_eq!(format_date(&moment(2024, 3, 3, 0, 0, 0)), "2024年3月3日星期日");
    }

    #[test]
    fn repaints_only_when_the_second_changes() {
        let mut clock = Clock::new();
        let mut surface = RecordingSurface::default();

        assert!(clock.paint_at(&moment(2026, 10, 19, 8, 30, 0), &mut surface));
        assert!(!clock.paint_at(&moment(2026, 10, 19, 8, 30, 0), &mut surface));
        assert!(clock.paint_at(&moment(2026, 10, 19, 8, 30, 1), &mut surface));

        assert_eq!(surface.clock_paints, 2);
        assert_eq!(
            surface.clock,
            Some(("08:30:01".to_string(), "2026年10月19日星期一".to_string()))
        );
        assert_eq!(clock.shown().map(|face| face.time.as_str()), Some("08:30:01"));
    }
}
