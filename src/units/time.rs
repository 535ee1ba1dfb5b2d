use serde::{Deserialize, Serialize};

use super::LinearUnit;

/// 시간 단위. 내부 기준은 초이다. 월/년은 그레고리력 평균 길이를 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Millisecond,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl LinearUnit for TimeUnit {
    const ALL: &'static [Self] = &[
        TimeUnit::Second,
        TimeUnit::Millisecond,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    fn id(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TimeUnit::Second => "Seconds (s)",
            TimeUnit::Millisecond => "Milliseconds (ms)",
            TimeUnit::Minute => "Minutes (min)",
            TimeUnit::Hour => "Hours (hr)",
            TimeUnit::Day => "Days",
            TimeUnit::Week => "Weeks",
            TimeUnit::Month => "Months (avg)",
            TimeUnit::Year => "Years",
        }
    }

    fn factor_to_base(self) -> f64 {
        match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Millisecond => 0.001,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3600.0,
            TimeUnit::Day => 86_400.0,
            TimeUnit::Week => 604_800.0,
            // 365.2425일 / 12
            TimeUnit::Month => 2_629_746.0,
            TimeUnit::Year => 31_556_952.0,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "second" | "seconds" | "s" | "sec" => Some(TimeUnit::Second),
            "millisecond" | "milliseconds" | "ms" => Some(TimeUnit::Millisecond),
            "minute" | "minutes" | "min" => Some(TimeUnit::Minute),
            "hour" | "hours" | "h" | "hr" => Some(TimeUnit::Hour),
            "day" | "days" | "d" => Some(TimeUnit::Day),
            "week" | "weeks" | "wk" => Some(TimeUnit::Week),
            "month" | "months" | "mo" => Some(TimeUnit::Month),
            "year" | "years" | "yr" | "y" => Some(TimeUnit::Year),
            _ => None,
        }
    }
}
