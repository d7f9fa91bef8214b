use chrono::{DateTime, TimeZone};

/// File name of a report generated at `now`
pub fn report_filename<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("report_{}.pdf", now.format("%Y-%m-%d_%H-%M-%S"))
}
