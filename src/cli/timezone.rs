//! Timezone converter commands.

use dk_app::Notice;
use dk_core::error::ToolResult;
use dk_core::timezone::{convert_str, current_time_in, parse_zone, COMMON_TIMEZONES};
use dk_core::{ToolError, ToolKind};

use super::input::finish;
use super::{AppContext, Report, TimezoneAction};

pub fn run(action: TimezoneAction, ctx: &AppContext) -> ToolResult<Report> {
    match action {
        TimezoneAction::Convert {
            datetime,
            from,
            to,
            copy,
        } => {
            if datetime.trim().is_empty() {
                return Err(ToolError::EmptyInput);
            }
            let converted = convert_str(&datetime, &from, &to)?;
            let copy = copy.then_some((converted.as_str(), "Converted time"));
            Ok(finish(
                Report::line(converted.clone()),
                ctx,
                ToolKind::Timezone,
                copy,
                Notice::success(
                    "Conversion successful",
                    format!("Time converted from {from} to {to}"),
                ),
            ))
        }
        TimezoneAction::List => Ok(Report::new(
            COMMON_TIMEZONES
                .iter()
                .map(|zone| format!("{:<20} {:<34} {}", zone.id, zone.label, zone.offset))
                .collect(),
        )),
        TimezoneAction::Now { zones } => {
            let now = ctx.deps.clock.now();
            let ids: Vec<String> = if zones.is_empty() {
                COMMON_TIMEZONES.iter().map(|z| z.id.to_string()).collect()
            } else {
                zones
            };

            let mut lines = Vec::with_capacity(ids.len());
            for id in ids {
                let zone = parse_zone(&id)?;
                lines.push(format!("{:<20} {}", id, current_time_in(zone, now)));
            }
            Ok(Report::new(lines))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::context;

    #[test]
    fn converts_between_zones() {
        let (ctx, _fakes) = context();
        let report = run(
            TimezoneAction::Convert {
                datetime: "2024-01-15T12:00".to_string(),
                from: "UTC".to_string(),
                to: "America/New_York".to_string(),
                copy: false,
            },
            &ctx,
        )
        .unwrap();

        assert_eq!(report.lines, vec!["2024-01-15 07:00:00 EST".to_string()]);
        assert_eq!(
            report.notice.unwrap().description,
            "Time converted from UTC to America/New_York"
        );
    }

    #[test]
    fn unknown_zone_is_invalid_format() {
        let (ctx, _fakes) = context();
        let result = run(
            TimezoneAction::Convert {
                datetime: "2024-01-15T12:00".to_string(),
                from: "Mars/Olympus".to_string(),
                to: "UTC".to_string(),
                copy: false,
            },
            &ctx,
        );
        assert!(matches!(result, Err(ToolError::InvalidFormat(_))));
    }

    #[test]
    fn now_uses_the_clock() {
        let (ctx, _fakes) = context();
        let report = run(
            TimezoneAction::Now {
                zones: vec!["Asia/Tokyo".to_string()],
            },
            &ctx,
        )
        .unwrap();
        // The test clock sits at 2023-11-14T22:13:20Z.
        assert_eq!(report.lines, vec![format!("{:<20} 07:13:20", "Asia/Tokyo")]);
    }

    #[test]
    fn list_has_every_common_zone() {
        let (ctx, _fakes) = context();
        let report = run(TimezoneAction::List, &ctx).unwrap();
        assert_eq!(report.lines.len(), COMMON_TIMEZONES.len());
    }
}
