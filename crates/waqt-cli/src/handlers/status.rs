use super::HandlerContext;
use crate::presentation::presenters::present_timeline;
use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use waqt_runtime::{Clock, FixedClock, SystemClock};

pub fn handle(ctx: &HandlerContext, at: Option<&str>) -> Result<()> {
    let now = match at {
        Some(raw) => parse_instant(raw, &ctx.tz)?,
        None => SystemClock.now(),
    };
    log::debug!("Evaluating status at {}", now);

    let mut controller = ctx.controller(FixedClock::new(now));
    let frame = controller.frame()?;
    ctx.render(present_timeline(&frame, ctx.config.ring_radius))
}

/// RFC 3339, or a local `YYYY-MM-DDTHH:MM[:SS]` in the operating timezone
pub fn parse_instant(raw: &str, tz: &Tz) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }

    let local = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| {
            anyhow!(
                "Invalid instant '{}': expected RFC 3339 or YYYY-MM-DDTHH:MM",
                raw
            )
        })?;

    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("{} does not exist in {}", raw, tz.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::London;

    #[test]
    fn test_parse_local_and_rfc3339() {
        let local = parse_instant("2024-06-01T14:00", &London).unwrap();
        let explicit = parse_instant("2024-06-01T13:00:00Z", &London).unwrap();
        assert_eq!(local, explicit);
    }

    #[test]
    fn test_parse_spring_forward_gap() {
        let err = parse_instant("2024-03-31T01:30", &London).unwrap_err();
        assert_eq!(err.to_string(), "2024-03-31T01:30 does not exist in Europe/London");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_instant("tomorrow", &London).is_err());
    }
}
