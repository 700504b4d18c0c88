use crate::config::Config;
use crate::core::matrix::build_chart;
use crate::core::pairing::PairingIndex;
use crate::core::roster::normalize;
use crate::errors::{AppError, AppResult};
use crate::export::{SheetSink, plan};
use crate::models::StarChart;
use crate::notion::DataSource;
use crate::ui::messages::alert;
use chrono::{DateTime, FixedOffset, Utc};
use tracing::debug;

/// High-level "update the chart" run.
pub struct ChartLogic;

impl ChartLogic {
    /// Refuse to touch any sheet other than the configured one.
    pub fn check_sheet(cfg: &Config, sheet_name: &str) -> AppResult<()> {
        if sheet_name == cfg.sheet.name {
            return Ok(());
        }

        alert(format!("シート「{}」で実行してください", cfg.sheet.name));
        Err(AppError::WrongSheet {
            expected: cfg.sheet.name.clone(),
            actual: sheet_name.to_string(),
        })
    }

    /// Fetch both datasets and compute the chart, without rendering it.
    pub fn compute(source: &dyn DataSource) -> AppResult<StarChart> {
        let events = source.fetch_events()?;
        let members = source.fetch_members()?;

        let roster = normalize(members);
        let index = PairingIndex::build(&events);
        debug!(
            events = events.len(),
            pairs = index.len(),
            roster = roster.len(),
            "building star chart"
        );

        Ok(build_chart(roster, &index))
    }

    /// Guard, fetch, build and render into `sink`.
    ///
    /// Nothing is fetched or written when the sheet guard fails. A fetch error
    /// aborts before the sheet is cleared.
    pub fn update<S: SheetSink + ?Sized>(
        cfg: &Config,
        source: &dyn DataSource,
        sink: &mut S,
        now: &DateTime<FixedOffset>,
    ) -> AppResult<StarChart> {
        Self::check_sheet(cfg, sink.sheet_name())?;

        let chart = Self::compute(source)?;

        sink.clear()?;
        for write in plan(&chart, cfg, now) {
            sink.write(&write)?;
        }
        sink.finish()?;

        Ok(chart)
    }

    /// Current time in the configured offset.
    pub fn now(cfg: &Config) -> AppResult<DateTime<FixedOffset>> {
        let hours = cfg.sheet.utc_offset_hours;
        let offset = hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                AppError::Config(format!("sheet.utc_offset_hours out of range: {hours}"))
            })?;
        Ok(Utc::now().with_timezone(&offset))
    }
}
