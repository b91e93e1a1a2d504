//! The incremental monthly aggregation driver.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

use crate::calculation::{HolidayCalendar, fingerprint};
use crate::config::{EngineConfig, WorkRules};
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, StatsKey, StatsPeriod};
use crate::store::{StatsStore, UpsertOutcome};

use super::accumulator::MonthlyAccumulator;
use super::{AggregationSummary, RunOptions};

/// Shared, read-only inputs of every group worker.
struct GroupContext {
    store: Arc<dyn StatsStore>,
    rules: WorkRules,
    calendar: HolidayCalendar,
}

/// What happened to one employee's group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupOutcome {
    Unchanged,
    Written(UpsertOutcome),
}

/// Keeps per-employee monthly statistics in step with raw attendance.
///
/// The engine is stateless between runs; the only cross-run state is the
/// fingerprint stored on each `MonthlyStats` document.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use attendance_engine::aggregation::AggregationEngine;
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::{AttendanceRecord, StatsPeriod};
/// use attendance_engine::store::InMemoryStatsStore;
/// use chrono::NaiveDate;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let engine = AggregationEngine::new(Arc::new(InMemoryStatsStore::new()), &EngineConfig::default());
/// let period = StatsPeriod::new(2026, 3).unwrap();
/// let records = vec![
///     AttendanceRecord::new("EMP001", NaiveDate::from_ymd_opt(2026, 3, 3).unwrap())
///         .with_times("09:00", "18:00"),
/// ];
///
/// let first = engine.run_aggregation(records.clone(), period).await;
/// assert_eq!(first.inserted, 1);
///
/// let second = engine.run_aggregation(records, period).await;
/// assert_eq!(second.unchanged, 1);
/// # });
/// ```
#[derive(Clone)]
pub struct AggregationEngine {
    context: Arc<GroupContext>,
    max_concurrent_groups: usize,
}

impl AggregationEngine {
    /// Creates an engine writing to `store` with the rules in `config`.
    pub fn new(store: Arc<dyn StatsStore>, config: &EngineConfig) -> Self {
        Self {
            context: Arc::new(GroupContext {
                store,
                rules: config.work_rules().clone(),
                calendar: HolidayCalendar::from_config(config),
            }),
            max_concurrent_groups: config.aggregation().max_concurrent_groups.max(1),
        }
    }

    /// Returns the store the engine reads and writes.
    pub fn store(&self) -> &Arc<dyn StatsStore> {
        &self.context.store
    }

    /// Aggregates a batch of records for one month, recomputing only the
    /// employees whose records changed since the last run.
    pub async fn run_aggregation(
        &self,
        records: impl IntoIterator<Item = AttendanceRecord>,
        period: StatsPeriod,
    ) -> AggregationSummary {
        self.run_aggregation_with(records, period, RunOptions::default())
            .await
    }

    /// Aggregates a batch of records with explicit run options.
    ///
    /// Records missing an employee id or date are skipped and counted as
    /// errors. A failure while processing one employee is logged, counted,
    /// and never stops the other employees.
    pub async fn run_aggregation_with(
        &self,
        records: impl IntoIterator<Item = AttendanceRecord>,
        period: StatsPeriod,
        options: RunOptions,
    ) -> AggregationSummary {
        let start_time = Instant::now();
        let mut summary = AggregationSummary::default();

        let mut groups: BTreeMap<String, Vec<AttendanceRecord>> = BTreeMap::new();
        for mut record in records {
            if let Err(err) = record.validate() {
                warn!(
                    employee_id = %record.employee_id,
                    period = %period,
                    error = %err,
                    "Skipping malformed attendance record"
                );
                summary.errors += 1;
                continue;
            }
            // Surrounding whitespace is not part of the id
            let employee_id = record.employee_id.trim().to_string();
            record.employee_id.clone_from(&employee_id);
            groups.entry(employee_id).or_default().push(record);
        }

        let employee_count = groups.len();
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_groups));
        let mut handles = Vec::with_capacity(employee_count);

        for (employee_id, group) in groups {
            let context = Arc::clone(&self.context);
            let semaphore = Arc::clone(&semaphore);
            let key = StatsKey::new(employee_id.clone(), period);
            let force = options.force;

            let handle = tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.map_err(|e| {
                    EngineError::AggregationError {
                        employee_id: key.employee_id.clone(),
                        message: e.to_string(),
                    }
                })?;
                aggregate_group(&context, key, group, force).await
            });
            handles.push((employee_id, handle));
        }

        for (employee_id, handle) in handles {
            let result = handle.await.unwrap_or_else(|join_error| {
                Err(EngineError::AggregationError {
                    employee_id: employee_id.clone(),
                    message: join_error.to_string(),
                })
            });

            match result {
                Ok(GroupOutcome::Unchanged) => summary.unchanged += 1,
                Ok(GroupOutcome::Written(UpsertOutcome::Inserted)) => summary.inserted += 1,
                Ok(GroupOutcome::Written(UpsertOutcome::Updated)) => summary.updated += 1,
                Err(err) => {
                    error!(
                        employee_id = %employee_id,
                        period = %period,
                        error = %err,
                        "Monthly aggregation failed"
                    );
                    summary.errors += 1;
                }
            }
        }

        info!(
            period = %period,
            employees = employee_count,
            inserted = summary.inserted,
            updated = summary.updated,
            unchanged = summary.unchanged,
            errors = summary.errors,
            forced = options.force,
            duration_us = start_time.elapsed().as_micros(),
            "Monthly aggregation completed"
        );

        summary
    }
}

/// Recomputes and stores one employee's month unless its fingerprint is unchanged.
async fn aggregate_group(
    context: &GroupContext,
    key: StatsKey,
    mut records: Vec<AttendanceRecord>,
    force: bool,
) -> EngineResult<GroupOutcome> {
    records.sort_by(|a, b| {
        (a.date, a.check_in_str(), a.check_out_str()).cmp(&(
            b.date,
            b.check_in_str(),
            b.check_out_str(),
        ))
    });

    let current = fingerprint(&records);
    let existing = context.store.find_one(&key).await?;

    if !force
        && existing
            .as_ref()
            .is_some_and(|stats| current.matches(&stats.attendance_hash))
    {
        debug!(employee_id = %key.employee_id, hash = %current, "Attendance unchanged, skipping");
        return Ok(GroupOutcome::Unchanged);
    }

    let mut accumulator = MonthlyAccumulator::new();
    for record in &records {
        let is_holiday = record
            .date
            .is_some_and(|date| context.calendar.is_holiday(date));
        accumulator.add(record, is_holiday, &context.rules);
    }

    let stats = accumulator.finish(key.clone(), &current, records.len(), Utc::now());
    let outcome = context.store.upsert(&key, stats).await?;

    debug!(
        employee_id = %key.employee_id,
        hash = %current,
        records = records.len(),
        outcome = ?outcome,
        "Monthly statistics recomputed"
    );

    Ok(GroupOutcome::Written(outcome))
}
