//! Property tests for the scheduling invariants.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use workslot_core::{schedule_tasks, AvailabilityBlock, Task};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 16, 8, 0, 0).unwrap()
}

fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    proptest::collection::vec((1u32..=600, 0i64..=20, 0u8..=100, 0u8..=5), 0..8).prop_map(
        |fields| {
            fields
                .into_iter()
                .enumerate()
                .map(|(i, (estimate, due_in_days, priority, lead))| {
                    Task::new(
                        format!("task-{i}"),
                        estimate,
                        base_time() + Duration::days(due_in_days),
                    )
                    .with_priority(priority)
                    .with_lead_time(lead)
                })
                .collect()
        },
    )
}

// One block per day keeps the generated blocks chronological and
// non-overlapping, so interval containment is unambiguous.
fn arb_availability() -> impl Strategy<Value = Vec<AvailabilityBlock>> {
    proptest::collection::vec((0i64..=13, 1i64..=10), 0..6).prop_map(|mut days| {
        days.sort();
        days.dedup_by_key(|day| day.0);
        days.into_iter()
            .map(|(day, hours)| {
                let start = base_time() + Duration::days(day) + Duration::hours(1);
                AvailabilityBlock::new(start, start + Duration::hours(hours))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn every_task_is_scheduled_xor_unscheduled(
        tasks in arb_tasks(),
        availability in arb_availability(),
    ) {
        let result = schedule_tasks(&tasks, &availability, base_time()).unwrap();

        for task in &tasks {
            let in_schedule = result.schedule.iter().any(|s| s.task_id == task.id);
            let in_unscheduled = result.unscheduled.iter().any(|u| u.task_id == task.id);
            prop_assert!(
                in_schedule ^ in_unscheduled,
                "task {} must appear on exactly one side",
                task.id
            );
        }

        let known: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        for placed in &result.schedule {
            prop_assert!(known.contains(placed.task_id.as_str()));
        }
        for entry in &result.unscheduled {
            prop_assert!(known.contains(entry.task_id.as_str()));
        }
    }

    #[test]
    fn assigned_intervals_stay_inside_blocks_without_overlap(
        tasks in arb_tasks(),
        availability in arb_availability(),
    ) {
        let result = schedule_tasks(&tasks, &availability, base_time()).unwrap();

        for placed in &result.schedule {
            let slot = &placed.assigned_slot;
            prop_assert!(slot.end > slot.start);
            let container = availability
                .iter()
                .find(|block| slot.start >= block.start && slot.end <= block.end);
            prop_assert!(container.is_some(), "interval escapes every block");
        }

        for block in &availability {
            let mut intervals: Vec<_> = result
                .schedule
                .iter()
                .map(|placed| &placed.assigned_slot)
                .filter(|slot| slot.start >= block.start && slot.end <= block.end)
                .collect();
            intervals.sort_by_key(|slot| slot.start);

            for pair in intervals.windows(2) {
                prop_assert!(pair[0].end <= pair[1].start, "overlapping intervals in one block");
            }

            let used: i64 = intervals.iter().map(|slot| slot.duration_minutes()).sum();
            prop_assert!(used <= block.duration_minutes());
        }
    }

    #[test]
    fn scheduled_sessions_account_for_the_full_estimate(
        tasks in arb_tasks(),
        availability in arb_availability(),
    ) {
        let result = schedule_tasks(&tasks, &availability, base_time()).unwrap();

        let mut assigned_minutes: HashMap<&str, i64> = HashMap::new();
        for placed in &result.schedule {
            *assigned_minutes.entry(placed.task_id.as_str()).or_insert(0) +=
                placed.assigned_slot.duration_minutes();
        }

        for (task_id, minutes) in assigned_minutes {
            let task = tasks.iter().find(|t| t.id == task_id).unwrap();
            prop_assert_eq!(minutes, i64::from(task.estimated_minutes));
        }
    }

    #[test]
    fn every_assigned_start_respects_the_effective_deadline(
        tasks in arb_tasks(),
        availability in arb_availability(),
    ) {
        let result = schedule_tasks(&tasks, &availability, base_time()).unwrap();

        let by_id: HashMap<&str, &Task> = tasks.iter().map(|t| (t.id.as_str(), t)).collect();
        for placed in &result.schedule {
            let task = by_id[placed.task_id.as_str()];
            prop_assert!(
                placed.assigned_slot.start <= task.effective_deadline(),
                "session for {} starts after its effective deadline",
                task.id
            );
        }
    }

    #[test]
    fn scheduling_is_deterministic(
        tasks in arb_tasks(),
        availability in arb_availability(),
    ) {
        let first = schedule_tasks(&tasks, &availability, base_time()).unwrap();
        let second = schedule_tasks(&tasks, &availability, base_time()).unwrap();
        prop_assert_eq!(first, second);
    }
}
