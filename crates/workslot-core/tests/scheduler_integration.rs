//! Integration tests for the full scheduling pipeline.

use chrono::{DateTime, Duration, Utc};
use workslot_core::{
    calculate_capacity_stats, calculate_urgency, generate_default_availability, schedule_tasks,
    AvailabilityBlock, Task, UnscheduledReason, MAX_URGENCY,
};

// Fixed Monday morning reference; weekday blocks land predictably.
fn reference_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-16T08:00:00+00:00")
        .unwrap()
        .with_timezone(&Utc)
}

fn weekday_block(day_offset: i64) -> AvailabilityBlock {
    let day = reference_now() + Duration::days(day_offset);
    AvailabilityBlock::new(
        day.date_naive().and_hms_opt(9, 0, 0).unwrap().and_utc(),
        day.date_naive().and_hms_opt(17, 0, 0).unwrap().and_utc(),
    )
}

#[test]
fn five_even_sessions_for_a_500_minute_task() {
    let now = reference_now();
    let tasks = vec![Task::new("report", 500, now + Duration::days(10)).with_priority(50)];
    let availability = generate_default_availability(now, 14);

    let result = schedule_tasks(&tasks, &availability, now).unwrap();

    // 500 minutes split into 5 x 100; four fit the first 480-minute
    // day, the fifth spills into the next day.
    assert_eq!(result.schedule.len(), 5);
    assert!(result.unscheduled.is_empty());
    for (i, placed) in result.schedule.iter().enumerate() {
        assert_eq!(placed.task_id, "report");
        assert_eq!(placed.assigned_slot.duration_minutes(), 100);
        assert_eq!(placed.session_index, Some(i as u32 + 1));
    }
    for pair in result.schedule[..4].windows(2) {
        assert_eq!(pair[0].assigned_slot.end, pair[1].assigned_slot.start);
    }
    assert_eq!(result.schedule[0].assigned_slot.start, availability[0].start);
    assert_eq!(result.schedule[4].assigned_slot.start, availability[1].start);
}

#[test]
fn capacity_exhaustion_rolls_back_the_second_task() {
    let now = reference_now();
    let tasks = vec![
        Task::new("t1", 300, now + Duration::days(30)).with_priority(90),
        Task::new("t2", 300, now + Duration::days(30)).with_priority(40),
    ];
    let availability = vec![weekday_block(0)];

    let result = schedule_tasks(&tasks, &availability, now).unwrap();

    // t1 takes 300 of the 480 minutes; t2 places one 100-minute session
    // into the remaining 180 and then rolls back.
    assert_eq!(result.schedule.len(), 3);
    assert!(result.schedule.iter().all(|s| s.task_id == "t1"));
    assert_eq!(result.unscheduled.len(), 1);
    assert_eq!(result.unscheduled[0].task_id, "t2");
    assert_eq!(
        result.unscheduled[0].reason,
        UnscheduledReason::InsufficientCapacity
    );

    let stats = calculate_capacity_stats(&availability, &result);
    assert_eq!(stats.total_capacity_minutes, 480);
    assert_eq!(stats.used_capacity_minutes, 300);
    assert!((stats.utilization_rate - 62.5).abs() < 1e-9);
}

#[test]
fn past_deadline_task_scores_max_urgency_but_stays_unscheduled() {
    let now = reference_now();
    let task = Task::new("late", 60, now - Duration::days(1)).with_priority(30);
    assert_eq!(calculate_urgency(&task, now), MAX_URGENCY);

    let availability = vec![weekday_block(1)];
    let result = schedule_tasks(&[task], &availability, now).unwrap();

    assert!(result.schedule.is_empty());
    assert_eq!(result.unscheduled.len(), 1);
    assert_eq!(result.unscheduled[0].reason, UnscheduledReason::NoCapacity);
}

#[test]
fn empty_availability_reports_every_task_no_capacity() {
    let now = reference_now();
    let tasks = vec![
        Task::new("a", 60, now + Duration::days(3)),
        Task::new("b", 240, now + Duration::days(4)),
        Task::new("c", 30, now + Duration::days(5)),
    ];

    let result = schedule_tasks(&tasks, &[], now).unwrap();

    assert!(result.schedule.is_empty());
    assert_eq!(result.unscheduled.len(), 3);
    assert!(result
        .unscheduled
        .iter()
        .all(|u| u.reason == UnscheduledReason::NoCapacity));
}

#[test]
fn urgency_drives_placement_order() {
    let now = reference_now();
    let tasks = vec![
        Task::new("low", 60, now + Duration::days(20)).with_priority(10),
        Task::new("high", 60, now + Duration::days(20)).with_priority(95),
        Task::new("mid", 60, now + Duration::days(20)).with_priority(50),
    ];
    let availability = vec![weekday_block(0)];

    let result = schedule_tasks(&tasks, &availability, now).unwrap();

    assert_eq!(result.schedule.len(), 3);
    assert_eq!(result.schedule[0].task_id, "high");
    assert_eq!(result.schedule[1].task_id, "mid");
    assert_eq!(result.schedule[2].task_id, "low");
    assert!(result.schedule[0].assigned_slot.end <= result.schedule[1].assigned_slot.start);
    assert!(result.schedule[1].assigned_slot.end <= result.schedule[2].assigned_slot.start);
}

#[test]
fn lead_time_buffer_forces_earlier_placement() {
    let now = reference_now();
    let task = Task::new("buffered", 120, now + Duration::days(5))
        .with_priority(50)
        .with_lead_time(2);
    // Caller order puts the late block first; only the buffer rules it out.
    let availability = vec![weekday_block(4), weekday_block(2)];

    let result = schedule_tasks(&[task.clone()], &availability, now).unwrap();
    assert_eq!(result.schedule.len(), 1);
    assert_eq!(result.schedule[0].assigned_slot.start, availability[1].start);

    // Without the buffer the first-listed block wins.
    let unbuffered = Task::new("plain", 120, now + Duration::days(5)).with_priority(50);
    let result = schedule_tasks(&[unbuffered], &availability, now).unwrap();
    assert_eq!(result.schedule[0].assigned_slot.start, availability[0].start);
}

#[test]
fn identical_inputs_produce_identical_results() {
    let now = reference_now();
    let tasks = vec![
        Task::new("a", 300, now + Duration::days(6)).with_priority(60),
        Task::new("b", 45, now + Duration::days(2)).with_priority(60),
        Task::new("c", 500, now + Duration::days(9)).with_priority(10),
        Task::new("d", 45, now + Duration::days(2)).with_priority(60),
    ];
    let availability = generate_default_availability(now, 7);

    let first = schedule_tasks(&tasks, &availability, now).unwrap();
    for _ in 0..3 {
        let again = schedule_tasks(&tasks, &availability, now).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn result_serializes_with_the_published_wire_shape() {
    let now = reference_now();
    let tasks = vec![
        Task::new("split-me", 240, now + Duration::days(8)).with_priority(70),
        Task::new("wont-fit", 300, now - Duration::days(1)).with_priority(20),
    ];
    let availability = vec![weekday_block(0)];

    let result = schedule_tasks(&tasks, &availability, now).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    let schedule = json["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule[0]["taskId"], "split-me");
    assert!(schedule[0]["assignedSlot"]["start"].is_string());
    assert_eq!(schedule[0]["sessionIndex"], 1);

    let unscheduled = json["unscheduled"].as_array().unwrap();
    assert_eq!(unscheduled.len(), 1);
    assert_eq!(unscheduled[0]["taskId"], "wont-fit");
    assert_eq!(unscheduled[0]["reason"], "no_capacity");
}
