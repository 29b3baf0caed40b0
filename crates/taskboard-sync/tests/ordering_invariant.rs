//! Integration tests: the ordering invariant survives long sequences of
//! status changes.

use chrono::{Duration, NaiveDate};
use taskboard_models::{TaskRow, TaskStatus, ALL_STATUSES};
use taskboard_sync::{
    FixedClock, RowRepository, SyncConfig, TaskList, TaskListSynchronizer, WARN_DUE_TODAY_DAYS,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

/// Small deterministic generator so sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

/// Builds a server-rendered list that already satisfies the invariant.
fn rendered_list() -> TaskList {
    let offsets: [Option<i64>; 8] = [
        Some(-4),
        Some(-1),
        Some(0),
        Some(0),
        Some(2),
        Some(7),
        None,
        None,
    ];

    let mut rows: Vec<TaskRow> = offsets
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            let row = TaskRow::new(format!("t{}", i), format!("Task {}", i), TaskStatus::Pending);
            match offset {
                Some(days) => row.with_due_date(today() + Duration::days(*days)),
                None => row,
            }
        })
        .collect();

    let mut done = TaskRow::new("done", "Finished", TaskStatus::Completed);
    done = done.with_due_date(today() - Duration::days(10));
    rows.push(done);

    TaskList::from_rows(rows)
}

#[test]
fn test_invariant_holds_for_random_sequences() {
    for seed in 1..=25u64 {
        let mut rng = Lcg(seed);
        let mut list = rendered_list();
        assert!(list.is_well_ordered());

        let sync = TaskListSynchronizer::with_clock(SyncConfig::default(), FixedClock(today()));

        for step in 0..60 {
            let ids = list.row_ids();
            let id = ids[rng.below(ids.len())].clone();
            let status = ALL_STATUSES[rng.below(ALL_STATUSES.len())];

            sync.apply(&mut list, &id, status, status.default_label())
                .unwrap();

            assert!(
                list.is_well_ordered(),
                "seed {} step {}: {:?}",
                seed,
                step,
                list.row_ids()
            );
            assert_eq!(list.len(), 9);
        }
    }
}

#[test]
fn test_completion_order_is_preserved() {
    let mut list = rendered_list();
    let sync = TaskListSynchronizer::with_clock(SyncConfig::default(), FixedClock(today()));

    for id in ["t5", "t0", "t6"] {
        sync.apply(&mut list, &id.into(), TaskStatus::Completed, "Completed")
            .unwrap();
    }

    let completed: Vec<String> = list
        .rows()
        .iter()
        .filter(|r| r.is_completed())
        .map(|r| r.id.to_string())
        .collect();
    assert_eq!(completed, vec!["done", "t5", "t0", "t6"]);
}

#[test]
fn test_every_row_has_consistent_visual_state() {
    let config = SyncConfig::default().with_warning_threshold_days(WARN_DUE_TODAY_DAYS);
    let sync = TaskListSynchronizer::with_clock(config, FixedClock(today()));
    let mut rng = Lcg(99);
    let mut list = rendered_list();

    for _ in 0..100 {
        let ids = list.row_ids();
        let id = ids[rng.below(ids.len())].clone();
        let status = ALL_STATUSES[rng.below(ALL_STATUSES.len())];
        sync.apply(&mut list, &id, status, "x").unwrap();

        let row = list.find_row(&id).unwrap();
        assert_eq!(row.status, status);
        assert_eq!(row.completed_marker, status.is_completed());
        let active = row.active_buttons();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].status, status);
    }
}
