//! Tests for the planner module.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    error::CadenceError,
    feedback::{Feedback, FeedbackGateway, TextGenerator, FALLBACK_MESSAGE},
    params::{DayRef, SelectWeek, SetOutput, TaskRef},
};

/// Generator that counts calls and either echoes a reply or fails.
struct CountingGenerator {
    calls: Arc<AtomicUsize>,
    reply: Option<&'static str>,
}

#[async_trait]
impl TextGenerator for CountingGenerator {
    async fn generate(&self, _prompt: &str) -> crate::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .map(str::to_string)
            .ok_or_else(|| CadenceError::feedback_service("connection refused"))
    }
}

fn counting_gateway(reply: Option<&'static str>) -> (Arc<AtomicUsize>, FeedbackGateway) {
    let calls = Arc::new(AtomicUsize::new(0));
    let gateway = FeedbackGateway::new(CountingGenerator {
        calls: calls.clone(),
        reply,
    });
    (calls, gateway)
}

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let state_file = temp_dir.path().join("state.json");
    let planner = PlannerBuilder::new()
        .with_state_file(Some(&state_file))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn day(y: i16, m: i8, d: i8) -> DayRef {
    DayRef { date: date(y, m, d) }
}

#[tokio::test]
async fn test_toggle_task_flips_and_persists() {
    let (_temp_dir, mut planner) = create_test_planner().await;
    let task = TaskRef {
        id: "2025-01-19-w1".to_string(),
    };

    assert!(planner.toggle_task(&task).await.unwrap());
    assert!(planner.store().load().is_completed("2025-01-19-w1"));

    assert!(!planner.toggle_task(&task).await.unwrap());
    assert!(!planner.store().load().is_completed("2025-01-19-w1"));
}

#[tokio::test]
async fn test_toggle_unknown_task_is_rejected() {
    let (_temp_dir, mut planner) = create_test_planner().await;
    let result = planner
        .toggle_task(&TaskRef {
            id: "2025-01-19-v".to_string(),
        })
        .await;

    assert!(matches!(result, Err(CadenceError::TaskNotFound { .. })));
    assert!(planner.state().is_empty());
}

#[tokio::test]
async fn test_set_output_accepts_empty_string() {
    let (_temp_dir, mut planner) = create_test_planner().await;
    let params = SetOutput {
        date: date(2025, 1, 20),
        text: String::new(),
    };

    planner.set_output(&params).await.unwrap();
    assert_eq!(planner.state().output("2025-01-20"), Some(""));
    assert_eq!(planner.store().load().output("2025-01-20"), Some(""));
}

#[tokio::test]
async fn test_set_output_outside_curriculum_is_rejected() {
    let (_temp_dir, mut planner) = create_test_planner().await;
    let result = planner
        .set_output(&SetOutput {
            date: date(2024, 12, 31),
            text: "hello".to_string(),
        })
        .await;

    assert!(matches!(result, Err(CadenceError::DayNotFound { .. })));
}

#[tokio::test]
async fn test_set_feedback_overwrites() {
    let (_temp_dir, mut planner) = create_test_planner().await;
    planner.set_feedback(&day(2025, 1, 19), "first").await.unwrap();
    planner.set_feedback(&day(2025, 1, 19), "second").await.unwrap();

    assert_eq!(planner.state().feedback("2025-01-19"), Some("second"));
}

#[tokio::test]
async fn test_short_output_never_reaches_gateway() {
    let (_temp_dir, mut planner) = create_test_planner().await;
    let (calls, gateway) = counting_gateway(Some("good"));

    let result = planner.request_feedback(&gateway, &day(2025, 1, 19)).await;
    assert!(matches!(result, Err(CadenceError::InvalidInput { .. })));

    planner
        .set_output(&SetOutput {
            date: date(2025, 1, 19),
            text: "abcd".to_string(),
        })
        .await
        .unwrap();
    let result = planner.request_feedback(&gateway, &day(2025, 1, 19)).await;
    assert!(matches!(result, Err(CadenceError::InvalidInput { .. })));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!planner.is_pending("2025-01-19"));
    assert_eq!(planner.state().feedback("2025-01-19"), None);
}

#[tokio::test]
async fn test_five_characters_reach_gateway() {
    let (_temp_dir, mut planner) = create_test_planner().await;
    let (calls, gateway) = counting_gateway(Some("1. ✅ 达标"));

    planner
        .set_output(&SetOutput {
            date: date(2025, 1, 19),
            text: "abcde".to_string(),
        })
        .await
        .unwrap();
    let feedback = planner
        .request_feedback(&gateway, &day(2025, 1, 19))
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(feedback, Feedback::Generated("1. ✅ 达标".to_string()));
    assert_eq!(planner.state().feedback("2025-01-19"), Some("1. ✅ 达标"));
    assert_eq!(planner.store().load().feedback("2025-01-19"), Some("1. ✅ 达标"));
}

#[tokio::test]
async fn test_failed_request_stores_fallback_and_clears_pending() {
    let (_temp_dir, mut planner) = create_test_planner().await;
    let (calls, gateway) = counting_gateway(None);

    planner
        .set_output(&SetOutput {
            date: date(2025, 3, 2),
            text: "Task 1 draft: the chart shows".to_string(),
        })
        .await
        .unwrap();
    let feedback = planner
        .request_feedback(&gateway, &day(2025, 3, 2))
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(feedback.is_fallback());
    assert_eq!(planner.state().feedback("2025-03-02"), Some(FALLBACK_MESSAGE));
    assert!(!planner.is_pending("2025-03-02"));
}

#[tokio::test]
async fn test_second_request_for_same_date_is_refused_while_pending() {
    let (_temp_dir, mut planner) = create_test_planner().await;
    for date in [date(2025, 1, 19), date(2025, 1, 20)] {
        planner
            .set_output(&SetOutput {
                date,
                text: "long enough".to_string(),
            })
            .await
            .unwrap();
    }

    let ticket = planner.begin_feedback(&day(2025, 1, 19)).unwrap();
    assert_eq!(ticket.date(), "2025-01-19");
    assert_eq!(ticket.output(), "long enough");
    assert_eq!(ticket.prompt(), "计算听读分数，列出 3 类最集中的错题原因");
    assert!(planner.is_pending("2025-01-19"));

    let again = planner.begin_feedback(&day(2025, 1, 19));
    assert!(matches!(again, Err(CadenceError::FeedbackPending { .. })));

    // Other dates are independent.
    let other = planner.begin_feedback(&day(2025, 1, 20)).unwrap();

    planner
        .complete_feedback(ticket, &Feedback::Generated("done".to_string()))
        .await
        .unwrap();
    assert!(!planner.is_pending("2025-01-19"));
    assert!(planner.is_pending("2025-01-20"));

    planner
        .complete_feedback(other, &Feedback::fallback())
        .await
        .unwrap();
    assert!(!planner.is_pending("2025-01-20"));
}

#[tokio::test]
async fn test_completed_ticket_writes_back_after_edit() {
    let (_temp_dir, mut planner) = create_test_planner().await;
    let output = SetOutput {
        date: date(2025, 1, 19),
        text: "first version".to_string(),
    };
    planner.set_output(&output).await.unwrap();

    let ticket = planner.begin_feedback(&day(2025, 1, 19)).unwrap();
    planner
        .set_output(&SetOutput {
            text: "edited while waiting".to_string(),
            ..output
        })
        .await
        .unwrap();
    planner
        .complete_feedback(ticket, &Feedback::Generated("about the first version".to_string()))
        .await
        .unwrap();

    assert_eq!(planner.state().output("2025-01-19"), Some("edited while waiting"));
    assert_eq!(
        planner.state().feedback("2025-01-19"),
        Some("about the first version")
    );
}

#[tokio::test]
async fn test_state_survives_rebuild() {
    let temp_dir = TempDir::new().unwrap();
    let state_file = temp_dir.path().join("state.json");

    let mut planner = PlannerBuilder::new()
        .with_state_file(Some(&state_file))
        .build()
        .await
        .unwrap();
    planner
        .toggle_task(&TaskRef {
            id: "2025-01-26-s".to_string(),
        })
        .await
        .unwrap();
    planner
        .set_output(&SetOutput {
            date: date(2025, 1, 26),
            text: "rise / increase".to_string(),
        })
        .await
        .unwrap();
    let saved = planner.state().clone();
    drop(planner);

    let reloaded = PlannerBuilder::new()
        .with_state_file(Some(&state_file))
        .build()
        .await
        .unwrap();
    assert_eq!(reloaded.state(), &saved);
    assert_eq!(reloaded.progress().completed, 1);
}

#[tokio::test]
async fn test_corrupt_state_file_starts_fresh() {
    let temp_dir = TempDir::new().unwrap();
    let state_file = temp_dir.path().join("state.json");
    std::fs::write(&state_file, "{\"completedTasks\": [").unwrap();

    let planner = PlannerBuilder::new()
        .with_state_file(Some(&state_file))
        .build()
        .await
        .unwrap();
    assert_eq!(planner.state(), &ProgressState::default());
}

#[tokio::test]
async fn test_select_week() {
    let (_temp_dir, planner) = create_test_planner().await;
    let select = |week, phase, today| {
        planner
            .select_week(&SelectWeek { week, phase, today })
            .map(|plan| plan.week)
    };

    assert_eq!(select(Some(5), None, date(2030, 1, 1)).unwrap(), 5);
    assert_eq!(select(Some(99), None, date(2030, 1, 1)).unwrap(), 23);
    assert_eq!(select(Some(0), None, date(2030, 1, 1)).unwrap(), 1);
    assert_eq!(select(Some(5), Some(3), date(2030, 1, 1)).unwrap(), 13);
    assert_eq!(select(None, None, date(2025, 3, 5)).unwrap(), 7);
    assert_eq!(select(None, None, date(2030, 1, 1)).unwrap(), 1);
    assert!(matches!(
        select(None, Some(9), date(2030, 1, 1)),
        Err(CadenceError::PhaseNotFound { id: 9 })
    ));
}

#[tokio::test]
async fn test_custom_start_date_shifts_ids() {
    let temp_dir = TempDir::new().unwrap();
    let planner = PlannerBuilder::new()
        .with_state_file(Some(temp_dir.path().join("state.json")))
        .with_start_date(date(2026, 3, 1))
        .build()
        .await
        .unwrap();

    let first = &planner.curriculum().week(1).unwrap().daily_plans[0];
    assert_eq!(first.tasks[0].id, "2026-03-01-w1");
}
