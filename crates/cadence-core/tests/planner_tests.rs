mod common;

use cadence_core::{
    feedback::FALLBACK_MESSAGE, DayRef, FeedbackGateway, PlannerBuilder, SelectWeek, SetOutput,
    TaskRef,
};
use common::{create_test_planner, ScriptedGenerator};
use jiff::civil::date;
use tempfile::TempDir;

#[tokio::test]
async fn test_complete_study_day_workflow() {
    let (_temp_dir, mut planner) = create_test_planner().await;
    let day = DayRef {
        date: date(2025, 1, 19),
    };

    // Check off the diagnostic test
    let done = planner
        .toggle_task(&TaskRef {
            id: "2025-01-19-w1".to_string(),
        })
        .await
        .expect("Failed to toggle task");
    assert!(done);

    // Write the day's output
    planner
        .set_output(&SetOutput {
            date: day.date,
            text: "听力 24/40, 阅读 27/40. 错因: 拼写, 同义替换, 时间分配".to_string(),
        })
        .await
        .expect("Failed to save output");

    // Ask for feedback
    let generator = ScriptedGenerator::replying("1. ✅ 点评产出: 达标");
    let gateway = FeedbackGateway::new(generator.clone());
    let feedback = planner
        .request_feedback(&gateway, &day)
        .await
        .expect("Failed to request feedback");

    assert_eq!(generator.call_count(), 1);
    assert_eq!(feedback.text(), "1. ✅ 点评产出: 达标");

    let view = planner.day_view(&day).expect("Failed to show day").to_string();
    assert!(view.contains("[x] 剑10 T1 诊断"));
    assert!(view.contains("✓ 核心任务达成"));
    assert!(view.contains("> 听力 24/40"));
    assert!(view.contains("1. ✅ 点评产出: 达标"));
    assert!(view.contains("_再次请求反馈_"));

    let progress = planner.progress();
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.total, 469);
}

#[tokio::test]
async fn test_feedback_gate_and_fallback() {
    let (_temp_dir, mut planner) = create_test_planner().await;
    let day = DayRef {
        date: date(2025, 4, 25),
    };
    let generator = ScriptedGenerator::failing();
    let gateway = FeedbackGateway::new(generator.clone());

    planner
        .set_output(&SetOutput {
            date: day.date,
            text: "模考反思".to_string(),
        })
        .await
        .unwrap();
    assert!(planner.request_feedback(&gateway, &day).await.is_err());
    assert_eq!(generator.call_count(), 0);

    planner
        .set_output(&SetOutput {
            date: day.date,
            text: "模考反思: L7".to_string(),
        })
        .await
        .unwrap();
    let feedback = planner.request_feedback(&gateway, &day).await.unwrap();

    assert_eq!(generator.call_count(), 1);
    assert_eq!(feedback.text(), FALLBACK_MESSAGE);
    assert_eq!(planner.state().feedback("2025-04-25"), Some(FALLBACK_MESSAGE));
    assert!(!planner.is_pending("2025-04-25"));
}

#[tokio::test]
async fn test_week_view_scenarios() {
    let (_temp_dir, planner) = create_test_planner().await;
    let far_future = date(2030, 1, 1);

    let week14 = planner
        .week_view(&SelectWeek {
            week: Some(14),
            phase: None,
            today: far_future,
        })
        .unwrap();
    assert_eq!(
        week14.week().daily_plans[5].output_required,
        "【周六模考】全科分数及考场失误反思"
    );
    assert_eq!(week14.phase().map(|phase| phase.id), Some(3));

    let rendered = week14.to_string();
    assert!(rendered.starts_with("# Week 14 / 23: 专项强化：周模考 + 弱项攻克"));
    assert!(rendered.contains("- Progress: 0% (0/21)"));

    let phase4 = planner
        .week_view(&SelectWeek {
            week: None,
            phase: Some(4),
            today: far_future,
        })
        .unwrap();
    assert_eq!(phase4.week().week, 19);
}

#[tokio::test]
async fn test_progress_report_after_restart() {
    let temp_dir = TempDir::new().unwrap();
    let state_file = temp_dir.path().join("progress.json");

    {
        let mut planner = PlannerBuilder::new()
            .with_state_file(Some(&state_file))
            .build()
            .await
            .unwrap();
        for id in ["2025-03-02-v", "2025-03-02-s", "2025-03-02-o"] {
            planner
                .toggle_task(&TaskRef { id: id.to_string() })
                .await
                .unwrap();
        }
    }

    let planner = PlannerBuilder::new()
        .with_state_file(Some(&state_file))
        .build()
        .await
        .unwrap();
    let report = planner.progress_report();

    assert_eq!(report.overall.completed, 3);
    assert_eq!(report.overall.percent(), 1);
    assert_eq!(report.phases[1].summary.completed, 3);
    assert_eq!(report.phases[1].summary.total, 126);

    let rendered = report.to_string();
    assert!(rendered.contains("# Overall Progress: 1% (3/469)"));
    assert!(rendered.contains("- 2. 技能提升期: 2% (3/126)"));
}

#[tokio::test]
async fn test_stale_keys_are_kept_but_not_counted() {
    let temp_dir = TempDir::new().unwrap();
    let state_file = temp_dir.path().join("progress.json");
    std::fs::write(
        &state_file,
        r#"{"completedTasks":{"2024-01-01-v":true,"2025-01-19-w1":true},"userOutputs":{"2024-01-01":"old"},"aiFeedback":{}}"#,
    )
    .unwrap();

    let mut planner = PlannerBuilder::new()
        .with_state_file(Some(&state_file))
        .build()
        .await
        .unwrap();
    assert_eq!(planner.progress().completed, 1);
    assert_eq!(
        planner.curriculum().orphaned_task_ids(planner.state()),
        ["2024-01-01-v"]
    );

    planner
        .toggle_task(&TaskRef {
            id: "2025-01-20-w1".to_string(),
        })
        .await
        .unwrap();

    let saved = planner.store().load();
    assert!(saved.is_completed("2024-01-01-v"));
    assert_eq!(saved.output("2024-01-01"), Some("old"));
    assert_eq!(planner.progress().completed, 2);
}
