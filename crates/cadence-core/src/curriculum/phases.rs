//! The four study phases.

use crate::models::{Phase, PhaseColor};

/// Phases in order. Their week sets are disjoint and together cover 1..=23.
pub fn phases() -> Vec<Phase> {
    vec![
        Phase::new(
            1,
            "基础构建期",
            1..=6,
            "熟悉题型，夯实词汇语法基础",
            PhaseColor::Blue,
        ),
        Phase::new(
            2,
            "技能提升期",
            7..=12,
            "分科突破技巧，强化主动输出",
            PhaseColor::Emerald,
        ),
        Phase::new(3, "专项强化期", 13..=18, "模考训练，攻破弱点", PhaseColor::Indigo),
        Phase::new(4, "冲刺模考期", 19..=23, "全真模拟，调整状态", PhaseColor::Rose),
    ]
}
