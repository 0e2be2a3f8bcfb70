//! Hand-authored templates the curriculum is generated from.
//!
//! Weeks fall into four tiers. Week 1 is a fixed diagnostic table with one
//! task per day; every later week uses the same three-task template and
//! differs only in how the daily output prompt is chosen.

use jiff::civil::Date;

use crate::models::Task;

/// Label and output prompt for each day of week 1.
const DIAGNOSTIC_WEEK: [(&str, &str); 7] = [
    ("剑10 T1 诊断", "计算听读分数，列出 3 类最集中的错题原因"),
    ("S1 精听跟读", "听写记录 3 个连读/弱读失分点 + 5 个场景词"),
    ("P1 精读分析", "整理 5 组文中的题目-原文同义替换词对"),
    (
        "小作文动态图结构",
        "写出 3 个描述趋势的高级句型 (如: witnessed a dramatic rise)",
    ),
    ("口语 P1 练习", "录音转文字：列出自己常犯的 2 个时态错误"),
    ("第一周总结", "重写小作文开头段 + 本周词汇复查错误率"),
    ("休息/补漏", "下周学习目标简述 (100字内)"),
];

const FOUNDATION_OUTPUTS: [&str; 5] = [
    "5组核心同义替换",
    "3个写作高分短语",
    "口语录音纠错笔记",
    "精听场景词汇总",
    "今日长难句分析",
];

const SKILL_OUTPUTS: [&str; 5] = [
    "完整小作文草稿",
    "完整大作文逻辑大纲",
    "口语P2串题思路卡片",
    "阅读限时训练错题分析",
    "听力地图题方位词总结",
];

const MOCK_EXAM_OUTPUT: &str = "【周六模考】全科分数及考场失误反思";
const DAILY_ERROR_OUTPUT: &str = "今日专项练习最高频错误总结";

/// Day index (0-based) of the weekly mock exam in the late tiers.
const MOCK_EXAM_DAY: usize = 5;

/// How a week's tasks and prompts are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tier {
    /// Week 1
    Diagnostic,
    /// Weeks 2-6
    Foundation,
    /// Weeks 7-12
    Skills,
    /// Weeks 13-23
    MockExam,
}

impl Tier {
    pub(crate) fn for_week(week: u8) -> Self {
        match week {
            0 | 1 => Tier::Diagnostic,
            2..=6 => Tier::Foundation,
            7..=12 => Tier::Skills,
            _ => Tier::MockExam,
        }
    }
}

/// Theme of a week.
pub(crate) fn focus_for_week(week: u8) -> &'static str {
    match week {
        1 => "全真诊断与启动",
        2 => "听力填空 + 口语P1拓展",
        3 => "阅读判断 + 写作静态图",
        4 => "听力选择 + 口语P2串题",
        5 => "阅读配对 + 写作议论文",
        6 => "第一阶段复习 & 剑11测试",
        7..=12 => "技能提升：限时训练与分科突破",
        13..=18 => "专项强化：周模考 + 弱项攻克",
        _ => "全真冲刺：考前调整与心态建设",
    }
}

/// Output prompt for day `day_index` (0-based) of `week`.
pub(crate) fn output_for_day(week: u8, day_index: usize) -> &'static str {
    match Tier::for_week(week) {
        Tier::Diagnostic => DIAGNOSTIC_WEEK[day_index % DIAGNOSTIC_WEEK.len()].1,
        Tier::Foundation => FOUNDATION_OUTPUTS[day_index % FOUNDATION_OUTPUTS.len()],
        Tier::Skills => SKILL_OUTPUTS[day_index % SKILL_OUTPUTS.len()],
        Tier::MockExam if day_index == MOCK_EXAM_DAY => MOCK_EXAM_OUTPUT,
        Tier::MockExam => DAILY_ERROR_OUTPUT,
    }
}

/// Checklist for one day. Ids are `{date}-{slot}`.
pub(crate) fn tasks_for_day(week: u8, day_index: usize, date: Date) -> Vec<Task> {
    if Tier::for_week(week) == Tier::Diagnostic {
        let (label, _) = DIAGNOSTIC_WEEK[day_index % DIAGNOSTIC_WEEK.len()];
        return vec![Task::new(format!("{date}-w1"), label)];
    }

    vec![
        Task::new(format!("{date}-v"), "词汇/语法基础 (0.5h)"),
        Task::new(
            format!("{date}-s"),
            format!("专项训练: {} (1h)", skill_topic(focus_for_week(week))),
        ),
        Task::new(format!("{date}-o"), "主动输出练习 (0.5h)"),
    ]
}

/// The part of a focus before its first ASCII space.
fn skill_topic(focus: &str) -> &str {
    focus.split(' ').next().unwrap_or(focus)
}
