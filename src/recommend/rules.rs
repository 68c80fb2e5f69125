//! The individual recommendation rules. Each rule inspects the raw
//! counts and either declines or builds one fully-populated
//! recommendation. Rules are independent; ordering lives in `mod.rs`.

use crate::score::documentation::sop_coverage_ratio;
use crate::score::weights::SOPS_PER_CATEGORY_TARGET;
use crate::types::metrics::{CategoryNames, RawMetrics};
use crate::types::report::{Effort, Impact, Priority, RecCategory, Recommendation};

const INTEGRATION_RATIO_FLOOR: f32 = 0.5;
const INTEGRATION_RATIO_URGENT: f32 = 0.3;
const SOP_COVERAGE_FLOOR: f32 = 0.5;
const SOP_SUGGESTION_TARGET: f32 = 0.7;
const FREE_SHARE_CEILING: f32 = 0.7;
const FREE_SHARE_URGENT: f32 = 0.9;
const ENTERPRISE_SHARE_CEILING: f32 = 0.7;
const DATA_INTEGRATION_FLOOR: f32 = 0.4;

pub fn expand_coverage(
    metrics: &RawMetrics,
    names: Option<&CategoryNames>,
) -> Option<Recommendation> {
    let covered = metrics.categories_with_tools();
    if covered >= metrics.total_categories {
        return None;
    }
    let missing = metrics.total_categories - covered;
    let priority = if missing as f32 > metrics.total_categories as f32 / 2.0 {
        Priority::High
    } else {
        Priority::Medium
    };

    let mut description = format!(
        "{missing} of {} business categories have no automation tools",
        metrics.total_categories
    );
    if let Some(named) = missing_category_names(metrics, names, 3) {
        description.push_str(&format!(", including {named}"));
    }
    description.push('.');

    Some(Recommendation::new(
        "Expand automation coverage",
        description,
        RecCategory::Coverage,
        priority,
        Impact::High,
        Effort::Medium,
        vec![
            "Audit uncovered categories for repetitive manual work".to_string(),
            "Shortlist one starter tool per uncovered category".to_string(),
            "Pilot the shortlisted tool in the highest-volume category first".to_string(),
            "Re-measure coverage after each rollout".to_string(),
        ],
    ))
}

pub fn improve_integration(
    metrics: &RawMetrics,
    _names: Option<&CategoryNames>,
) -> Option<Recommendation> {
    if metrics.total_tools <= 3 {
        return None;
    }
    let ratio = metrics.integration_ratio();
    if ratio >= INTEGRATION_RATIO_FLOOR {
        return None;
    }
    let unconnected = metrics
        .max_possible_pairs()
        .saturating_sub(metrics.integrated_pairs as u64);
    let priority = if ratio < INTEGRATION_RATIO_URGENT {
        Priority::High
    } else {
        Priority::Medium
    };

    Some(Recommendation::new(
        "Improve tool integration",
        format!(
            "Only {} of {} possible tool pairings exchange data; {unconnected} pairings remain unconnected.",
            metrics.integrated_pairs,
            metrics.max_possible_pairs()
        ),
        RecCategory::Integration,
        priority,
        Impact::High,
        Effort::Medium,
        vec![
            "Map which tools hold duplicate or re-keyed data".to_string(),
            "Check native integrations before building custom ones".to_string(),
            "Connect the two highest-traffic tools first".to_string(),
            "Automate one cross-tool handoff end to end".to_string(),
        ],
    ))
}

pub fn document_processes(
    metrics: &RawMetrics,
    _names: Option<&CategoryNames>,
) -> Option<Recommendation> {
    if metrics.total_categories == 0 {
        return None;
    }
    let ratio = sop_coverage_ratio(metrics);
    if ratio >= SOP_COVERAGE_FLOOR {
        return None;
    }
    let target = metrics.total_categories as f32 * SOPS_PER_CATEGORY_TARGET;
    let suggested = ((target * SOP_SUGGESTION_TARGET).ceil() as u32)
        .saturating_sub(metrics.sop_count)
        .max(1);
    let priority = if metrics.sop_count < metrics.total_categories {
        Priority::High
    } else {
        Priority::Medium
    };

    Some(Recommendation::new(
        "Document core processes",
        format!(
            "Only {} SOPs exist across {} categories; writing roughly {suggested} more would bring documentation to a workable level.",
            metrics.sop_count, metrics.total_categories
        ),
        RecCategory::Documentation,
        priority,
        Impact::High,
        Effort::Medium,
        vec![
            "List the processes each category runs weekly".to_string(),
            "Write SOPs for the three most error-prone processes first".to_string(),
            "Keep each SOP to numbered steps with an owner".to_string(),
            "Review SOPs quarterly and retire stale ones".to_string(),
        ],
    ))
}

pub fn upgrade_free_tier(
    metrics: &RawMetrics,
    _names: Option<&CategoryNames>,
) -> Option<Recommendation> {
    if metrics.total_tools <= 3 {
        return None;
    }
    let share = metrics.tier_share("free");
    if share <= FREE_SHARE_CEILING {
        return None;
    }
    let priority = if share > FREE_SHARE_URGENT {
        Priority::High
    } else {
        Priority::Medium
    };

    Some(Recommendation::new(
        "Upgrade critical tools beyond free tier",
        format!(
            "{:.0}% of the tool inventory runs on free tiers, which usually caps volume, support, and automation features.",
            share * 100.0
        ),
        RecCategory::Sophistication,
        priority,
        Impact::Medium,
        Effort::Quick,
        vec![
            "Identify free tools that hit usage or feature limits".to_string(),
            "Compare paid-tier pricing against hours lost to workarounds".to_string(),
            "Upgrade the one tool most central to daily operations".to_string(),
        ],
    ))
}

pub fn review_enterprise_spend(
    metrics: &RawMetrics,
    _names: Option<&CategoryNames>,
) -> Option<Recommendation> {
    if metrics.total_tools <= 5 {
        return None;
    }
    let share = metrics.tier_share("enterprise");
    if share <= ENTERPRISE_SHARE_CEILING {
        return None;
    }

    Some(Recommendation::new(
        "Review enterprise tool spend",
        format!(
            "{:.0}% of tools are enterprise tier; some may be over-provisioned for the workloads they carry.",
            share * 100.0
        ),
        RecCategory::Optimization,
        Priority::Medium,
        Impact::Medium,
        Effort::Medium,
        vec![
            "Pull seat and feature utilization for each enterprise tool".to_string(),
            "Downgrade tools whose premium features go unused".to_string(),
            "Consolidate overlapping enterprise subscriptions".to_string(),
        ],
    ))
}

pub fn break_down_silos(
    metrics: &RawMetrics,
    _names: Option<&CategoryNames>,
) -> Option<Recommendation> {
    if metrics.total_tools <= 5 {
        return None;
    }
    if metrics.integration_ratio() >= DATA_INTEGRATION_FLOOR {
        return None;
    }

    Some(Recommendation::new(
        "Break down data silos",
        format!(
            "With {} tools and few integrations, the same records are likely maintained by hand in several places.",
            metrics.total_tools
        ),
        RecCategory::Data,
        Priority::Medium,
        Impact::High,
        Effort::Extended,
        vec![
            "Pick one system of record per data type".to_string(),
            "Sync secondary tools from the system of record".to_string(),
            "Remove manual export/import steps as syncs land".to_string(),
            "Track how often teams re-enter the same data".to_string(),
        ],
    ))
}

fn missing_category_names(
    metrics: &RawMetrics,
    names: Option<&CategoryNames>,
    limit: usize,
) -> Option<String> {
    let names = names?;
    let missing: Vec<&str> = names
        .iter()
        .filter(|(id, _)| metrics.category_tools.get(*id).copied().unwrap_or(0) == 0)
        .take(limit)
        .map(|(_, name)| name.as_str())
        .collect();
    if missing.is_empty() {
        None
    } else {
        Some(missing.join(", "))
    }
}
