//! Skill-gap analysis between a current vector and a target vector.

use crate::matching::models::SkillGapAnalysis;
use crate::vector::{vector_distance, SkillDimension, SkillVector};

/// Tracked skills and their labels, in report order.
const GAP_SKILLS: &[(SkillDimension, &str)] = &[
    (SkillDimension::Programming, "programming"),
    (SkillDimension::ProjectManagement, "project management"),
    (SkillDimension::Leadership, "leadership"),
    (SkillDimension::Communication, "communication"),
    (SkillDimension::DataAnalysis, "data analysis"),
    (SkillDimension::Design, "design"),
    (SkillDimension::Sales, "sales"),
    (SkillDimension::Marketing, "marketing"),
];

const MISSING_TARGET_FLOOR: f64 = 0.5;
/// Current weights at or below this are weak.
const WEAK_CEILING: f64 = 0.3;
const TRANSFERABLE_CURRENT_FLOOR: f64 = 0.4;
const TRANSFERABLE_TARGET_FLOOR: f64 = 0.3;

/// Missing: target > 0.5 and current ≤ 0.3. Otherwise transferable when
/// current > 0.4 and target > 0.3. Skills meeting neither are not reported.
///
/// `overall_gap` is the Euclidean distance divided by the square root of the
/// number of dimensions active in either vector (an RMS difference), capped at 1.
pub fn analyze_skill_gaps(current: &SkillVector, target: &SkillVector) -> SkillGapAnalysis {
    let mut missing = Vec::new();
    let mut transferable = Vec::new();

    for &(dimension, label) in GAP_SKILLS {
        let have = current[dimension];
        let need = target[dimension];

        if need > MISSING_TARGET_FLOOR && have <= WEAK_CEILING {
            missing.push(label.to_string());
        } else if have > TRANSFERABLE_CURRENT_FLOOR && need > TRANSFERABLE_TARGET_FLOOR {
            transferable.push(label.to_string());
        }
    }

    let active = SkillDimension::ALL
        .iter()
        .filter(|&&d| current[d] != 0.0 || target[d] != 0.0)
        .count();
    let overall_gap = if active == 0 {
        0.0
    } else {
        (vector_distance(current, target) / (active as f64).sqrt()).min(1.0)
    };

    SkillGapAnalysis {
        missing,
        transferable,
        overall_gap,
    }
}
