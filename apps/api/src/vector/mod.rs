#![allow(dead_code)]

//! Skill vectors — a fixed-dimension feature space for people and jobs.
//!
//! Every vector carries all `SkillDimension`s (absent weights are 0). On the
//! wire a vector is a map of camelCase dimension name → weight; partial maps
//! are accepted and unknown names are rejected.
//!
//! All operations here are pure. Zero-magnitude inputs never produce NaN.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

pub const DIMENSION_COUNT: usize = 28;

// ────────────────────────────────────────────────────────────────────────────
// Dimensions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkillDimension {
    // Technical
    Programming,
    DataAnalysis,
    CloudComputing,
    MachineLearning,
    WebDevelopment,
    MobileDevelopment,
    DevOps,
    Databases,
    // Soft skills
    Leadership,
    Communication,
    ProjectManagement,
    Teamwork,
    ProblemSolving,
    Creativity,
    Sales,
    Marketing,
    Writing,
    Teaching,
    Design,
    Research,
    // Domain knowledge
    Finance,
    Healthcare,
    Retail,
    Manufacturing,
    Education,
    Government,
    Nonprofit,
    Startup,
}

impl SkillDimension {
    /// Every dimension, in canonical (index) order.
    pub const ALL: [SkillDimension; DIMENSION_COUNT] = [
        SkillDimension::Programming,
        SkillDimension::DataAnalysis,
        SkillDimension::CloudComputing,
        SkillDimension::MachineLearning,
        SkillDimension::WebDevelopment,
        SkillDimension::MobileDevelopment,
        SkillDimension::DevOps,
        SkillDimension::Databases,
        SkillDimension::Leadership,
        SkillDimension::Communication,
        SkillDimension::ProjectManagement,
        SkillDimension::Teamwork,
        SkillDimension::ProblemSolving,
        SkillDimension::Creativity,
        SkillDimension::Sales,
        SkillDimension::Marketing,
        SkillDimension::Writing,
        SkillDimension::Teaching,
        SkillDimension::Design,
        SkillDimension::Research,
        SkillDimension::Finance,
        SkillDimension::Healthcare,
        SkillDimension::Retail,
        SkillDimension::Manufacturing,
        SkillDimension::Education,
        SkillDimension::Government,
        SkillDimension::Nonprofit,
        SkillDimension::Startup,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire name of the dimension.
    pub fn as_str(self) -> &'static str {
        match self {
            SkillDimension::Programming => "programming",
            SkillDimension::DataAnalysis => "dataAnalysis",
            SkillDimension::CloudComputing => "cloudComputing",
            SkillDimension::MachineLearning => "machineLearning",
            SkillDimension::WebDevelopment => "webDevelopment",
            SkillDimension::MobileDevelopment => "mobileDevelopment",
            SkillDimension::DevOps => "devOps",
            SkillDimension::Databases => "databases",
            SkillDimension::Leadership => "leadership",
            SkillDimension::Communication => "communication",
            SkillDimension::ProjectManagement => "projectManagement",
            SkillDimension::Teamwork => "teamwork",
            SkillDimension::ProblemSolving => "problemSolving",
            SkillDimension::Creativity => "creativity",
            SkillDimension::Sales => "sales",
            SkillDimension::Marketing => "marketing",
            SkillDimension::Writing => "writing",
            SkillDimension::Teaching => "teaching",
            SkillDimension::Design => "design",
            SkillDimension::Research => "research",
            SkillDimension::Finance => "finance",
            SkillDimension::Healthcare => "healthcare",
            SkillDimension::Retail => "retail",
            SkillDimension::Manufacturing => "manufacturing",
            SkillDimension::Education => "education",
            SkillDimension::Government => "government",
            SkillDimension::Nonprofit => "nonprofit",
            SkillDimension::Startup => "startup",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.as_str() == name)
    }
}

impl fmt::Display for SkillDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    #[error("unknown skill dimension '{0}'")]
    UnknownDimension(String),

    #[error("weight for '{dimension}' must be finite, got {value}")]
    NonFinite { dimension: String, value: f64 },
}

// ────────────────────────────────────────────────────────────────────────────
// SkillVector
// ────────────────────────────────────────────────────────────────────────────

/// Dense skill vector. Weights conventionally sit in [0, 1] but are not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>")]
pub struct SkillVector {
    weights: [f64; DIMENSION_COUNT],
}

impl SkillVector {
    /// Builder-style setter, handy for hand-authored catalogs and tests.
    pub fn with(mut self, dimension: SkillDimension, weight: f64) -> Self {
        self.weights[dimension.index()] = weight;
        self
    }

    pub fn get(&self, dimension: SkillDimension) -> f64 {
        self.weights[dimension.index()]
    }

    pub fn set(&mut self, dimension: SkillDimension, weight: f64) {
        self.weights[dimension.index()] = weight;
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkillDimension, f64)> + '_ {
        SkillDimension::ALL.iter().map(move |&d| (d, self.get(d)))
    }

    /// Euclidean norm, computed on weights divided by the largest one so
    /// neither huge nor tiny finite weights overflow or vanish when squared.
    pub fn magnitude(&self) -> f64 {
        scaled_norm(&self.weights)
    }

    /// Largest absolute weight; 0 for the zero vector.
    pub fn max_abs(&self) -> f64 {
        max_abs(&self.weights)
    }

    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }
}

impl Index<SkillDimension> for SkillVector {
    type Output = f64;

    fn index(&self, dimension: SkillDimension) -> &f64 {
        &self.weights[dimension.index()]
    }
}

impl IndexMut<SkillDimension> for SkillVector {
    fn index_mut(&mut self, dimension: SkillDimension) -> &mut f64 {
        &mut self.weights[dimension.index()]
    }
}

impl TryFrom<BTreeMap<String, f64>> for SkillVector {
    type Error = VectorError;

    /// Builds a vector from a sparse name → weight map. Missing names stay 0.
    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut vector = create_empty_vector();
        for (name, value) in map {
            let dimension = SkillDimension::from_name(&name)
                .ok_or_else(|| VectorError::UnknownDimension(name.clone()))?;
            if !value.is_finite() {
                return Err(VectorError::NonFinite {
                    dimension: name,
                    value,
                });
            }
            vector.set(dimension, value);
        }
        Ok(vector)
    }
}

impl Serialize for SkillVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DIMENSION_COUNT))?;
        for (dimension, weight) in self.iter() {
            map.serialize_entry(dimension.as_str(), &weight)?;
        }
        map.end()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Vector arithmetic
// ────────────────────────────────────────────────────────────────────────────

/// All dimensions set to 0. Every other vector-producing operation starts here.
pub fn create_empty_vector() -> SkillVector {
    SkillVector::default()
}

fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |max, v| max.max(v.abs()))
}

/// `sqrt(Σ v²)` evaluated as `scale * sqrt(Σ (v / scale)²)`.
fn scaled_norm(values: &[f64]) -> f64 {
    let scale = max_abs(values);
    if scale == 0.0 {
        return 0.0;
    }
    values
        .iter()
        .map(|v| {
            let scaled = v / scale;
            scaled * scaled
        })
        .sum::<f64>()
        .sqrt()
        * scale
}

/// Scales `vector` to unit length. A zero vector is returned unchanged.
pub fn normalize_vector(vector: &SkillVector) -> SkillVector {
    let scale = vector.max_abs();
    if scale == 0.0 {
        return *vector;
    }

    // Bring the largest weight to 1 first; dividing by the norm of a
    // vector with a unit maximum cannot overflow.
    let mut result = create_empty_vector();
    for (dimension, weight) in vector.iter() {
        result[dimension] = weight / scale;
    }
    let magnitude = result.magnitude();
    for dimension in SkillDimension::ALL {
        result[dimension] /= magnitude;
    }
    result
}

/// Cosine similarity restricted to dimensions that are non-zero in BOTH vectors.
///
/// Two vectors with no shared active dimension score exactly 0. The result
/// is always finite and within [-1, 1].
pub fn cosine_similarity(a: &SkillVector, b: &SkillVector) -> f64 {
    let shared: Vec<(f64, f64)> = SkillDimension::ALL
        .iter()
        .map(|&d| (a[d], b[d]))
        .filter(|&(value_a, value_b)| value_a != 0.0 && value_b != 0.0)
        .collect();
    if shared.is_empty() {
        return 0.0;
    }

    // Cosine is scale-invariant, so each side is divided by its own largest
    // shared weight before any products are taken.
    let scale_a = shared.iter().fold(0.0_f64, |max, (x, _)| max.max(x.abs()));
    let scale_b = shared.iter().fold(0.0_f64, |max, (_, y)| max.max(y.abs()));

    let mut dot = 0.0;
    let mut magnitude_a = 0.0;
    let mut magnitude_b = 0.0;
    for (value_a, value_b) in shared {
        let (x, y) = (value_a / scale_a, value_b / scale_b);
        dot += x * y;
        magnitude_a += x * x;
        magnitude_b += y * y;
    }

    let magnitude = magnitude_a.sqrt() * magnitude_b.sqrt();
    if magnitude == 0.0 {
        0.0
    } else {
        (dot / magnitude).clamp(-1.0, 1.0)
    }
}

/// Euclidean distance over every dimension.
pub fn vector_distance(a: &SkillVector, b: &SkillVector) -> f64 {
    let diffs = SkillDimension::ALL.map(|d| a[d] - b[d]);
    scaled_norm(&diffs)
}

pub fn add_vectors(a: &SkillVector, b: &SkillVector) -> SkillVector {
    let mut result = create_empty_vector();
    for dimension in SkillDimension::ALL {
        result[dimension] = a[dimension] + b[dimension];
    }
    result
}

pub fn scale_vector(vector: &SkillVector, factor: f64) -> SkillVector {
    let mut result = create_empty_vector();
    for (dimension, weight) in vector.iter() {
        result[dimension] = weight * factor;
    }
    result
}

/// Weighted mean of `vectors`. Without weights each vector counts 1/n.
/// Supplied weights are used as-is (no normalization); a vector without a
/// matching weight contributes nothing.
pub fn average_vectors(vectors: &[SkillVector], weights: Option<&[f64]>) -> SkillVector {
    if vectors.is_empty() {
        return create_empty_vector();
    }

    let uniform = vec![1.0 / vectors.len() as f64; vectors.len()];
    let weights = weights.unwrap_or(uniform.as_slice());

    vectors
        .iter()
        .zip(weights)
        .fold(create_empty_vector(), |acc, (vector, &weight)| {
            add_vectors(&acc, &scale_vector(vector, weight))
        })
}
