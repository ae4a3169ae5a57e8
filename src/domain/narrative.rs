//! Free-text narrative call paths.

/// Returned by the carbon-cycle path when the service call fails.
pub const CARBON_CYCLE_SENTINEL: &str = "Error fetching carbon cycle simulation data.";

/// Returned by the plant-performance path when the service call fails.
pub const PLANT_PERFORMANCE_SENTINEL: &str = "Error fetching indoor plant performance data.";

/// Two caller-supplied subjects a narrative is generated about.
///
/// Carbon-cycle runs use (emission source, sequestration effort);
/// plant runs use (plant name, room size).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeRequest {
    pub subject_a: String,
    pub subject_b: String,
}

impl NarrativeRequest {
    pub fn new(subject_a: impl Into<String>, subject_b: impl Into<String>) -> Self {
        Self { subject_a: subject_a.into(), subject_b: subject_b.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeKind {
    CarbonCycle,
    PlantPerformance,
}

impl NarrativeKind {
    pub fn sentinel(&self) -> &'static str {
        match self {
            NarrativeKind::CarbonCycle => CARBON_CYCLE_SENTINEL,
            NarrativeKind::PlantPerformance => PLANT_PERFORMANCE_SENTINEL,
        }
    }

    /// Short label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            NarrativeKind::CarbonCycle => "Carbon Cycle",
            NarrativeKind::PlantPerformance => "Plant Model",
        }
    }
}
