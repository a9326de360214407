//! # Planner Modules — Single Source of Truth
//!
//! Defines the `PlannerModule` enum naming every form module the planner
//! walks a user through, plus the assembled final blueprint. Schema
//! catalogs and the CLI key their lookups on these names, so adding a
//! module forces every exhaustive `match` to handle it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BlueprintError;

/// Every planner module whose output is validated before packaging.
///
/// | # | Module | Produces |
/// |---|--------|----------|
/// | 1 | CommanderIntent | Mission name, objective, end state |
/// | 2 | DataSources | Source inventory and field mapping |
/// | 3 | SolutionDesign | Architecture and component roles |
/// | 4 | Security | Classification, encryption, retention |
/// | 5 | FinalBlueprint | Versioned assembly of the modules above |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannerModule {
    /// Commander's intent: what the plan must achieve.
    CommanderIntent,
    /// Data-source mapping.
    DataSources,
    /// Solution design.
    SolutionDesign,
    /// Security posture.
    Security,
    /// The assembled, versioned artifact.
    FinalBlueprint,
}

/// Total number of planner modules.
pub const PLANNER_MODULE_COUNT: usize = 5;

impl PlannerModule {
    /// All modules in workflow order.
    pub fn all() -> &'static [PlannerModule] {
        &[
            Self::CommanderIntent,
            Self::DataSources,
            Self::SolutionDesign,
            Self::Security,
            Self::FinalBlueprint,
        ]
    }

    /// The snake_case name used for schema lookup and file stems.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommanderIntent => "commander_intent",
            Self::DataSources => "data_sources",
            Self::SolutionDesign => "solution_design",
            Self::Security => "security",
            Self::FinalBlueprint => "final_blueprint",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::CommanderIntent => "Commander's Intent",
            Self::DataSources => "Data Source Mapping",
            Self::SolutionDesign => "Solution Design",
            Self::Security => "Security",
            Self::FinalBlueprint => "Final Blueprint",
        }
    }
}

impl std::fmt::Display for PlannerModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlannerModule {
    type Err = BlueprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commander_intent" => Ok(Self::CommanderIntent),
            "data_sources" => Ok(Self::DataSources),
            "solution_design" => Ok(Self::SolutionDesign),
            "security" => Ok(Self::Security),
            "final_blueprint" => Ok(Self::FinalBlueprint),
            other => Err(BlueprintError::UnknownModule(other.to_string())),
        }
    }
}
