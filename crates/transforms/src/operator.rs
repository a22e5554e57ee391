//! Operator identifiers, their pairing table and the per-run selection of
//! enabled operators.

use crate::constants::{ConstantInlining, StringConstantExtraction};
use crate::control_flow::{ControlFlowRestructuring, ControlFlowSimplification};
use crate::dead_code::{DeadCodeInsertion, DeadCodeRemoval};
use crate::numeric::{NumericDiffusion, NumericSimplification};
use crate::opaque_predicate::{OpaquePredicate, PredicateSimplification};
use crate::rename::IdentifierRenaming;
use crate::string_obfuscate::{StringEncoding, StringSplitting};
use crate::{Error, Result, Transform};
use rustveil_core::PatternKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Which direction an operator rewrites in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Obfuscate,
    Deobfuscate,
}

/// Every operator the pipeline knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperatorId {
    NumericDiffusion,
    OpaquePredicate,
    DeadCodeInsertion,
    IdentifierRenaming,
    ControlFlowRestructuring,
    StringConstantExtraction,
    StringEncoding,
    StringSplitting,
    NumericSimplification,
    PredicateSimplification,
    DeadCodeRemoval,
    ControlFlowSimplification,
    ConstantInlining,
}

impl OperatorId {
    /// All operators, obfuscate family first, each family in declaration order.
    pub const ALL: [OperatorId; 13] = [
        OperatorId::NumericDiffusion,
        OperatorId::OpaquePredicate,
        OperatorId::DeadCodeInsertion,
        OperatorId::IdentifierRenaming,
        OperatorId::ControlFlowRestructuring,
        OperatorId::StringConstantExtraction,
        OperatorId::StringEncoding,
        OperatorId::StringSplitting,
        OperatorId::NumericSimplification,
        OperatorId::PredicateSimplification,
        OperatorId::DeadCodeRemoval,
        OperatorId::ControlFlowSimplification,
        OperatorId::ConstantInlining,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OperatorId::NumericDiffusion => "numeric-diffusion",
            OperatorId::OpaquePredicate => "opaque-predicate",
            OperatorId::DeadCodeInsertion => "dead-code-insertion",
            OperatorId::IdentifierRenaming => "identifier-renaming",
            OperatorId::ControlFlowRestructuring => "control-flow-restructuring",
            OperatorId::StringConstantExtraction => "string-constant-extraction",
            OperatorId::StringEncoding => "string-encoding",
            OperatorId::StringSplitting => "string-splitting",
            OperatorId::NumericSimplification => "numeric-simplification",
            OperatorId::PredicateSimplification => "predicate-simplification",
            OperatorId::DeadCodeRemoval => "dead-code-removal",
            OperatorId::ControlFlowSimplification => "control-flow-simplification",
            OperatorId::ConstantInlining => "constant-inlining",
        }
    }

    pub fn family(self) -> Family {
        match self {
            OperatorId::NumericDiffusion
            | OperatorId::OpaquePredicate
            | OperatorId::DeadCodeInsertion
            | OperatorId::IdentifierRenaming
            | OperatorId::ControlFlowRestructuring
            | OperatorId::StringConstantExtraction
            | OperatorId::StringEncoding
            | OperatorId::StringSplitting => Family::Obfuscate,
            _ => Family::Deobfuscate,
        }
    }

    /// The deobfuscate operator declared as this operator's best-effort inverse.
    pub fn inverse(self) -> Option<OperatorId> {
        self.descriptor().and_then(|d| d.inverse)
    }

    /// For a deobfuscate operator, the obfuscate operator it undoes. For an
    /// obfuscate operator, itself.
    pub fn obfuscate_counterpart(self) -> OperatorId {
        match self.family() {
            Family::Obfuscate => self,
            Family::Deobfuscate => DESCRIPTORS
                .iter()
                .find(|d| d.inverse == Some(self))
                .map_or(self, |d| d.id),
        }
    }

    /// Whether the operator is only offered on its own, outside the pipeline.
    pub fn is_standalone(self) -> bool {
        self.descriptor().is_some_and(|d| d.standalone)
    }

    /// Static metadata for obfuscate operators; `None` for the deobfuscate family.
    pub fn descriptor(self) -> Option<&'static OperatorDescriptor> {
        DESCRIPTORS.iter().find(|d| d.id == self)
    }

    /// The operator implementation.
    pub fn transform(self) -> &'static dyn Transform {
        match self {
            OperatorId::NumericDiffusion => &NumericDiffusion,
            OperatorId::OpaquePredicate => &OpaquePredicate,
            OperatorId::DeadCodeInsertion => &DeadCodeInsertion,
            OperatorId::IdentifierRenaming => &IdentifierRenaming,
            OperatorId::ControlFlowRestructuring => &ControlFlowRestructuring,
            OperatorId::StringConstantExtraction => &StringConstantExtraction,
            OperatorId::StringEncoding => &StringEncoding,
            OperatorId::StringSplitting => &StringSplitting,
            OperatorId::NumericSimplification => &NumericSimplification,
            OperatorId::PredicateSimplification => &PredicateSimplification,
            OperatorId::DeadCodeRemoval => &DeadCodeRemoval,
            OperatorId::ControlFlowSimplification => &ControlFlowSimplification,
            OperatorId::ConstantInlining => &ConstantInlining,
        }
    }
}

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperatorId {
    type Err = Error;

    /// Accepts the kebab-case name, its snake_case spelling, or a short alias.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Some(id) = OperatorId::ALL.into_iter().find(|id| id.name() == key) {
            return Ok(id);
        }
        match key.as_str() {
            "numbers" | "arithmetic" => Ok(OperatorId::NumericDiffusion),
            "predicates" | "opaque-pred" => Ok(OperatorId::OpaquePredicate),
            "dead-code" => Ok(OperatorId::DeadCodeInsertion),
            "variables" | "rename" => Ok(OperatorId::IdentifierRenaming),
            "control-flow" => Ok(OperatorId::ControlFlowRestructuring),
            "string-constants" | "constants" => Ok(OperatorId::StringConstantExtraction),
            "encoding" | "encryption" => Ok(OperatorId::StringEncoding),
            "splitting" | "split" => Ok(OperatorId::StringSplitting),
            _ => Err(Error::UnknownOperator(s.trim().to_string())),
        }
    }
}

/// Pairing and matching metadata for one obfuscate operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorDescriptor {
    pub id: OperatorId,
    /// `None` for operators offered without an inverse.
    pub inverse: Option<OperatorId>,
    /// Offered only on its own, never scheduled by the pipeline.
    pub standalone: bool,
    /// The fragment shape the operator rewrites.
    pub pattern: PatternKind,
}

pub static DESCRIPTORS: [OperatorDescriptor; 8] = [
    OperatorDescriptor {
        id: OperatorId::NumericDiffusion,
        inverse: Some(OperatorId::NumericSimplification),
        standalone: false,
        pattern: PatternKind::IntegerLiteral,
    },
    OperatorDescriptor {
        id: OperatorId::OpaquePredicate,
        inverse: Some(OperatorId::PredicateSimplification),
        standalone: false,
        pattern: PatternKind::LiteralTrueCondition,
    },
    OperatorDescriptor {
        id: OperatorId::DeadCodeInsertion,
        inverse: Some(OperatorId::DeadCodeRemoval),
        standalone: false,
        pattern: PatternKind::FunctionOpening,
    },
    OperatorDescriptor {
        id: OperatorId::IdentifierRenaming,
        inverse: None,
        standalone: false,
        pattern: PatternKind::BindingDeclaration,
    },
    OperatorDescriptor {
        id: OperatorId::ControlFlowRestructuring,
        inverse: Some(OperatorId::ControlFlowSimplification),
        standalone: false,
        pattern: PatternKind::IfElse,
    },
    OperatorDescriptor {
        id: OperatorId::StringConstantExtraction,
        inverse: Some(OperatorId::ConstantInlining),
        standalone: false,
        pattern: PatternKind::StringLiteral,
    },
    OperatorDescriptor {
        id: OperatorId::StringEncoding,
        inverse: None,
        standalone: true,
        pattern: PatternKind::StringLiteral,
    },
    OperatorDescriptor {
        id: OperatorId::StringSplitting,
        inverse: None,
        standalone: true,
        pattern: PatternKind::StringLiteral,
    },
];

/// Enabled/disabled flag per obfuscate operator.
///
/// The same selection drives both directions: obfuscation runs the enabled
/// operators, deobfuscation runs their inverses. Iteration order carries no
/// meaning; the pipeline fixes execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorSelection {
    flags: BTreeMap<OperatorId, bool>,
}

impl OperatorSelection {
    fn uniform(enabled: bool) -> Self {
        Self {
            flags: DESCRIPTORS
                .iter()
                .filter(|d| !d.standalone)
                .map(|d| (d.id, enabled))
                .collect(),
        }
    }

    /// Nothing enabled.
    pub fn none() -> Self {
        Self::uniform(false)
    }

    /// Every pipeline operator enabled. Standalone operators are never part of
    /// a selection.
    pub fn all() -> Self {
        Self::uniform(true)
    }

    /// Only `ids` enabled.
    pub fn only(ids: impl IntoIterator<Item = OperatorId>) -> Self {
        ids.into_iter()
            .fold(Self::none(), |selection, id| selection.with(id, true))
    }

    /// Builder form of [`OperatorSelection::set`].
    pub fn with(mut self, id: OperatorId, enabled: bool) -> Self {
        self.set(id, enabled);
        self
    }

    /// Sets the flag for `id`. A deobfuscate id toggles the operator it inverts;
    /// standalone operators are ignored.
    pub fn set(&mut self, id: OperatorId, enabled: bool) {
        if let Some(flag) = self.flags.get_mut(&id.obfuscate_counterpart()) {
            *flag = enabled;
        }
    }

    pub fn is_enabled(&self, id: OperatorId) -> bool {
        self.flags
            .get(&id.obfuscate_counterpart())
            .copied()
            .unwrap_or(false)
    }

    /// Enabled operator ids.
    pub fn enabled(&self) -> impl Iterator<Item = OperatorId> + '_ {
        self.flags
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(id, _)| *id)
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }
}

impl Default for OperatorSelection {
    fn default() -> Self {
        Self::only([
            OperatorId::NumericDiffusion,
            OperatorId::OpaquePredicate,
            OperatorId::DeadCodeInsertion,
            OperatorId::IdentifierRenaming,
        ])
    }
}

impl FromStr for OperatorSelection {
    type Err = Error;

    /// Parses a comma-separated list of operator names into a selection with
    /// exactly those operators enabled.
    fn from_str(list: &str) -> Result<Self> {
        list.split(',')
            .filter(|name| !name.trim().is_empty())
            .map(|name| {
                let id = OperatorId::from_str(name)?;
                if id.is_standalone() {
                    return Err(Error::StandaloneOperator(id.name().to_string()));
                }
                Ok(id)
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::only)
    }
}
