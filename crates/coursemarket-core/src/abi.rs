//! ABI summaries
//!
//! The loader passes an artifact's ABI through to the binding untouched. These
//! helpers only describe it, for tooling that lists what a contract exposes.

use alloy::json_abi::{Function, JsonAbi, Param, StateMutability as AlloyStateMutability};
use serde::{Deserialize, Serialize};

use crate::types::StateMutability;

// =============================================================================
// Function Types
// =============================================================================

/// Contract functions separated by read/write, each sorted by name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedFunctions {
    pub read: Vec<FunctionInfo>,
    pub write: Vec<FunctionInfo>,
}

impl ParsedFunctions {
    /// Categorize every function overload in `abi`
    pub fn from_abi(abi: &JsonAbi) -> Self {
        let (mut read, mut write): (Vec<_>, Vec<_>) = abi
            .functions()
            .map(FunctionInfo::from_abi_function)
            .partition(|f| f.is_read_only());

        read.sort_by(|a, b| a.name.cmp(&b.name));
        write.sort_by(|a, b| a.name.cmp(&b.name));

        Self { read, write }
    }

    pub fn len(&self) -> usize {
        self.read.len() + self.write.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read.is_empty() && self.write.is_empty()
    }
}

/// Information about a single contract function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    pub signature: String,
    pub inputs: Vec<ParamInfo>,
    pub outputs: Vec<ParamInfo>,
    pub state_mutability: StateMutability,
}

impl FunctionInfo {
    pub fn from_abi_function(func: &Function) -> Self {
        Self {
            name: func.name.clone(),
            signature: func.signature(),
            inputs: func.inputs.iter().map(ParamInfo::from_abi_param).collect(),
            outputs: func.outputs.iter().map(ParamInfo::from_abi_param).collect(),
            state_mutability: convert_state_mutability(func.state_mutability),
        }
    }

    /// Check if this is a read-only function (view or pure)
    pub fn is_read_only(&self) -> bool {
        self.state_mutability.is_read_only()
    }

    pub fn is_payable(&self) -> bool {
        self.state_mutability.is_payable()
    }
}

/// A function parameter, with tuple components flattened into a tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamInfo {
    pub name: String,
    pub param_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ParamInfo>>,
}

impl ParamInfo {
    pub fn from_abi_param(param: &Param) -> Self {
        Self {
            name: param.name.clone(),
            param_type: param.ty.to_string(),
            components: if param.components.is_empty() {
                None
            } else {
                Some(param.components.iter().map(Self::from_abi_param).collect())
            },
        }
    }
}

/// Names of the events declared in `abi`, sorted and de-duplicated
pub fn event_names(abi: &JsonAbi) -> Vec<String> {
    let mut names: Vec<String> = abi.events.keys().cloned().collect();
    names.sort();
    names
}

fn convert_state_mutability(sm: AlloyStateMutability) -> StateMutability {
    match sm {
        AlloyStateMutability::Pure => StateMutability::Pure,
        AlloyStateMutability::View => StateMutability::View,
        AlloyStateMutability::NonPayable => StateMutability::NonPayable,
        AlloyStateMutability::Payable => StateMutability::Payable,
    }
}
