//! Source variable name to synthetic name mapping.

use std::collections::HashMap;

use crate::ffa::statement::SyntheticVar;

/// Assigns `$x0`, `$x1`, ... to variable names in first-seen order.
#[derive(Debug, Default)]
pub struct VariableBank {
    names: HashMap<String, SyntheticVar>,
}

impl VariableBank {
    /// Creates an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the synthetic name for `name`, allocating one on first use.
    pub fn resolve(&mut self, name: &str) -> SyntheticVar {
        if let Some(var) = self.names.get(name) {
            return *var;
        }
        let var = SyntheticVar(self.names.len());
        self.names.insert(name.to_string(), var);
        var
    }

    /// Looks up `name` without allocating.
    pub fn get(&self, name: &str) -> Option<SyntheticVar> {
        self.names.get(name).copied()
    }

    /// Number of distinct names seen.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no name has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
