//! Dispatch table for FEEL built-in functions.

use feel_temporal::{TemporalContext, TemporalError, TemporalResult};
use std::collections::HashMap;

use crate::value::FeelValue;

/// Signature shared by every built-in function.
pub type BuiltinFn = fn(&TemporalContext, &[FeelValue]) -> TemporalResult<FeelValue>;

/// Built-in functions by FEEL name.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<&'static str, BuiltinFn>,
}

impl FunctionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Creates a table holding the built-ins implemented in this crate.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.register("time", time_builtin);
        table
    }

    /// ## Summary
    /// Registers `function` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &'static str, function: BuiltinFn) {
        if self.functions.insert(name, function).is_some() {
            tracing::debug!(name, "Replaced built-in function");
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<BuiltinFn> {
        self.functions.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// ## Summary
    /// Invokes the built-in registered under `name`.
    ///
    /// ## Errors
    /// Returns `TemporalError::UnknownFunction` if nothing is registered under
    /// `name`, otherwise whatever the function returns.
    pub fn call(
        &self,
        name: &str,
        ctx: &TemporalContext,
        args: &[FeelValue],
    ) -> TemporalResult<FeelValue> {
        let function = self
            .get(name)
            .ok_or_else(|| TemporalError::UnknownFunction(name.to_string()))?;
        function(ctx, args)
    }
}

fn time_builtin(ctx: &TemporalContext, args: &[FeelValue]) -> TemporalResult<FeelValue> {
    crate::time::time(ctx, args).map(FeelValue::Time)
}
