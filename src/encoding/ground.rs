use crate::encoding::{SmallTuple, SymbolTables};

/// A ground fact: a predicate applied to constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fluent {
    predicate: usize,
    arguments: SmallTuple,
}

impl Fluent {
    pub fn new(predicate: usize, arguments: SmallTuple) -> Self {
        Self {
            predicate,
            arguments,
        }
    }

    #[inline(always)]
    pub fn predicate(&self) -> usize {
        self.predicate
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[usize] {
        self.arguments.as_slice()
    }

    pub fn human_readable(&self, symbols: &SymbolTables) -> String {
        human_readable(symbols.predicate_name(self.predicate), self.arguments(), symbols)
    }
}

/// A ground task: a task symbol applied to constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroundTask {
    symbol: usize,
    arguments: SmallTuple,
}

impl GroundTask {
    pub fn new(symbol: usize, arguments: SmallTuple) -> Self {
        Self { symbol, arguments }
    }

    #[inline(always)]
    pub fn symbol(&self) -> usize {
        self.symbol
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[usize] {
        self.arguments.as_slice()
    }

    pub fn human_readable(&self, symbols: &SymbolTables) -> String {
        human_readable(symbols.task_name(self.symbol), self.arguments(), symbols)
    }
}

pub(crate) fn human_readable(name: &str, arguments: &[usize], symbols: &SymbolTables) -> String {
    let mut result = format!("({}", name);
    for &argument in arguments {
        result.push(' ');
        result.push_str(symbols.constant_name(argument));
    }
    result.push(')');
    result
}
