//! Symbol tables shared by every stage of the grounder.
//!
//! Types, constants, predicates and tasks are interned into dense, zero-based
//! indices. Once grounding is finished the tables are only read, e.g. to print
//! fluents and plans.

use crate::error::GroundingError;
use crate::parsed_types::{Name, Type, OBJECT_TYPE_NAME};
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone)]
pub struct SymbolTables {
    types: Vec<Name>,
    type_table: HashMap<Name, usize>,
    /// Direct supertypes of each type. A member of an either-type has the
    /// either-type as a supertype.
    supertypes: Vec<Vec<usize>>,
    /// Constants of each type, including the constants of its subtypes.
    domains: Vec<BTreeSet<usize>>,
    domains_closed: bool,

    constants: Vec<Name>,
    constant_table: HashMap<Name, usize>,
    constant_types: Vec<usize>,

    predicates: Vec<Name>,
    predicate_table: HashMap<Name, usize>,
    predicate_signatures: Vec<Vec<usize>>,

    tasks: Vec<Name>,
    task_table: HashMap<Name, usize>,
    task_signatures: Vec<Vec<usize>>,
    primitive_tasks: Vec<bool>,
}

impl Default for SymbolTables {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTables {
    /// Creates empty tables. The `object` type is always interned first.
    pub fn new() -> Self {
        let mut tables = Self {
            types: vec![],
            type_table: HashMap::new(),
            supertypes: vec![],
            domains: vec![],
            domains_closed: false,
            constants: vec![],
            constant_table: HashMap::new(),
            constant_types: vec![],
            predicates: vec![],
            predicate_table: HashMap::new(),
            predicate_signatures: vec![],
            tasks: vec![],
            task_table: HashMap::new(),
            task_signatures: vec![],
            primitive_tasks: vec![],
        };
        tables.intern_type(Name::new(OBJECT_TYPE_NAME));
        tables
    }

    pub fn object_type(&self) -> usize {
        0
    }

    pub fn intern_type(&mut self, name: Name) -> usize {
        if let Some(&index) = self.type_table.get(&name) {
            return index;
        }
        let index = self.types.len();
        self.types.push(name);
        self.type_table.insert(name, index);
        // Every type other than `object` is a subtype of `object`.
        self.supertypes
            .push(if index == 0 { vec![] } else { vec![0] });
        self.domains.push(BTreeSet::new());
        if self.domains_closed {
            self.close_type_domains();
        }
        index
    }

    /// Declares `supertype` as a direct supertype of `subtype`.
    pub fn add_supertype(&mut self, subtype: usize, supertype: usize) {
        if subtype == supertype || self.supertypes[subtype].contains(&supertype) {
            return;
        }
        self.supertypes[subtype].push(supertype);
        if self.domains_closed {
            self.close_type_domains();
        }
    }

    /// Interns the type `(either t1 ... tn)`. An either-type with a single
    /// member is that member.
    pub fn intern_either_type(&mut self, members: &[usize]) -> usize {
        let members: Vec<usize> = members.iter().copied().sorted().dedup().collect();
        if members.len() == 1 {
            return members[0];
        }
        let name = Name::from(format!(
            "either~{}",
            members.iter().map(|&t| self.types[t].as_str()).join("~")
        ));
        if let Some(&index) = self.type_table.get(&name) {
            return index;
        }
        let index = self.intern_type(name);
        for member in members {
            self.add_supertype(member, index);
        }
        index
    }

    /// Resolves a parsed type, interning either-types on the fly.
    pub fn resolve_type(&mut self, type_: &Type) -> Result<usize, GroundingError> {
        match type_ {
            Type::Exactly(primitive) => self
                .type_id(primitive.name())
                .ok_or(GroundingError::UnknownType(*primitive.name())),
            Type::EitherOf(primitives) => {
                let members = primitives
                    .iter()
                    .map(|p| self.type_id(p.name()).ok_or(GroundingError::UnknownType(*p.name())))
                    .collect::<Result<Vec<_>, _>>()?;
                if members.is_empty() {
                    return Ok(self.object_type());
                }
                Ok(self.intern_either_type(&members))
            }
        }
    }

    pub fn intern_constant(&mut self, name: Name, type_: usize) -> Result<usize, GroundingError> {
        if let Some(&index) = self.constant_table.get(&name) {
            if self.constant_types[index] != type_ {
                return Err(GroundingError::DefinitionConflict {
                    kind: "constant",
                    name,
                });
            }
            return Ok(index);
        }
        let index = self.constants.len();
        self.constants.push(name);
        self.constant_table.insert(name, index);
        self.constant_types.push(type_);
        if self.domains_closed {
            self.close_type_domains();
        }
        Ok(index)
    }

    pub fn intern_predicate(
        &mut self,
        name: Name,
        signature: Vec<usize>,
    ) -> Result<usize, GroundingError> {
        if let Some(&index) = self.predicate_table.get(&name) {
            if self.predicate_signatures[index] != signature {
                return Err(GroundingError::DefinitionConflict {
                    kind: "predicate",
                    name,
                });
            }
            return Ok(index);
        }
        let index = self.predicates.len();
        self.predicates.push(name);
        self.predicate_table.insert(name, index);
        self.predicate_signatures.push(signature);
        Ok(index)
    }

    pub fn intern_task(
        &mut self,
        name: Name,
        signature: Vec<usize>,
        is_primitive: bool,
    ) -> Result<usize, GroundingError> {
        if let Some(&index) = self.task_table.get(&name) {
            if self.task_signatures[index] != signature
                || self.primitive_tasks[index] != is_primitive
            {
                return Err(GroundingError::DefinitionConflict { kind: "task", name });
            }
            return Ok(index);
        }
        let index = self.tasks.len();
        self.tasks.push(name);
        self.task_table.insert(name, index);
        self.task_signatures.push(signature);
        self.primitive_tasks.push(is_primitive);
        Ok(index)
    }

    /// Computes the constants of every type, following the type hierarchy
    /// upwards from the declared type of each constant. Later interning keeps
    /// the domains up to date.
    pub fn close_type_domains(&mut self) {
        for domain in &mut self.domains {
            domain.clear();
        }
        for (constant, &type_) in self.constant_types.iter().enumerate() {
            let mut stack = vec![type_];
            let mut visited = BTreeSet::new();
            while let Some(current) = stack.pop() {
                if !visited.insert(current) {
                    continue;
                }
                self.domains[current].insert(constant);
                stack.extend(self.supertypes[current].iter().copied());
            }
        }
        self.domains_closed = true;
    }

    /// Returns true if `subtype` is `supertype` or one of its descendants.
    pub fn is_subtype(&self, subtype: usize, supertype: usize) -> bool {
        let mut stack = vec![subtype];
        let mut visited = BTreeSet::new();
        while let Some(current) = stack.pop() {
            if current == supertype {
                return true;
            }
            if visited.insert(current) {
                stack.extend(self.supertypes[current].iter().copied());
            }
        }
        false
    }

    /// Returns true if the constant can be substituted for a parameter of the
    /// given type.
    pub fn is_of_type(&self, constant: usize, type_: usize) -> bool {
        self.is_subtype(self.constant_types[constant], type_)
    }

    pub fn type_id(&self, name: &Name) -> Option<usize> {
        self.type_table.get(name).copied()
    }

    pub fn constant_id(&self, name: &Name) -> Option<usize> {
        self.constant_table.get(name).copied()
    }

    pub fn predicate_id(&self, name: &Name) -> Option<usize> {
        self.predicate_table.get(name).copied()
    }

    pub fn task_id(&self, name: &Name) -> Option<usize> {
        self.task_table.get(name).copied()
    }

    pub fn type_name(&self, index: usize) -> &str {
        self.types[index].as_str()
    }

    pub fn constant_name(&self, index: usize) -> &str {
        self.constants[index].as_str()
    }

    pub fn predicate_name(&self, index: usize) -> &str {
        self.predicates[index].as_str()
    }

    pub fn task_name(&self, index: usize) -> &str {
        self.tasks[index].as_str()
    }

    pub fn constant_type(&self, index: usize) -> usize {
        self.constant_types[index]
    }

    pub fn domain(&self, type_: usize) -> &BTreeSet<usize> {
        &self.domains[type_]
    }

    pub fn predicate_signature(&self, index: usize) -> &[usize] {
        &self.predicate_signatures[index]
    }

    pub fn task_signature(&self, index: usize) -> &[usize] {
        &self.task_signatures[index]
    }

    pub fn is_primitive(&self, task: usize) -> bool {
        self.primitive_tasks[task]
    }

    pub fn num_types(&self) -> usize {
        self.types.len()
    }

    pub fn num_constants(&self) -> usize {
        self.constants.len()
    }

    pub fn num_predicates(&self) -> usize {
        self.predicates.len()
    }

    pub fn num_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Task symbols backed by actions.
    pub fn primitive_task_symbols(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.tasks.len()).filter(|&t| self.primitive_tasks[t])
    }

    /// Task symbols decomposed by methods.
    pub fn compound_task_symbols(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.tasks.len()).filter(|&t| !self.primitive_tasks[t])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        let mut symbols = SymbolTables::new();
        let block = symbols.intern_type(Name::new("block"));
        assert_eq!(symbols.intern_type(Name::new("block")), block);
        assert_eq!(symbols.intern_type(Name::new("object")), 0);

        let a = symbols.intern_constant(Name::new("a"), block).unwrap();
        assert_eq!(symbols.intern_constant(Name::new("a"), block).unwrap(), a);

        let clear = symbols
            .intern_predicate(Name::new("clear"), vec![block])
            .unwrap();
        assert_eq!(
            symbols
                .intern_predicate(Name::new("clear"), vec![block])
                .unwrap(),
            clear
        );

        let pickup = symbols
            .intern_task(Name::new("pickup"), vec![block], true)
            .unwrap();
        assert_eq!(
            symbols
                .intern_task(Name::new("pickup"), vec![block], true)
                .unwrap(),
            pickup
        );
        assert_eq!(symbols.num_types(), 2);
        assert_eq!(symbols.num_constants(), 1);
    }

    #[test]
    fn conflicting_signatures_are_rejected() {
        let mut symbols = SymbolTables::new();
        let block = symbols.intern_type(Name::new("block"));
        symbols
            .intern_predicate(Name::new("clear"), vec![block])
            .unwrap();
        assert_eq!(
            symbols.intern_predicate(Name::new("clear"), vec![block, block]),
            Err(GroundingError::DefinitionConflict {
                kind: "predicate",
                name: Name::new("clear"),
            })
        );

        symbols
            .intern_task(Name::new("move"), vec![block], false)
            .unwrap();
        assert!(matches!(
            symbols.intern_task(Name::new("move"), vec![block], true),
            Err(GroundingError::DefinitionConflict { kind: "task", .. })
        ));

        symbols.intern_constant(Name::new("a"), block).unwrap();
        assert!(symbols.intern_constant(Name::new("a"), 0).is_err());
    }

    #[test]
    fn domains_follow_the_type_hierarchy() {
        let mut symbols = SymbolTables::new();
        let vehicle = symbols.intern_type(Name::new("vehicle"));
        let truck = symbols.intern_type(Name::new("truck"));
        let place = symbols.intern_type(Name::new("place"));
        symbols.add_supertype(truck, vehicle);

        let t1 = symbols.intern_constant(Name::new("t1"), truck).unwrap();
        let v1 = symbols.intern_constant(Name::new("v1"), vehicle).unwrap();
        let p1 = symbols.intern_constant(Name::new("p1"), place).unwrap();
        symbols.close_type_domains();

        assert_eq!(symbols.domain(truck), &BTreeSet::from([t1]));
        assert_eq!(symbols.domain(vehicle), &BTreeSet::from([t1, v1]));
        assert_eq!(symbols.domain(0), &BTreeSet::from([t1, v1, p1]));
        assert!(symbols.is_of_type(t1, vehicle));
        assert!(!symbols.is_of_type(v1, truck));

        let either = symbols.intern_either_type(&[truck, place]);
        assert_eq!(symbols.domain(either), &BTreeSet::from([t1, p1]));
        assert_eq!(symbols.intern_either_type(&[place, truck]), either);
        assert_eq!(symbols.intern_either_type(&[place]), place);
    }
}
