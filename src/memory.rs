use crate::errors::*;
use crate::expr::Equation;
use crate::value::Decimal;

/// Memory slots, the most recent first
#[derive(Clone, Debug, Default)]
pub struct MemoryStack {
    items: Vec<Decimal>,
    limit: Option<usize>,
}

impl MemoryStack {
    pub fn new(limit: Option<usize>) -> Self {
        MemoryStack { items: Vec::new(), limit }
    }

    pub fn items(&self) -> &[Decimal] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// "MS"
    pub fn store(&mut self, v: Decimal) {
        self.items.insert(0, v);
        if let Some(limit) = self.limit {
            self.items.truncate(limit);
        }
    }

    /// "MR"
    pub fn recall(&self) -> Option<&Decimal> {
        self.items.first()
    }

    /// "M+": adds to the most recent slot, stores when memory is empty
    pub fn add(&mut self, v: &Decimal) {
        match self.items.first_mut() {
            Some(head) => *head += v,
            None => self.store(v.clone()),
        }
    }

    /// "M-": subtracts from the most recent slot, stores when memory is empty
    pub fn subtract(&mut self, v: &Decimal) {
        match self.items.first_mut() {
            Some(head) => *head -= v,
            None => self.store(v.clone()),
        }
    }

    /// "MC"
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn slot(&mut self, idx: usize) -> EngineResult<&mut Decimal> {
        self.items.get_mut(idx).ok_or(EngineError::OutOfRange(idx))
    }

    pub fn add_at(&mut self, idx: usize, v: &Decimal) -> EngineResult<()> {
        *self.slot(idx)? += v;
        Ok(())
    }

    pub fn subtract_at(&mut self, idx: usize, v: &Decimal) -> EngineResult<()> {
        *self.slot(idx)? -= v;
        Ok(())
    }

    pub fn clear_at(&mut self, idx: usize) -> EngineResult<()> {
        if idx >= self.items.len() {
            return Err(EngineError::OutOfRange(idx));
        }
        self.items.remove(idx);
        Ok(())
    }
}

/// Resolved equations, the most recent first
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<Equation>,
    limit: Option<usize>,
}

impl History {
    pub fn new(limit: Option<usize>) -> Self {
        History { entries: Vec::new(), limit }
    }

    pub fn entries(&self) -> &[Equation] {
        &self.entries
    }

    pub fn get(&self, idx: usize) -> Option<&Equation> {
        self.entries.get(idx)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an equation unless it equals the most recent one.
    /// Returns `true` if the equation was added
    pub fn push(&mut self, eq: Equation) -> bool {
        if self.entries.first() == Some(&eq) {
            return false;
        }
        self.entries.insert(0, eq);
        if let Some(limit) = self.limit {
            self.entries.truncate(limit);
        }
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
