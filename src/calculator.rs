use log::{debug, warn};

use crate::commands;
use crate::errors::*;
use crate::expr::*;
use crate::memory::{History, MemoryStack};
use crate::resolver::Resolver;
use crate::settings::Settings;
use crate::state::CalculatorState;
use crate::value::*;

/// Desk calculator: the current state plus memory and history. Commands are
/// dispatched to the state handlers and the returned state replaces the
/// current one
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    resolver: Resolver,
    state: CalculatorState,
    memory: MemoryStack,
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let memory = MemoryStack::new(settings.memory_limit);
        let history = History::new(settings.history_limit);
        Calculator {
            resolver: Resolver::new(settings),
            state: CalculatorState::new(),
            memory,
            history,
        }
    }

    pub fn settings(&self) -> &Settings {
        self.resolver.settings()
    }

    fn apply(&mut self, command: &str, next: EngineResult<CalculatorState>) -> EngineResult<&CalculatorState> {
        match next {
            Ok(st) => {
                self.state = st;
                debug!("{}: {:?}", command, self.state.phase());
                Ok(&self.state)
            }
            Err(e) => {
                warn!("{}: {}", command, e);
                Err(e)
            }
        }
    }

    /// Digit entry: `text` is appended to the number being typed
    pub fn number(&mut self, text: &str) -> EngineResult<&CalculatorState> {
        let next = commands::number(&self.state, text);
        self.apply("number", next)
    }

    pub fn binary(&mut self, op: BinaryOp) -> EngineResult<&CalculatorState> {
        let next = commands::binary(&self.resolver, &self.state, op);
        self.apply(op.name(), next)
    }

    pub fn unary(&mut self, op: UnaryOp) -> EngineResult<&CalculatorState> {
        let next = commands::unary(&self.resolver, &self.state, op);
        self.apply(op.name(), next)
    }

    /// "=". The produced equation is added to the history
    pub fn resolve(&mut self) -> &CalculatorState {
        self.state = commands::resolve(&self.resolver, &self.state);
        if let Some(eq) = self.state.last_equation() {
            debug!("=: {}", eq);
            self.history.push(eq.clone());
        }
        &self.state
    }

    pub fn clear(&mut self) -> &CalculatorState {
        self.state = commands::clear(&self.state);
        debug!("C: {:?}", self.state.phase());
        &self.state
    }

    pub fn clear_entry(&mut self) -> &CalculatorState {
        self.state = commands::clear_entry(&self.state);
        debug!("CE: {:?}", self.state.phase());
        &self.state
    }

    pub fn current_state(&self) -> &CalculatorState {
        &self.state
    }

    /// Value of the operand in focus
    pub fn current_value(&self) -> CalcResult {
        self.state.current_value(&self.resolver)
    }

    /// Text for the display: the number being typed, the current value, or
    /// the error message after a failed command
    pub fn display(&self) -> String {
        if self.state.is_errored() {
            return self.state.last_status().to_string();
        }
        if self.state.has_entry() {
            return self.state.pending_input().to_string();
        }
        match self.current_value() {
            Ok(v) => format_decimal(&v),
            Err(e) => e.to_string(),
        }
    }

    // the value memory commands write, refused in an errored state
    fn memory_operand(&self) -> EngineResult<Decimal> {
        if self.state.is_errored() {
            warn!("memory: {}", self.state.last_status());
            return Err(EngineError::IllegalState(self.state.last_status()));
        }
        self.current_value().map_err(|e| EngineError::IllegalState(Status::from(e)))
    }

    /// "MS"
    pub fn memory_store(&mut self) -> EngineResult<()> {
        let v = self.memory_operand()?;
        debug!("MS: {}", format_decimal(&v));
        self.memory.store(v);
        Ok(())
    }

    /// "MR"
    pub fn memory_recall(&self) -> Option<Decimal> {
        self.memory.recall().cloned()
    }

    /// "M+"
    pub fn memory_add(&mut self) -> EngineResult<()> {
        let v = self.memory_operand()?;
        self.memory.add(&v);
        Ok(())
    }

    /// "M-"
    pub fn memory_subtract(&mut self) -> EngineResult<()> {
        let v = self.memory_operand()?;
        self.memory.subtract(&v);
        Ok(())
    }

    /// "MC"
    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }

    pub fn memory_items(&self) -> &[Decimal] {
        self.memory.items()
    }

    pub fn memory_add_at(&mut self, idx: usize) -> EngineResult<()> {
        let v = self.memory_operand()?;
        self.memory.add_at(idx, &v)
    }

    pub fn memory_subtract_at(&mut self, idx: usize) -> EngineResult<()> {
        let v = self.memory_operand()?;
        self.memory.subtract_at(idx, &v)
    }

    pub fn memory_clear_at(&mut self, idx: usize) -> EngineResult<()> {
        self.memory.clear_at(idx)
    }

    pub fn history(&self) -> &[Equation] {
        self.history.entries()
    }

    pub fn history_clear(&mut self) {
        self.history.clear();
    }

    /// Loads the result of a history entry as a freshly typed number
    pub fn recall_history(&mut self, idx: usize) -> EngineResult<&CalculatorState> {
        let next = match self.history.get(idx) {
            None => Err(EngineError::OutOfRange(idx)),
            Some(eq) => match eq.value() {
                Some(v) => Ok(commands::enter_value(&self.state, v)),
                None => Err(EngineError::IllegalState(eq.status())),
            },
        };
        self.apply("history", next)
    }
}
