// ============================================================================
// Calculator Engine
// Chained four-function arithmetic with memory over radix numerals
// ============================================================================

use crate::numeric::{
    char_to_digit, digit_to_char, radix_to_real, real_to_radix, Radix, RadixError, RadixResult,
    DEFAULT_PRECISION, DELIMITER,
};
use chrono::Utc;
use std::fmt;

/// Divisors within this distance of zero are treated as zero.
const ZERO_EPSILON: f64 = 1e-15;

/// Fractional digit cap when rendering results, bounding the
/// fraction-generation loop.
const RESULT_PRECISION: i32 = DEFAULT_PRECISION;

/// Most recent history entries exposed for display.
const HISTORY_DISPLAY_CAP: usize = 50;

/// Binary operators supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Apply the operator over real values.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when dividing by a value within epsilon
    /// of zero.
    fn apply(self, lhs: f64, rhs: f64) -> RadixResult<f64> {
        match self {
            BinaryOp::Add => Ok(lhs + rhs),
            BinaryOp::Subtract => Ok(lhs - rhs),
            BinaryOp::Multiply => Ok(lhs * rhs),
            BinaryOp::Divide => {
                if rhs.abs() < ZERO_EPSILON {
                    Err(RadixError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            },
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
        };
        write!(f, "{}", symbol)
    }
}

/// Whether the engine works with whole numbers only or with reals.
///
/// Integer mode disables the delimiter key and renders every result with
/// zero fractional digits; nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculatorMode {
    Integer,
    #[default]
    Real,
}

/// Stateful four-function calculator over numeral strings in one base.
///
/// Implements immediate per-keystroke entry of the current operand,
/// deferred application of the pending operator, repeat-equals semantics,
/// and a four-slot memory. All arithmetic round-trips through `f64` via
/// the conversion primitives.
///
/// # Example
/// ```
/// use numeral_engine::engine::{BinaryOp, CalculatorEngine};
///
/// let mut calc = CalculatorEngine::new();
/// calc.digit('5').unwrap();
/// calc.operator(BinaryOp::Add).unwrap();
/// calc.digit('3').unwrap();
/// assert_eq!(calc.equals().unwrap(), "8");
/// // Bare equals repeats the last operation against the result
/// assert_eq!(calc.equals().unwrap(), "11");
/// ```
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    current: String,
    accumulator: Option<String>,
    pending_op: Option<BinaryOp>,
    last_op: Option<BinaryOp>,
    /// Second operand of the last evaluation, retained for repeat-equals
    last_operand: Option<String>,
    last_result: Option<String>,
    memory: String,
    memory_active: bool,
    awaiting_operand: bool,
    just_evaluated: bool,
    base: Radix,
    mode: CalculatorMode,
    history: Vec<String>,
}

impl CalculatorEngine {
    /// Create a decimal, real-mode calculator.
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            accumulator: None,
            pending_op: None,
            last_op: None,
            last_operand: None,
            last_result: None,
            memory: "0".to_string(),
            memory_active: false,
            awaiting_operand: true,
            just_evaluated: false,
            base: Radix::DECIMAL,
            mode: CalculatorMode::Real,
            history: Vec::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current operand as displayed.
    pub fn current_text(&self) -> &str {
        &self.current
    }

    pub fn base(&self) -> Radix {
        self.base
    }

    pub fn mode(&self) -> CalculatorMode {
        self.mode
    }

    pub fn memory_active(&self) -> bool {
        self.memory_active
    }

    pub fn memory_text(&self) -> &str {
        &self.memory
    }

    /// Append-only operation log, oldest first. Storage is never truncated
    /// by the engine.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The most recent entries, capped for display purposes.
    pub fn recent_history(&self) -> &[String] {
        let start = self.history.len().saturating_sub(HISTORY_DISPLAY_CAP);
        &self.history[start..]
    }

    // ========================================================================
    // Entry
    // ========================================================================

    /// Enter one character of the current operand: a digit of the active
    /// base (case-insensitive, canonicalized to uppercase) or the
    /// delimiter. Typing after an operator or a result begins a new
    /// operand.
    ///
    /// # Errors
    /// - `InvalidCharacter` for characters outside the digit alphabet
    /// - `InvalidDigit` for digits at or above the active base
    pub fn digit(&mut self, ch: char) -> RadixResult<&str> {
        if ch == DELIMITER {
            // Integer mode has no delimiter key
            if self.mode == CalculatorMode::Integer {
                return Ok(self.current_text());
            }
            self.begin_entry_if_needed();
            if !self.current.contains(DELIMITER) {
                self.current.push(DELIMITER);
            }
            return Ok(self.current_text());
        }

        let digit = char_to_digit(ch)?;
        if !self.base.contains_digit(digit) {
            return Err(RadixError::InvalidDigit(digit));
        }

        self.begin_entry_if_needed();
        let canonical = digit_to_char(digit)?;
        if self.current == "0" {
            self.current.clear();
            self.current.push(canonical);
        } else {
            self.current.push(canonical);
        }
        Ok(self.current_text())
    }

    /// Remove the last character of the current operand. No-op while
    /// awaiting a new operand or right after an evaluation, so a frozen
    /// result cannot be edited.
    pub fn backspace(&mut self) -> &str {
        if self.awaiting_operand || self.just_evaluated {
            return self.current_text();
        }
        self.current.pop();
        if self.current.is_empty() {
            self.current.push('0');
        }
        self.current_text()
    }

    /// Reset only the current operand.
    pub fn clear_entry(&mut self) -> &str {
        self.current.clear();
        self.current.push('0');
        self.awaiting_operand = false;
        self.just_evaluated = false;
        self.current_text()
    }

    /// Full reset of the arithmetic state. Memory survives by design; only
    /// `memory_clear` touches it.
    pub fn clear_all(&mut self) -> &str {
        self.current.clear();
        self.current.push('0');
        self.accumulator = None;
        self.pending_op = None;
        self.last_op = None;
        self.last_operand = None;
        self.last_result = None;
        self.awaiting_operand = true;
        self.just_evaluated = false;
        self.current_text()
    }

    // ========================================================================
    // Operators
    // ========================================================================

    /// Press a binary operator.
    ///
    /// The first press captures the current operand as the accumulator.
    /// A press with a fully entered second operand evaluates the pending
    /// operator first; pressing twice in a row merely replaces the pending
    /// operator.
    ///
    /// # Errors
    /// Propagates `DivisionByZero` from the implied evaluation (which also
    /// resets the engine).
    pub fn operator(&mut self, op: BinaryOp) -> RadixResult<&str> {
        if self.accumulator.is_none() {
            self.accumulator = Some(self.current.clone());
        } else if !self.awaiting_operand {
            let rhs = self.current.clone();
            self.evaluate_with(rhs)?;
        }

        self.pending_op = Some(op);
        self.last_op = Some(op);
        self.awaiting_operand = true;
        self.just_evaluated = false;
        Ok(self.current_text())
    }

    /// Press `=`.
    ///
    /// Evaluates the pending operator if an accumulator exists, then
    /// re-arms the same operator so a bare repeated `=` applies
    /// `result op last_operand` again (repeat-equals semantics).
    ///
    /// # Errors
    /// Propagates `DivisionByZero` (after the engine resets itself).
    pub fn equals(&mut self) -> RadixResult<&str> {
        if self.accumulator.is_some() && self.pending_op.is_some() {
            let rhs = if self.awaiting_operand {
                // No new operand was typed: repeat against the retained one
                self.last_operand
                    .clone()
                    .unwrap_or_else(|| self.current.clone())
            } else {
                self.current.clone()
            };
            self.evaluate_with(rhs)?;
            self.pending_op = self.last_op;
            self.awaiting_operand = true;
        }
        Ok(self.current_text())
    }

    /// Square the current operand in place.
    pub fn square(&mut self) -> RadixResult<&str> {
        let value = self.operand_value()?;
        let result = self.render(value * value)?;
        self.log_operation(format!("sqr({}) = {}", self.current, result));
        self.apply_unary_result(result);
        Ok(self.current_text())
    }

    /// Replace the current operand with its reciprocal.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for an operand within epsilon of zero;
    /// the engine state is left untouched in that case.
    pub fn reciprocal(&mut self) -> RadixResult<&str> {
        let value = self.operand_value()?;
        if value.abs() < ZERO_EPSILON {
            return Err(RadixError::DivisionByZero);
        }
        let result = self.render(1.0 / value)?;
        self.log_operation(format!("1/({}) = {}", self.current, result));
        self.apply_unary_result(result);
        Ok(self.current_text())
    }

    // ========================================================================
    // Memory
    // ========================================================================

    /// Reset memory to zero and deactivate it.
    pub fn memory_clear(&mut self) {
        self.memory.clear();
        self.memory.push('0');
        self.memory_active = false;
    }

    /// Copy the current operand into memory and activate it.
    pub fn memory_store(&mut self) {
        self.memory = self.current.clone();
        self.memory_active = true;
    }

    /// Load memory into the current operand, as if freshly typed. No-op
    /// while memory is inactive.
    pub fn memory_recall(&mut self) -> &str {
        if self.memory_active {
            self.current = self.memory.clone();
            self.awaiting_operand = false;
            self.just_evaluated = false;
        }
        self.current_text()
    }

    /// Add the current operand into memory; acts as a store when memory
    /// is inactive.
    ///
    /// # Errors
    /// Surfaces conversion failures from the addition round-trip.
    pub fn memory_add(&mut self) -> RadixResult<()> {
        if self.memory_active {
            let sum = radix_to_real(&self.memory, self.base)? + self.operand_value()?;
            self.memory = self.render(sum)?;
        } else {
            self.memory_store();
        }
        Ok(())
    }

    // ========================================================================
    // Base and mode
    // ========================================================================

    /// Switch the working base, re-expressing every retained numeral at
    /// the new base through its real value. Accumulator and pending
    /// operator survive the change.
    ///
    /// # Errors
    /// Returns `InvalidBase` outside `[2, 16]` (no state is altered).
    pub fn set_base(&mut self, new_base: u32) -> RadixResult<()> {
        let target = Radix::new(new_base)?;
        if target == self.base {
            return Ok(());
        }

        let source = self.base;
        let current = self.rebase(&self.current, source, target)?;
        let accumulator = match &self.accumulator {
            Some(text) => Some(self.rebase(text, source, target)?),
            None => None,
        };
        let last_operand = match &self.last_operand {
            Some(text) => Some(self.rebase(text, source, target)?),
            None => None,
        };
        let last_result = match &self.last_result {
            Some(text) => Some(self.rebase(text, source, target)?),
            None => None,
        };
        let memory = self.rebase(&self.memory, source, target)?;

        self.current = current;
        self.accumulator = accumulator;
        self.last_operand = last_operand;
        self.last_result = last_result;
        self.memory = memory;
        self.base = target;
        tracing::debug!(base = %target, "calculator base changed");
        Ok(())
    }

    /// Switch between integer and real modes. A switch starts a fresh
    /// arithmetic session via `clear_all`; memory survives.
    pub fn set_mode(&mut self, mode: CalculatorMode) {
        if mode != self.mode {
            self.mode = mode;
            self.clear_all();
        }
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn begin_entry_if_needed(&mut self) {
        if self.awaiting_operand || self.just_evaluated {
            self.current.clear();
            self.current.push('0');
            self.awaiting_operand = false;
            self.just_evaluated = false;
        }
    }

    /// Apply the pending operator against the accumulator and `rhs`,
    /// replacing both accumulator and current operand with the result.
    ///
    /// Division by zero resets the whole engine before surfacing; the
    /// arithmetic chain is no longer meaningful after the fault.
    fn evaluate_with(&mut self, rhs_text: String) -> RadixResult<()> {
        let (acc_text, op) = match (&self.accumulator, self.pending_op) {
            (Some(acc), Some(op)) => (acc.clone(), op),
            _ => return Ok(()),
        };

        let lhs = radix_to_real(&acc_text, self.base)?;
        let rhs = radix_to_real(&rhs_text, self.base)?;

        let value = match op.apply(lhs, rhs) {
            Ok(value) => value,
            Err(RadixError::DivisionByZero) => {
                tracing::warn!(lhs = %acc_text, rhs = %rhs_text, "division by zero, resetting");
                self.clear_all();
                return Err(RadixError::DivisionByZero);
            },
            Err(other) => return Err(other),
        };

        let result = self.render(value)?;
        self.log_operation(format!("{} {} {} = {}", acc_text, op, rhs_text, result));

        self.accumulator = Some(result.clone());
        self.current = result.clone();
        self.last_result = Some(result);
        self.last_operand = Some(rhs_text);
        self.just_evaluated = true;
        self.awaiting_operand = true;
        Ok(())
    }

    fn apply_unary_result(&mut self, result: String) {
        self.current = result;
        if self.accumulator.is_none() {
            // Result seeds the accumulator and awaits the next operand
            self.accumulator = Some(self.current.clone());
            self.awaiting_operand = true;
        } else {
            // Result stands in as the fully entered second operand
            self.awaiting_operand = false;
        }
        self.just_evaluated = true;
    }

    fn operand_value(&self) -> RadixResult<f64> {
        radix_to_real(&self.current, self.base)
    }

    fn render(&self, value: f64) -> RadixResult<String> {
        let precision = match self.mode {
            CalculatorMode::Integer => 0,
            CalculatorMode::Real => RESULT_PRECISION,
        };
        real_to_radix(value, self.base, precision)
    }

    fn rebase(&self, text: &str, from: Radix, to: Radix) -> RadixResult<String> {
        let value = radix_to_real(text, from)?;
        let precision = match self.mode {
            CalculatorMode::Integer => 0,
            CalculatorMode::Real => RESULT_PRECISION,
        };
        real_to_radix(value, to, precision)
    }

    fn log_operation(&mut self, entry: String) {
        let line = format!("[{}] {}", Utc::now().format("%H:%M:%S"), entry);
        tracing::debug!(entry = %line, "calculator operation");
        self.history.push(line);
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
