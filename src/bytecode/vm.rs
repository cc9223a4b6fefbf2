//! The bytecode virtual machine, a stack-based execution engine.

use crate::error::RuntimeError;

use super::opcode::OpCode;

/// The bytecode VM.
pub struct Vm {
    /// Operand stack.
    stack: Vec<f64>,
}

impl Vm {
    pub fn new() -> Self {
        Self {
            stack: Vec::with_capacity(64),
        }
    }

    /// Execute a program and return the value left by `Halt`.
    ///
    /// The stack is cleared first, so one VM can run many programs
    /// independently. Values left below the result are ignored.
    pub fn execute(&mut self, code: &[f64]) -> Result<f64, RuntimeError> {
        if code.is_empty() {
            return Err(RuntimeError::EmptyBytecode);
        }
        self.stack.clear();

        let mut ip = 0;
        loop {
            let offset = ip;
            let Some(&cell) = code.get(ip) else {
                return Err(RuntimeError::MissingHalt);
            };
            let op = OpCode::from_cell(cell)
                .ok_or(RuntimeError::UnknownOpcode { cell, offset })?;
            ip += 1;

            match op {
                OpCode::PushNumber => {
                    let value = *code
                        .get(ip)
                        .ok_or(RuntimeError::MissingOperand { offset })?;
                    ip += 1;
                    self.stack.push(value);
                }
                OpCode::Negate => {
                    let value = self.pop(offset)?;
                    self.stack.push(-value);
                }
                OpCode::Sum => self.binary(offset, |l, r| l + r)?,
                OpCode::Subtract => self.binary(offset, |l, r| l - r)?,
                OpCode::Multiply => self.binary(offset, |l, r| l * r)?,
                OpCode::Divide => self.binary(offset, |l, r| l / r)?,
                OpCode::Modulo => self.binary(offset, |l, r| l % r)?,
                OpCode::Exponentiate => self.binary(offset, power)?,
                OpCode::Halt => break,
            }
        }

        self.pop(ip.saturating_sub(1))
    }

    /// Current stack depth. Only meaningful after `execute` returns.
    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    /// Pop the right operand, then the left, and push `apply(left, right)`.
    fn binary(
        &mut self,
        offset: usize,
        apply: impl Fn(f64, f64) -> f64,
    ) -> Result<(), RuntimeError> {
        let right = self.pop(offset)?;
        let left = self.pop(offset)?;
        self.stack.push(apply(left, right));
        Ok(())
    }

    fn pop(&mut self, offset: usize) -> Result<f64, RuntimeError> {
        self.stack
            .pop()
            .ok_or_else(|| RuntimeError::stack_underflow(offset))
    }
}

/// Real power. A base of magnitude 1 raised to an infinite exponent is NaN,
/// where C `pow` would give 1.
fn power(base: f64, exponent: f64) -> f64 {
    if base.abs() == 1.0 && exponent.is_infinite() {
        return f64::NAN;
    }
    base.powf(exponent)
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}
