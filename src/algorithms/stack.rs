//! Stack utilities and classic stack applications.
//!
//! The traversal helpers (`find_in_stack`, `stack_sum`, `stack_max`) need
//! `&mut` access because a stack only exposes its top: they pop through
//! the whole stack into an auxiliary one and push everything back before
//! returning, so the stack they were given is observably unchanged.

use thiserror::Error;

use crate::array::{ArrayQueue, ArrayStack};
use crate::error::{Error as ContainerError, Result};
use crate::traits::Stack;

/// Errors produced by [`evaluate_postfix`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostfixError {
    /// A token was neither an integer nor one of `+ - * /`.
    #[error("invalid token: {0}")]
    UnknownToken(String),

    /// An operator was applied with fewer than two values on the stack.
    #[error("operator {0} is missing an operand")]
    MissingOperand(String),

    /// The divisor of a `/` was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Evaluation finished with a value count other than one.
    #[error("malformed expression: {0} values left after evaluation")]
    LeftoverOperands(usize),
}

/// Replaces the contents of `dst` with a copy of `src`, top to base
/// order preserved. `src` is drained through an auxiliary stack and
/// restored before returning.
pub fn copy_stack<S, D>(src: &mut S, dst: &mut D) -> Result<()>
where
    S: Stack + ?Sized,
    D: Stack + ?Sized,
{
    dst.clear();
    let mut aux = ArrayStack::new();
    for _ in 0..src.len() {
        aux.push(src.pop()?);
    }
    // aux now holds src base-first; pushing back rebuilds both in the
    // original orientation.
    for _ in 0..aux.len() {
        let v = aux.pop()?;
        src.push(v);
        dst.push(v);
    }
    Ok(())
}

/// Reverses the stack: the old top ends up at the base. A queue is the
/// natural auxiliary here, since draining the stack into it records
/// top-first order and re-pushing replays that same order.
pub fn reverse_stack<S: Stack + ?Sized>(stack: &mut S) -> Result<()> {
    let mut aux = ArrayQueue::new();
    for _ in 0..stack.len() {
        aux.enqueue(stack.pop()?);
    }
    for _ in 0..aux.len() {
        stack.push(aux.dequeue()?);
    }
    Ok(())
}

/// Whether `target` occurs anywhere in the stack. The stack is restored
/// before returning.
pub fn find_in_stack<S: Stack + ?Sized>(stack: &mut S, target: i64) -> Result<bool> {
    let mut aux = ArrayStack::new();
    let mut found = false;
    for _ in 0..stack.len() {
        let v = stack.pop()?;
        if v == target {
            found = true;
        }
        aux.push(v);
    }
    for _ in 0..aux.len() {
        stack.push(aux.pop()?);
    }
    Ok(found)
}

/// Sum of all elements; 0 for an empty stack. Restores the stack.
pub fn stack_sum<S: Stack + ?Sized>(stack: &mut S) -> Result<i64> {
    let mut aux = ArrayStack::new();
    let mut total = 0;
    for _ in 0..stack.len() {
        let v = stack.pop()?;
        total += v;
        aux.push(v);
    }
    for _ in 0..aux.len() {
        stack.push(aux.pop()?);
    }
    Ok(total)
}

/// Largest element, or [`ContainerError::Empty`]. Restores the stack.
pub fn stack_max<S: Stack + ?Sized>(stack: &mut S) -> Result<i64> {
    if stack.is_empty() {
        return Err(ContainerError::Empty);
    }
    let mut aux = ArrayStack::new();
    let mut max = stack.peek()?;
    for _ in 0..stack.len() {
        let v = stack.pop()?;
        if v > max {
            max = v;
        }
        aux.push(v);
    }
    for _ in 0..aux.len() {
        stack.push(aux.pop()?);
    }
    Ok(max)
}

/// Whether every bracket in `input` is balanced and correctly nested.
/// Non-bracket characters are ignored.
pub fn is_valid_parentheses(input: &str) -> bool {
    let mut stack = ArrayStack::new();
    for ch in input.chars() {
        match ch {
            '(' | '[' | '{' => stack.push(ch as i64),
            ')' | ']' | '}' => {
                let open = match stack.pop() {
                    Ok(v) => v,
                    Err(_) => return false,
                };
                if !is_matching_pair(open, ch) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

fn is_matching_pair(open: i64, close: char) -> bool {
    // Openers are pushed as their ASCII code points.
    matches!(
        (open as u8 as char, close),
        ('(', ')') | ('[', ']') | ('{', '}')
    )
}

/// Evaluates a postfix (reverse Polish) expression over `+ - * /` with
/// truncating integer division. `["3", "4", "+", "2", "*"]` is 14.
pub fn evaluate_postfix(tokens: &[&str]) -> core::result::Result<i64, PostfixError> {
    let mut stack = ArrayStack::new();
    for &token in tokens {
        match token {
            "+" | "-" | "*" | "/" => {
                let b = stack
                    .pop()
                    .map_err(|_| PostfixError::MissingOperand(token.to_owned()))?;
                let a = stack
                    .pop()
                    .map_err(|_| PostfixError::MissingOperand(token.to_owned()))?;
                let value = match token {
                    "+" => a + b,
                    "-" => a - b,
                    "*" => a * b,
                    _ => {
                        if b == 0 {
                            return Err(PostfixError::DivisionByZero);
                        }
                        a / b
                    }
                };
                stack.push(value);
            }
            _ => {
                let value: i64 = token
                    .parse()
                    .map_err(|_| PostfixError::UnknownToken(token.to_owned()))?;
                stack.push(value);
            }
        }
    }
    if stack.len() != 1 {
        return Err(PostfixError::LeftoverOperands(stack.len()));
    }
    stack.pop().map_err(|_| PostfixError::LeftoverOperands(0))
}
