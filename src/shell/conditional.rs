//! The if/elif/else conditional helper.
//!
//! Mirrors shell `if/elif/else/fi` semantics: exactly one branch in a chain
//! fires, determined by first-match-wins, with conditions evaluated lazily
//! left to right. A condition is a shell command whose exit status supplies
//! the boolean.

use crate::error::{BosunError, Result};
use crate::shell::executor::{ExecOptions, Executor};

/// State of the currently open conditional chain.
///
/// Lives on the executor; at most one chain is active at a time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Chain {
    /// True once any branch in this chain has fired.
    matched: bool,
    /// Result of the most recent branch call.
    last_result: bool,
}

impl Executor {
    /// Open a chain by evaluating `expr` through the executor.
    ///
    /// Any previously open chain is discarded.
    pub fn if_condition(&mut self, expr: &str) -> bool {
        let result = self.eval_condition(expr);
        self.chain = Some(Chain {
            matched: result,
            last_result: result,
        });
        result
    }

    /// Evaluate an `elif` branch.
    ///
    /// Fails with a state error when no chain is open. Once a prior branch
    /// has matched, returns `false` without evaluating `expr`.
    pub fn elif_condition(&mut self, expr: &str) -> Result<bool> {
        match self.chain {
            None => Err(BosunError::ConditionalState {
                call: "elif_condition",
            }),
            Some(chain) if chain.matched => {
                self.chain = Some(Chain {
                    matched: true,
                    last_result: false,
                });
                Ok(false)
            }
            Some(_) => {
                let result = self.eval_condition(expr);
                self.chain = Some(Chain {
                    matched: result,
                    last_result: result,
                });
                Ok(result)
            }
        }
    }

    /// Evaluate the `else` branch.
    ///
    /// Fails with a state error when no chain is open. Returns `true` (and
    /// marks the chain matched) only if no prior branch fired.
    pub fn else_condition(&mut self) -> Result<bool> {
        match self.chain {
            None => Err(BosunError::ConditionalState {
                call: "else_condition",
            }),
            Some(chain) if chain.matched => {
                self.chain = Some(Chain {
                    matched: true,
                    last_result: false,
                });
                Ok(false)
            }
            Some(_) => {
                self.chain = Some(Chain {
                    matched: true,
                    last_result: true,
                });
                Ok(true)
            }
        }
    }

    /// Close the chain, discarding all of its state.
    pub fn end_condition(&mut self) {
        self.chain = None;
    }

    /// Whether a chain is currently open.
    pub fn in_chain(&self) -> bool {
        self.chain.is_some()
    }

    /// Result of the most recent branch call in the open chain.
    pub fn last_condition(&self) -> Option<bool> {
        self.chain.map(|c| c.last_result)
    }

    fn eval_condition(&mut self, expr: &str) -> bool {
        let options = ExecOptions {
            capture: true,
            show_command: false,
            ..Default::default()
        };
        self.execute(expr, &options)
            .map(|r| r.success)
            .unwrap_or(false)
    }
}
