pub mod core;
pub use self::core::{Param, PropType, Type};

pub mod error;
pub use error::TypeError;

pub mod assignability;
pub mod checking;
pub mod context;
pub mod equality;
pub mod expansion;
pub mod substitution;
pub mod validation;
pub use context::Context;
pub mod display;

// Deep terms and types grow the stack instead of overflowing it.
const RED_ZONE: usize = 32 * 1024;
const STACK_GROWTH: usize = 1024 * 1024;

fn grow_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, f)
}
