//! Pattern 2: Generic Containers and Bounds

pub mod math;
pub mod pair;
pub mod stack;

use std::io::Write;

pub use pair::Pair;
pub use stack::{Stack, DEFAULT_CAPACITY};

use crate::config::GenericsConfig;
use crate::error::{ConfigError, DemoError};

pub fn run(config: &GenericsConfig, out: &mut impl Write) -> Result<(), DemoError> {
    let items = config.items();

    let maximum = math::max(&items).ok_or_else(|| {
        ConfigError::invalid("generics.range_len", "max needs at least one item")
    })?;
    writeln!(out, "{maximum}")?;
    for probe in &config.probes {
        writeln!(out, "{}", math::contains(probe, &items))?;
    }

    writeln!(out)?;
    writeln!(out, "Stack<i32>:")?;
    let mut stack: Stack<i32> = Stack::new();
    for item in &items {
        stack.push(*item)?;
    }
    writeln!(out, "  pushed {} of {}", stack.len(), stack.capacity())?;
    let mut popped = Vec::with_capacity(stack.len());
    while !stack.is_empty() {
        popped.push(stack.pop()?);
    }
    writeln!(out, "  popped {popped:?}")?;
    // Shows the underflow error instead of propagating it; every other
    // stack failure in this demo is returned to the caller.
    if let Err(err) = stack.pop() {
        writeln!(out, "  pop on empty: {err}")?;
    }

    writeln!(out)?;
    writeln!(out, "Pair<i32, i32>:")?;
    let full = Pair::new(*maximum, items.len() as i32);
    let half: Pair<i32, i32> = Pair::with_first(5);
    writeln!(out, "  Pair::new({}, {})", full.first(), full.second())?;
    writeln!(out, "  Pair::with_first(5).second() = {}", half.second())?;
    Ok(())
}
