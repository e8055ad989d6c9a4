//! Pattern 1: Multicast Callbacks
//!
//! A `Multicast<T>` is an ordered invocation list of callbacks that all take
//! `&T`. Adding a callback appends it; invoking the list calls each callback
//! in registration order with the same argument.

use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::ops::{Add, AddAssign};

use crate::config::DelegatesConfig;
use crate::error::DemoError;

type Callback<'a, T> = Box<dyn Fn(&T) + 'a>;

pub struct Multicast<'a, T: ?Sized> {
    callbacks: Vec<Callback<'a, T>>,
}

impl<'a, T: ?Sized> Multicast<'a, T> {
    /// A list holding a single callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&T) + 'a,
    {
        Multicast {
            callbacks: vec![Box::new(callback)],
        }
    }

    pub fn empty() -> Self {
        Multicast {
            callbacks: Vec::new(),
        }
    }

    pub fn push<F>(&mut self, callback: F)
    where
        F: Fn(&T) + 'a,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Appends every callback of `other` after our own.
    pub fn combine(mut self, other: Multicast<'a, T>) -> Self {
        self.callbacks.extend(other.callbacks);
        self
    }

    pub fn invoke(&self, arg: &T) {
        tracing::trace!("invoking {} callback(s)", self.callbacks.len());
        for callback in &self.callbacks {
            callback(arg);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<'a, T: ?Sized> Default for Multicast<'a, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T: ?Sized, F> AddAssign<F> for Multicast<'a, T>
where
    F: Fn(&T) + 'a,
{
    fn add_assign(&mut self, callback: F) {
        self.push(callback);
    }
}

impl<'a, T: ?Sized> Add for Multicast<'a, T> {
    type Output = Multicast<'a, T>;

    fn add(self, other: Multicast<'a, T>) -> Self::Output {
        self.combine(other)
    }
}

impl<'a, T: ?Sized> fmt::Debug for Multicast<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multicast")
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn saying_hello_stuff(text: &str) -> String {
    format!("Hey! {text}")
}

pub fn saying_bye_stuff(text: &str) -> String {
    format!("{text}. Bye!")
}

/// Single-cast call, reassignment, then `+=` composition.
pub fn run(config: &DelegatesConfig, out: &mut impl Write) -> Result<(), DemoError> {
    // Callbacks can't return io errors, so they collect lines instead.
    let lines = RefCell::new(Vec::new());
    let say_bye = |text: &str| lines.borrow_mut().push(saying_bye_stuff(text));
    let say_hello = |text: &str| lines.borrow_mut().push(saying_hello_stuff(text));

    let mut say_stuff: Multicast<str> = Multicast::new(say_bye);
    say_stuff.invoke(&config.first_message);

    say_stuff = Multicast::new(say_bye);
    say_stuff.invoke(&config.first_message);

    say_stuff += say_hello;
    say_stuff.invoke(&config.second_message);
    drop(say_stuff);

    for line in lines.into_inner() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
