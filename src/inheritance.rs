//! Pattern 3: Override vs Hide
//!
//! Rust has no class inheritance, but both behaviours fall out of the
//! method resolution rules:
//!
//! - Trait methods with default bodies play the virtual base methods.
//!   An `impl Greeter` that redefines one **overrides** it, and the override
//!   is reached through `&dyn Greeter` because the call goes via the vtable.
//! - An inherent method with the same name **hides** the trait method.
//!   `czech.greeting()` on a `Czech` picks the inherent method (inherent
//!   methods win over trait methods), while the same object behind
//!   `&dyn Greeter` only exposes the trait method, i.e. the base version.

use std::io::Write;

use crate::config::InheritanceConfig;
use crate::error::DemoError;

/// Shared state of every person: just an immutable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Person { name: name.into() }
    }
}

/// The "virtual" surface of a person.
pub trait Greeter {
    fn name(&self) -> &str;

    fn greeting(&self) -> String {
        format!("Hello, I am a person called {}", self.name())
    }

    fn farewell(&self) -> String {
        "Bye from person.".to_string()
    }
}

impl Greeter for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Hides `greeting`, overrides `farewell`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Czech {
    person: Person,
}

impl Czech {
    pub fn new(name: impl Into<String>) -> Self {
        Czech {
            person: Person::new(name),
        }
    }

    pub fn greeting(&self) -> String {
        format!("Ahoj, jsem {}", self.person.name)
    }

    /// Calls `greeting` twice from inside the subtype, which always
    /// resolves to the hiding version.
    pub fn say_hello_twice(&self) -> [String; 2] {
        [self.greeting(), self.greeting()]
    }
}

impl Greeter for Czech {
    fn name(&self) -> &str {
        &self.person.name
    }

    fn farewell(&self) -> String {
        "Čau".to_string()
    }
}

/// Overrides `greeting`, hides `farewell`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slovak {
    person: Person,
}

impl Slovak {
    pub fn new(name: impl Into<String>) -> Self {
        Slovak {
            person: Person::new(name),
        }
    }

    pub fn farewell(&self) -> String {
        "Zbohom".to_string()
    }
}

impl Greeter for Slovak {
    fn name(&self) -> &str {
        &self.person.name
    }

    fn greeting(&self) -> String {
        format!("Ahoj, volám sa {}", self.person.name)
    }
}

pub fn farewells(people: &[&dyn Greeter]) -> Vec<String> {
    people.iter().map(|person| person.farewell()).collect()
}

pub fn greetings(people: &[&dyn Greeter]) -> Vec<String> {
    people.iter().map(|person| person.greeting()).collect()
}

pub fn run(config: &InheritanceConfig, out: &mut impl Write) -> Result<(), DemoError> {
    let czech = Czech::new(config.czech_name.as_str());
    let slovak = Slovak::new(config.slovak_name.as_str());
    let person = Person::new(config.person_name.as_str());

    writeln!(out, "Czech::say_hello_twice():")?;
    for line in czech.say_hello_twice() {
        writeln!(out, "  {line}")?;
    }

    let people: Vec<&dyn Greeter> = vec![&person, &czech, &slovak];

    writeln!(out)?;
    writeln!(out, "Through &dyn Greeter:")?;
    for (greeting, farewell) in greetings(&people).into_iter().zip(farewells(&people)) {
        writeln!(out, "  {greeting} / {farewell}")?;
    }

    writeln!(out)?;
    writeln!(out, "Through the concrete types:")?;
    writeln!(out, "  {} / {}", person.greeting(), person.farewell())?;
    writeln!(out, "  {} / {}", czech.greeting(), Greeter::farewell(&czech))?;
    writeln!(out, "  {} / {}", Greeter::greeting(&slovak), slovak.farewell())?;
    Ok(())
}
