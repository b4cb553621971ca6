use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// 產生一份獨立的複本
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

pub fn prototype_demo(out: &mut dyn Write) -> Result<()> {
    let john = Person::new("John");
    let john_copy = john.duplicate();
    writeln!(out, "{}", john_copy)?;
    Ok(())
}
