use crate::utils::error::Result;
use std::io::Write;

pub trait Drone {
    fn action(&self, out: &mut dyn Write) -> Result<()>;
    fn tag_along(&self, out: &mut dyn Write) -> Result<()>;
}

pub trait Hero {
    fn name(&self) -> &str;
    fn drone(&self) -> Option<&dyn Drone>;

    /// 所有英雄共用的預設行為
    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} is running!", self.name())?;
        if let Some(drone) = self.drone() {
            drone.tag_along(out)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlameDrone;

impl Drone for FlameDrone {
    fn action(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Flambeau!!!")?;
        Ok(())
    }

    fn tag_along(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Flamedrone is tagging along!")?;
        Ok(())
    }
}

pub struct ClassicalHero {
    pub name: String,
    pub drone: Option<Box<dyn Drone>>,
}

impl Default for ClassicalHero {
    fn default() -> Self {
        Self {
            name: String::new(),
            drone: Some(Box::new(FlameDrone)),
        }
    }
}

impl ClassicalHero {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Hero for ClassicalHero {
    fn name(&self) -> &str {
        &self.name
    }

    fn drone(&self) -> Option<&dyn Drone> {
        self.drone.as_deref()
    }
}

pub fn factory_method_demo(out: &mut dyn Write) -> Result<()> {
    let hero = ClassicalHero::named("Classy Quinn");
    hero.run(out)
}
