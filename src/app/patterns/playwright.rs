use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct Actor {
    pub name: String,
}

impl Actor {
    pub fn sing(&self) -> &'static str {
        "Oooh la la, snow in a sunny day!"
    }
}

pub trait Sword {
    fn what(&self) -> &str;
}

pub mod props {
    use super::Sword;

    #[derive(Debug, Clone, Copy, Default)]
    pub struct FlamingSword;

    impl Sword for FlamingSword {
        fn what(&self) -> &str {
            "a flaming sword"
        }
    }
}

/// 導演負責選角與道具，再讓演員上場
#[derive(Default)]
pub struct Director {
    actor: Option<Actor>,
    sword: Option<Box<dyn Sword>>,
}

impl Director {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cast(&mut self, name: impl Into<String>) {
        self.actor = Some(Actor { name: name.into() });
    }

    pub fn equip(&mut self, sword: Box<dyn Sword>) {
        self.sword = Some(sword);
    }

    pub fn action(&mut self, out: &mut dyn Write) -> Result<()> {
        self.cast("Phil");
        self.equip(Box::new(props::FlamingSword));
        self.perform(out)
    }

    /// 只有演員與道具都到齊才會演出
    pub fn perform(&self, out: &mut dyn Write) -> Result<()> {
        if let (Some(actor), Some(sword)) = (&self.actor, &self.sword) {
            writeln!(out, "Our hero, {} wields {}", actor.name, sword.what())?;
            writeln!(out, "And sings,\" {} \"", actor.sing())?;
        }
        Ok(())
    }
}

pub fn playwright_demo(out: &mut dyn Write) -> Result<()> {
    Director::new().action(out)
}
