use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

pub trait Preset {
    fn indentation(&self) -> u32;
    fn preset_name(&self) -> &str;
    fn word_wrap(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPreset;

impl Preset for DefaultPreset {
    fn indentation(&self) -> u32 {
        4
    }

    fn preset_name(&self) -> &str {
        "Default"
    }

    fn word_wrap(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CompactPreset;

impl Preset for CompactPreset {
    fn indentation(&self) -> u32 {
        4
    }

    fn preset_name(&self) -> &str {
        "Compact"
    }

    fn word_wrap(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub indentation: u32,
    pub preset_name: String,
    pub word_wrap: bool,
}

impl Profile {
    pub fn from_preset(preset: &dyn Preset) -> Self {
        ProfileBuilder::from_preset(preset).build()
    }
}

/// 從 preset 開始，逐欄覆寫後建立 [`Profile`]
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    indentation: u32,
    preset_name: String,
    word_wrap: bool,
}

impl ProfileBuilder {
    pub fn from_preset(preset: &dyn Preset) -> Self {
        Self {
            indentation: preset.indentation(),
            preset_name: preset.preset_name().to_string(),
            word_wrap: preset.word_wrap(),
        }
    }

    pub fn indentation(mut self, indentation: u32) -> Self {
        self.indentation = indentation;
        self
    }

    pub fn preset_name(mut self, name: impl Into<String>) -> Self {
        self.preset_name = name.into();
        self
    }

    pub fn word_wrap(mut self, word_wrap: bool) -> Self {
        self.word_wrap = word_wrap;
        self
    }

    pub fn build(self) -> Profile {
        Profile {
            indentation: self.indentation,
            preset_name: self.preset_name,
            word_wrap: self.word_wrap,
        }
    }
}

pub fn builder_demo(out: &mut dyn Write) -> Result<()> {
    let profiles = [
        Profile::from_preset(&DefaultPreset),
        Profile::from_preset(&CompactPreset),
    ];

    for profile in &profiles {
        writeln!(
            out,
            "{}: indentation={}, word_wrap={}",
            profile.preset_name, profile.indentation, profile.word_wrap
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_copies_preset_fields() {
        let profile = Profile::from_preset(&CompactPreset);
        assert_eq!(
            profile,
            Profile {
                indentation: 4,
                preset_name: "Compact".to_string(),
                word_wrap: false,
            }
        );
    }

    #[test]
    fn test_builder_overrides_single_field() {
        let profile = ProfileBuilder::from_preset(&DefaultPreset)
            .indentation(2)
            .build();

        assert_eq!(profile.indentation, 2);
        assert_eq!(profile.preset_name, "Default");
        assert!(profile.word_wrap);
    }

    #[test]
    fn test_builder_demo_output() {
        let mut out = Vec::new();
        builder_demo(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Default: indentation=4, word_wrap=true\nCompact: indentation=4, word_wrap=false\n"
        );
    }
}
