use crate::utils::error::Result;
use std::io::Write;

pub trait Language {
    fn greet(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Language for English {
    fn greet(&self) -> &str {
        "Hello"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct French;

impl Language for French {
    fn greet(&self) -> &str {
        "Bonjour"
    }
}

/// 頁面本身不知道語言細節，只委派給 [`Language`]
#[derive(Default)]
pub struct Page {
    lang: Option<Box<dyn Language>>,
}

impl Page {
    pub fn new(lang: Box<dyn Language>) -> Self {
        Self { lang: Some(lang) }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    pub fn set_language(&mut self, lang: Box<dyn Language>) {
        self.lang = Some(lang);
    }

    pub fn render(&self) -> String {
        match &self.lang {
            Some(lang) => format!("{}!", lang.greet()),
            None => "Greetings!".to_string(),
        }
    }
}

pub fn bridge_demo(out: &mut dyn Write) -> Result<()> {
    let page = Page::new(Box::new(French));
    writeln!(out, "{}", page.render())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_delegates_to_language() {
        let mut page = Page::new(Box::new(French));
        assert_eq!(page.render(), "Bonjour!");

        page.set_language(Box::new(English));
        assert_eq!(page.render(), "Hello!");
    }

    #[test]
    fn test_render_without_language() {
        assert_eq!(Page::blank().render(), "Greetings!");
    }
}
