use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

/// 單向鏈結的字母節點，每個節點的字元固定，可選擇包住下一個節點
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter {
    glyph: char,
    inner: Option<Box<Letter>>,
}

impl Letter {
    pub fn t(inner: Option<Letter>) -> Self {
        Self::wrap('T', inner)
    }

    pub fn o(inner: Option<Letter>) -> Self {
        Self::wrap('O', inner)
    }

    fn wrap(glyph: char, inner: Option<Letter>) -> Self {
        Self {
            glyph,
            inner: inner.map(Box::new),
        }
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// 內層節點；最內層沒有下一個節點
    pub fn value(&self) -> Option<&Letter> {
        self.inner.as_deref()
    }

    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// 由外到內拆開整條鏈
    pub fn unwrap_all(&self) -> String {
        self.chain().map(Letter::glyph).collect()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph)
    }
}

pub struct Chain<'a> {
    next: Option<&'a Letter>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Letter;

    fn next(&mut self) -> Option<&'a Letter> {
        let current = self.next?;
        self.next = current.value();
        Some(current)
    }
}

pub fn letters_demo(out: &mut dyn Write) -> Result<()> {
    let word = Letter::o(Some(Letter::t(None)));

    match word.value() {
        Some(inner) => writeln!(out, "{}", inner)?,
        None => writeln!(out, "{}", word)?,
    }
    writeln!(out, "{}", word.unwrap_all())?;
    writeln!(out, "Done")?;
    Ok(())
}
