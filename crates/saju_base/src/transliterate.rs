//! Hanja ↔ hangul conversion of stem and branch symbols.
//!
//! Every stem and branch has one hanja and one hangul form, except that
//! 辛 (stem) and 申 (branch) are both read `신`. Going from hangul to hanja,
//! `신` directly after a stem is taken as the branch 申 and otherwise as the
//! stem 辛, so pillar strings like `경신` come back as `庚申`. Characters
//! that are not stems or branches pass through unchanged and reset that
//! context.
//!
//! Round trips therefore hold for stem-led pillar strings only. A lone
//! branch 申 reads `신` and comes back as the stem 辛:
//!
//! ```
//! use saju_base::{Script, transliterate};
//!
//! assert_eq!(transliterate("庚申", Script::Hangul), "경신");
//! assert_eq!(transliterate("경신", Script::Hanja), "庚申");
//!
//! assert_eq!(transliterate("申", Script::Hangul), "신");
//! assert_eq!(transliterate("신", Script::Hanja), "辛");
//! ```

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// Target script of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hanja,
    Hangul,
}

impl Script {
    /// Script a symbol belongs to, if it is a stem or branch.
    pub fn of(c: char) -> Option<Script> {
        if Stem::from_char(c).is_some_and(|s| s.hanja() == c)
            || Branch::from_char(c).is_some_and(|b| b.hanja() == c)
        {
            Some(Script::Hanja)
        } else if Stem::from_char(c).is_some() || Branch::from_char(c).is_some() {
            Some(Script::Hangul)
        } else {
            None
        }
    }
}

enum Symbol {
    Stem(Stem),
    Branch(Branch),
}

fn to_hangul(c: char) -> Option<char> {
    if let Some(stem) = Stem::from_char(c).filter(|s| s.hanja() == c) {
        return Some(stem.hangul());
    }
    Branch::from_char(c)
        .filter(|b| b.hanja() == c)
        .map(Branch::hangul)
}

/// Resolve a hangul symbol, using the previous symbol for `신`.
fn hangul_symbol(c: char, after_stem: bool) -> Option<Symbol> {
    let stem = Stem::from_char(c).filter(|s| s.hangul() == c);
    let branch = Branch::from_char(c).filter(|b| b.hangul() == c);
    match (stem, branch) {
        (Some(_), Some(b)) if after_stem => Some(Symbol::Branch(b)),
        (Some(s), _) => Some(Symbol::Stem(s)),
        (None, Some(b)) => Some(Symbol::Branch(b)),
        (None, None) => None,
    }
}

/// Convert every stem and branch symbol in `text` to `to`.
///
/// Symbols already in the target script and all other characters are
/// copied as-is.
pub fn transliterate(text: &str, to: Script) -> String {
    match to {
        Script::Hangul => text.chars().map(|c| to_hangul(c).unwrap_or(c)).collect(),
        Script::Hanja => {
            let mut out = String::with_capacity(text.len());
            let mut after_stem = false;
            for c in text.chars() {
                match hangul_symbol(c, after_stem) {
                    Some(Symbol::Stem(s)) => {
                        out.push(s.hanja());
                        after_stem = true;
                    }
                    Some(Symbol::Branch(b)) => {
                        out.push(b.hanja());
                        after_stem = false;
                    }
                    None => {
                        out.push(c);
                        after_stem = Stem::from_char(c).is_some_and(|s| s.hanja() == c);
                    }
                }
            }
            out
        }
    }
}

/// Convert to the other script, judged by the first stem/branch symbol.
pub fn toggle(text: &str) -> String {
    match text.chars().find_map(Script::of) {
        Some(Script::Hanja) => transliterate(text, Script::Hangul),
        Some(Script::Hangul) => transliterate(text, Script::Hanja),
        None => text.to_string(),
    }
}
