#![forbid(unsafe_code)]

//! Arabic joining classification and form selection.
//!
//! All functions are total over `u32`: anything outside the recognised
//! ranges is non-joining, not a diacritic, and has no forms.

use super::tables::{LAM_ALEF, forms_for};

/// U+0644 ARABIC LETTER LAM.
pub const LAM: u32 = 0x0644;

/// How a character connects to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum JoiningType {
    /// Never connects (Hamza, Latin, digits, ...).
    #[default]
    NonJoining,
    /// Connects only to the preceding letter (Alef, Dal, Reh, Waw, ...).
    Right,
    /// Connects on both sides.
    Dual,
    /// Diacritic; skipped when looking for neighbours.
    Transparent,
}

impl JoiningType {
    /// Offers a connection to the following letter.
    #[inline]
    #[must_use]
    pub const fn joins_to_left(self) -> bool {
        matches!(self, Self::Dual)
    }

    /// Accepts a connection from the preceding letter.
    #[inline]
    #[must_use]
    pub const fn joins_to_right(self) -> bool {
        matches!(self, Self::Dual | Self::Right)
    }
}

/// Harakat and the superscript Alef.
#[inline]
#[must_use]
pub const fn is_arabic_diacritic(cp: u32) -> bool {
    matches!(cp, 0x064B..=0x065F | 0x0670)
}

/// A letter in the basic Arabic block eligible for contextual shaping.
#[inline]
#[must_use]
pub const fn is_arabic_base_char(cp: u32) -> bool {
    matches!(cp, 0x0621..=0x064A) && !is_arabic_diacritic(cp)
}

#[must_use]
pub const fn joining_type(cp: u32) -> JoiningType {
    if is_arabic_diacritic(cp) {
        return JoiningType::Transparent;
    }
    match cp {
        0x0622..=0x0625 | 0x0627 | 0x0629 | 0x062F..=0x0632 | 0x0648 => JoiningType::Right,
        // Lam-Alef ligatures behave like the Alef they end with.
        0xFEF5..=0xFEFC => JoiningType::Right,
        0x0621 => JoiningType::NonJoining,
        _ if is_arabic_base_char(cp) => JoiningType::Dual,
        _ => JoiningType::NonJoining,
    }
}

/// Pick the presentation form for `cp` given whether its neighbours
/// connect to it. Characters without forms are returned unchanged.
#[must_use]
pub fn contextual_form(cp: u32, prev_joins: bool, next_joins: bool) -> u32 {
    let Some(forms) = forms_for(cp) else {
        return cp;
    };
    let pick = |wanted: bool, form: u16| (wanted && form != 0).then_some(u32::from(form));

    pick(prev_joins && next_joins, forms.medial)
        .or_else(|| pick(prev_joins, forms.final_))
        .or_else(|| pick(next_joins, forms.initial))
        .or_else(|| pick(true, forms.isolated))
        .unwrap_or(cp)
}

/// Lam followed by `alef` as a single ligature, final if the letter before
/// the Lam connects to it.
#[must_use]
pub fn lam_alef_ligature(alef: u32, prev_joins: bool) -> Option<u32> {
    LAM_ALEF
        .iter()
        .find(|&&(base, _, _)| u32::from(base) == alef)
        .map(|&(_, isolated, final_)| u32::from(if prev_joins { final_ } else { isolated }))
}
