#![forbid(unsafe_code)]

//! Arabic presentation-form data.
//!
//! One row per base letter U+0621..U+064A that has forms in the Arabic
//! Presentation Forms-B block. `0` marks a form the letter does not have.
//! Rows are sorted by base codepoint for binary search.

/// Isolated, initial, medial, and final forms of one base letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArabicForms {
    pub base: u16,
    pub isolated: u16,
    pub initial: u16,
    pub medial: u16,
    pub final_: u16,
}

impl ArabicForms {
    #[must_use]
    pub const fn new(base: u16, isolated: u16, initial: u16, medial: u16, final_: u16) -> Self {
        Self {
            base,
            isolated,
            initial,
            medial,
            final_,
        }
    }
}

pub static FORMS: &[ArabicForms] = &[
    ArabicForms::new(0x0621, 0xFE80, 0x0000, 0x0000, 0x0000), // Hamza
    ArabicForms::new(0x0622, 0xFE81, 0x0000, 0x0000, 0xFE82), // Alef With Madda Above
    ArabicForms::new(0x0623, 0xFE83, 0x0000, 0x0000, 0xFE84), // Alef With Hamza Above
    ArabicForms::new(0x0624, 0xFE85, 0x0000, 0x0000, 0xFE86), // Waw With Hamza Above
    ArabicForms::new(0x0625, 0xFE87, 0x0000, 0x0000, 0xFE88), // Alef With Hamza Below
    ArabicForms::new(0x0626, 0xFE89, 0xFE8B, 0xFE8C, 0xFE8A), // Yeh With Hamza Above
    ArabicForms::new(0x0627, 0xFE8D, 0x0000, 0x0000, 0xFE8E), // Alef
    ArabicForms::new(0x0628, 0xFE8F, 0xFE91, 0xFE92, 0xFE90), // Beh
    ArabicForms::new(0x0629, 0xFE93, 0x0000, 0x0000, 0xFE94), // Teh Marbuta
    ArabicForms::new(0x062A, 0xFE95, 0xFE97, 0xFE98, 0xFE96), // Teh
    ArabicForms::new(0x062B, 0xFE99, 0xFE9B, 0xFE9C, 0xFE9A), // Theh
    ArabicForms::new(0x062C, 0xFE9D, 0xFE9F, 0xFEA0, 0xFE9E), // Jeem
    ArabicForms::new(0x062D, 0xFEA1, 0xFEA3, 0xFEA4, 0xFEA2), // Hah
    ArabicForms::new(0x062E, 0xFEA5, 0xFEA7, 0xFEA8, 0xFEA6), // Khah
    ArabicForms::new(0x062F, 0xFEA9, 0x0000, 0x0000, 0xFEAA), // Dal
    ArabicForms::new(0x0630, 0xFEAB, 0x0000, 0x0000, 0xFEAC), // Thal
    ArabicForms::new(0x0631, 0xFEAD, 0x0000, 0x0000, 0xFEAE), // Reh
    ArabicForms::new(0x0632, 0xFEAF, 0x0000, 0x0000, 0xFEB0), // Zain
    ArabicForms::new(0x0633, 0xFEB1, 0xFEB3, 0xFEB4, 0xFEB2), // Seen
    ArabicForms::new(0x0634, 0xFEB5, 0xFEB7, 0xFEB8, 0xFEB6), // Sheen
    ArabicForms::new(0x0635, 0xFEB9, 0xFEBB, 0xFEBC, 0xFEBA), // Sad
    ArabicForms::new(0x0636, 0xFEBD, 0xFEBF, 0xFEC0, 0xFEBE), // Dad
    ArabicForms::new(0x0637, 0xFEC1, 0xFEC3, 0xFEC4, 0xFEC2), // Tah
    ArabicForms::new(0x0638, 0xFEC5, 0xFEC7, 0xFEC8, 0xFEC6), // Zah
    ArabicForms::new(0x0639, 0xFEC9, 0xFECB, 0xFECC, 0xFECA), // Ain
    ArabicForms::new(0x063A, 0xFECD, 0xFECF, 0xFED0, 0xFECE), // Ghain
    ArabicForms::new(0x0641, 0xFED1, 0xFED3, 0xFED4, 0xFED2), // Feh
    ArabicForms::new(0x0642, 0xFED5, 0xFED7, 0xFED8, 0xFED6), // Qaf
    ArabicForms::new(0x0643, 0xFED9, 0xFEDB, 0xFEDC, 0xFEDA), // Kaf
    ArabicForms::new(0x0644, 0xFEDD, 0xFEDF, 0xFEE0, 0xFEDE), // Lam
    ArabicForms::new(0x0645, 0xFEE1, 0xFEE3, 0xFEE4, 0xFEE2), // Meem
    ArabicForms::new(0x0646, 0xFEE5, 0xFEE7, 0xFEE8, 0xFEE6), // Noon
    ArabicForms::new(0x0647, 0xFEE9, 0xFEEB, 0xFEEC, 0xFEEA), // Heh
    ArabicForms::new(0x0648, 0xFEED, 0x0000, 0x0000, 0xFEEE), // Waw
    ArabicForms::new(0x0649, 0xFEEF, 0x0000, 0x0000, 0xFEF0), // Alef Maksura
    ArabicForms::new(0x064A, 0xFEF1, 0xFEF3, 0xFEF4, 0xFEF2), // Yeh
];

/// Lam-Alef ligatures: `(alef, isolated, final)`.
pub static LAM_ALEF: &[(u16, u16, u16)] = &[
    (0x0622, 0xFEF5, 0xFEF6), // with madda above
    (0x0623, 0xFEF7, 0xFEF8), // with hamza above
    (0x0625, 0xFEF9, 0xFEFA), // with hamza below
    (0x0627, 0xFEFB, 0xFEFC),
];

/// Forms for `base`, if it is a shapeable letter.
#[must_use]
pub fn forms_for(base: u32) -> Option<&'static ArabicForms> {
    let base = u16::try_from(base).ok()?;
    FORMS
        .binary_search_by_key(&base, |row| row.base)
        .ok()
        .map(|idx| &FORMS[idx])
}
