#![forbid(unsafe_code)]

//! Arabic shaping for fonts that only carry presentation forms.
//!
//! # Design
//!
//! The reader's bitmap fonts have no OpenType tables, so joining is done by
//! substituting the Arabic Presentation Forms-B codepoints directly:
//!
//! 1. Lam + Alef (optionally with harakat in between) becomes one ligature.
//! 2. Every remaining letter takes its isolated, initial, medial, or final
//!    form, looking past diacritics to find the neighbours.
//! 3. A simplified bidi pass ([`bidi`]) puts the result in visual order.
//!
//! The output can be drawn glyph by glyph from left to right.
//!
//! # Example
//!
//! ```
//! use papyrix_text::arabic::shape_text;
//!
//! // Beh + Alef: final Alef drawn first, then initial Beh.
//! assert_eq!(shape_text("\u{0628}\u{0627}"), vec![0xFE8E, 0xFE91]);
//! ```

pub mod bidi;
mod character;
mod shaper;
pub mod tables;

pub use character::{
    JoiningType, LAM, contextual_form, is_arabic_base_char, is_arabic_diacritic, joining_type,
    lam_alef_ligature,
};
pub use shaper::{shape_bytes, shape_codepoints, shape_text};
