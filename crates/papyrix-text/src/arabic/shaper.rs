#![forbid(unsafe_code)]

//! Logical text to visual presentation forms.

use super::bidi::reorder_visual;
use super::character::{
    JoiningType, LAM, contextual_form, is_arabic_base_char, is_arabic_diacritic, joining_type,
    lam_alef_ligature,
};
use crate::utf8;

/// Shape `text` and return codepoints in left-to-right drawing order.
#[must_use]
pub fn shape_text(text: &str) -> Vec<u32> {
    shape_bytes(text.as_bytes())
}

/// Like [`shape_text`] for raw bytes. Malformed sequences become U+FFFD.
#[must_use]
pub fn shape_bytes(bytes: &[u8]) -> Vec<u32> {
    let logical: Vec<u32> = utf8::codepoints(bytes).map(|cp| cp.value).collect();
    shape_codepoints(&logical)
}

/// Shape already decoded logical codepoints.
#[must_use]
pub fn shape_codepoints(logical: &[u32]) -> Vec<u32> {
    if logical.is_empty() {
        return Vec::new();
    }
    let ligated = apply_lam_alef(logical);
    let shaped = apply_contextual_forms(&ligated);
    let visual = reorder_visual(&shaped);
    tracing::trace!(
        input = logical.len(),
        ligatures = logical.len() - ligated.len(),
        output = visual.len(),
        "arabic shaped"
    );
    visual
}

/// Nearest non-transparent joining type in `neighbours`.
fn nearest_joining(neighbours: impl Iterator<Item = u32>) -> JoiningType {
    neighbours
        .map(joining_type)
        .find(|&jt| jt != JoiningType::Transparent)
        .unwrap_or_default()
}

fn apply_lam_alef(cps: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(cps.len());
    let mut i = 0;
    while i < cps.len() {
        let cp = cps[i];
        if cp == LAM {
            let alef_idx = cps[i + 1..]
                .iter()
                .position(|&c| !is_arabic_diacritic(c))
                .map(|offset| i + 1 + offset);
            if let Some(alef_idx) = alef_idx {
                let prev_joins = nearest_joining(out.iter().rev().copied()).joins_to_left();
                if let Some(ligature) = lam_alef_ligature(cps[alef_idx], prev_joins) {
                    out.push(ligature);
                    out.extend_from_slice(&cps[i + 1..alef_idx]);
                    i = alef_idx + 1;
                    continue;
                }
            }
        }
        out.push(cp);
        i += 1;
    }
    out
}

fn apply_contextual_forms(cps: &[u32]) -> Vec<u32> {
    cps.iter()
        .enumerate()
        .map(|(i, &cp)| {
            if !is_arabic_base_char(cp) {
                return cp;
            }
            let prev_joins = nearest_joining(cps[..i].iter().rev().copied()).joins_to_left();
            let next_joins = nearest_joining(cps[i + 1..].iter().copied()).joins_to_right();
            contextual_form(cp, prev_joins, next_joins)
        })
        .collect()
}
