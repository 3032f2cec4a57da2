#![forbid(unsafe_code)]

//! Thai character classes (U+0E00..U+0E7F).

/// Role of a codepoint in a Thai orthographic cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThaiCharType {
    /// ก..ฮ
    Consonant,
    /// เ แ โ ใ ไ: written before the consonant they belong to.
    LeadingVowel,
    /// Vowels drawn over the consonant (ิ ี ึ ื ั ็).
    AboveVowel,
    /// Vowels drawn under the consonant (ุ ู ฺ).
    BelowVowel,
    /// ่ ้ ๊ ๋
    ToneMark,
    /// Vowels drawn after the consonant (ะ า ำ ๅ).
    FollowVowel,
    /// ํ
    Nikhahit,
    /// Thanthakhat ์ and Yamakkan ๎.
    Yamakkan,
    /// ๐..๙
    Digit,
    /// Any other codepoint in the Thai block (ฯ, ๆ, ฿, ...).
    Symbol,
    /// Outside the Thai block.
    NonThai,
}

impl ThaiCharType {
    /// Attaches to the preceding consonant without advancing the pen.
    #[inline]
    #[must_use]
    pub const fn is_combining(self) -> bool {
        matches!(
            self,
            Self::AboveVowel | Self::BelowVowel | Self::ToneMark | Self::Nikhahit | Self::Yamakkan
        )
    }
}

#[inline]
#[must_use]
pub const fn is_thai_codepoint(cp: u32) -> bool {
    matches!(cp, 0x0E00..=0x0E7F)
}

#[must_use]
pub const fn thai_char_type(cp: u32) -> ThaiCharType {
    match cp {
        0x0E01..=0x0E2E => ThaiCharType::Consonant,
        0x0E40..=0x0E44 => ThaiCharType::LeadingVowel,
        0x0E31 | 0x0E34..=0x0E37 | 0x0E47 => ThaiCharType::AboveVowel,
        0x0E38..=0x0E3A => ThaiCharType::BelowVowel,
        0x0E48..=0x0E4B => ThaiCharType::ToneMark,
        0x0E30 | 0x0E32 | 0x0E33 | 0x0E45 => ThaiCharType::FollowVowel,
        0x0E4D => ThaiCharType::Nikhahit,
        0x0E4C | 0x0E4E => ThaiCharType::Yamakkan,
        0x0E50..=0x0E59 => ThaiCharType::Digit,
        0x0E00..=0x0E7F => ThaiCharType::Symbol,
        _ => ThaiCharType::NonThai,
    }
}

#[inline]
#[must_use]
pub const fn is_thai_combining(cp: u32) -> bool {
    thai_char_type(cp).is_combining()
}

#[must_use]
pub fn contains_thai(text: &str) -> bool {
    text.chars().any(|c| is_thai_codepoint(u32::from(c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(thai_char_type(0x0E01), ThaiCharType::Consonant);
        assert_eq!(thai_char_type(0x0E2E), ThaiCharType::Consonant);
        assert_eq!(thai_char_type(0x0E2F), ThaiCharType::Symbol); // paiyannoi
        assert_eq!(thai_char_type(0x0E40), ThaiCharType::LeadingVowel);
        assert_eq!(thai_char_type(0x0E34), ThaiCharType::AboveVowel);
        assert_eq!(thai_char_type(0x0E47), ThaiCharType::AboveVowel);
        assert_eq!(thai_char_type(0x0E38), ThaiCharType::BelowVowel);
        assert_eq!(thai_char_type(0x0E49), ThaiCharType::ToneMark);
        assert_eq!(thai_char_type(0x0E32), ThaiCharType::FollowVowel);
        assert_eq!(thai_char_type(0x0E4D), ThaiCharType::Nikhahit);
        assert_eq!(thai_char_type(0x0E4C), ThaiCharType::Yamakkan);
        assert_eq!(thai_char_type(0x0E55), ThaiCharType::Digit);
        assert_eq!(thai_char_type(0x0E3F), ThaiCharType::Symbol); // baht
        assert_eq!(thai_char_type(0x0E00), ThaiCharType::Symbol);
    }

    #[test]
    fn outside_block_is_non_thai() {
        for cp in [0, 0x41, 0x0DFF, 0x0E80, 0x0628, u32::MAX] {
            assert_eq!(thai_char_type(cp), ThaiCharType::NonThai, "U+{cp:04X}");
            assert!(!is_thai_codepoint(cp));
        }
    }

    #[test]
    fn combining_classes() {
        assert!(is_thai_combining(0x0E34));
        assert!(is_thai_combining(0x0E39));
        assert!(is_thai_combining(0x0E4B));
        assert!(is_thai_combining(0x0E4D));
        assert!(is_thai_combining(0x0E4E));
        assert!(!is_thai_combining(0x0E32)); // follow vowel advances
        assert!(!is_thai_combining(0x0E01));
    }

    #[test]
    fn contains() {
        assert!(contains_thai("abc \u{0E01}"));
        assert!(!contains_thai("abc"));
        assert!(!contains_thai(""));
    }
}
