//! Decimal digit runs, keyed by their zero-point
//!
//! Every entry is the code point of digit zero in one script. The nine code
//! points that follow it are that script's digits one through nine, and no
//! two runs overlap.

use std::borrow::Cow;

/// Number of code points in one decimal digit run
pub const RUN_LEN: u32 = 10;

/// Zero-points of every supported decimal digit script
pub const STANDARD_ZERO_POINTS: [char; 59] = [
    '\u{0030}',  // Latin (ASCII)
    '\u{0660}',  // Arabic-Indic
    '\u{06F0}',  // Extended Arabic-Indic (Persian, Urdu)
    '\u{07C0}',  // NKo
    '\u{0966}',  // Devanagari
    '\u{09E6}',  // Bengali
    '\u{0A66}',  // Gurmukhi
    '\u{0AE6}',  // Gujarati
    '\u{0B66}',  // Oriya
    '\u{0BE6}',  // Tamil
    '\u{0C66}',  // Telugu
    '\u{0CE6}',  // Kannada
    '\u{0D66}',  // Malayalam
    '\u{0DE6}',  // Sinhala Lith
    '\u{0E50}',  // Thai
    '\u{0ED0}',  // Lao
    '\u{0F20}',  // Tibetan
    '\u{1040}',  // Myanmar
    '\u{1090}',  // Myanmar Shan
    '\u{17E0}',  // Khmer
    '\u{1810}',  // Mongolian
    '\u{1946}',  // Limbu
    '\u{19D0}',  // New Tai Lue
    '\u{1A80}',  // Tai Tham Hora
    '\u{1A90}',  // Tai Tham Tham
    '\u{1B50}',  // Balinese
    '\u{1BB0}',  // Sundanese
    '\u{1C40}',  // Lepcha
    '\u{1C50}',  // Ol Chiki
    '\u{A620}',  // Vai
    '\u{A8D0}',  // Saurashtra
    '\u{A900}',  // Kayah Li
    '\u{A9D0}',  // Javanese
    '\u{A9F0}',  // Myanmar Tai Laing
    '\u{AA50}',  // Cham
    '\u{ABF0}',  // Meetei Mayek
    '\u{FF10}',  // Fullwidth
    '\u{104A0}', // Osmanya
    '\u{11066}', // Brahmi
    '\u{110F0}', // Sora Sompeng
    '\u{11136}', // Chakma
    '\u{111D0}', // Sharada
    '\u{112F0}', // Khudawadi
    '\u{11450}', // Newa
    '\u{114D0}', // Tirhuta
    '\u{11650}', // Modi
    '\u{116C0}', // Takri
    '\u{11730}', // Ahom
    '\u{118E0}', // Warang Citi
    '\u{11C50}', // Bhaiksuki
    '\u{11D50}', // Masaram Gondi
    '\u{16A60}', // Mro
    '\u{16B50}', // Pahawh Hmong
    '\u{1D7CE}', // Mathematical Bold
    '\u{1D7D8}', // Mathematical Double-Struck
    '\u{1D7E2}', // Mathematical Sans-Serif
    '\u{1D7EC}', // Mathematical Sans-Serif Bold
    '\u{1D7F6}', // Mathematical Monospace
    '\u{1E950}', // Adlam
];

/// Ordered, non-overlapping set of decimal digit runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitRangeTable {
    zero_points: Cow<'static, [char]>,
}

impl DigitRangeTable {
    /// Table covering every script in [`STANDARD_ZERO_POINTS`]
    pub const fn standard() -> Self {
        Self {
            zero_points: Cow::Borrowed(&STANDARD_ZERO_POINTS),
        }
    }

    /// Standard table extended with additional zero-points
    ///
    /// Each extra run must stay inside the `char` space, consist solely of
    /// code points in the Unicode Number category, and must not overlap any
    /// run already in the table.
    pub fn with_extra(extra: &[char]) -> Result<Self, String> {
        if extra.is_empty() {
            return Ok(Self::standard());
        }

        let mut zero_points = STANDARD_ZERO_POINTS.to_vec();
        for &zero in extra {
            if let Some(&existing) = zero_points.iter().find(|&&z| runs_overlap(z, zero)) {
                return Err(format!(
                    "digit run at U+{:04X} overlaps existing run at U+{:04X}",
                    zero as u32, existing as u32
                ));
            }
            validate_run(zero)?;
            zero_points.push(zero);
        }

        log::debug!(
            "built digit table with {} extra run(s), {} total",
            extra.len(),
            zero_points.len()
        );

        Ok(Self {
            zero_points: Cow::Owned(zero_points),
        })
    }

    /// Digit value of `ch`, if it falls inside one of the runs
    #[inline]
    pub fn lookup(&self, ch: char) -> Option<u8> {
        let code = ch as u32;
        self.zero_points.iter().find_map(|&zero| {
            let offset = code.wrapping_sub(zero as u32);
            (offset < RUN_LEN).then_some(offset as u8)
        })
    }

    /// Zero-points in table order
    pub fn zero_points(&self) -> &[char] {
        &self.zero_points
    }

    /// Whether a run starting at `zero` is in the table
    pub fn contains_run(&self, zero: char) -> bool {
        self.zero_points.contains(&zero)
    }

    /// Number of scripts covered
    pub fn len(&self) -> usize {
        self.zero_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zero_points.is_empty()
    }

    /// Whether this is the unextended standard table
    pub fn is_standard(&self) -> bool {
        matches!(self.zero_points, Cow::Borrowed(_))
    }
}

impl Default for DigitRangeTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn runs_overlap(a: char, b: char) -> bool {
    let (a, b) = (a as u32, b as u32);
    a < b + RUN_LEN && b < a + RUN_LEN
}

fn validate_run(zero: char) -> Result<(), String> {
    for offset in 0..RUN_LEN {
        let code = zero as u32 + offset;
        match char::from_u32(code) {
            Some(ch) if ch.is_numeric() => {}
            Some(_) => {
                return Err(format!(
                    "digit run at U+{:04X} contains non-numeric code point U+{code:04X}",
                    zero as u32
                ))
            }
            None => {
                return Err(format!(
                    "digit run at U+{:04X} leaves the valid code point range",
                    zero as u32
                ))
            }
        }
    }
    Ok(())
}
