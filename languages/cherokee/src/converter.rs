use std::sync::LazyLock;

use dailp_core::Transcriber;
use dailp_core::normalize::{normalize_pair, unicode_names};
use regex::Regex;

const ACUTE: char = '\u{301}';
const GRAVE: char = '\u{300}';
const GLOTTAL_STOP: &str = "ʔ";

/// `a:` → `aa`, keeping an acute on the first vowel (`á:` → `áá`)
static VOWEL_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([aeiouv]\x{301}?):").unwrap());
/// `sg*` at the end of a consonant run: the tone mark belongs before the run
static METATHESIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([nywstcl]+)\*").unwrap());
/// `a(:)` → `aa`
static PAREN_LENGTH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(.)\(:\)").unwrap());

/// One tone-mark rewrite: `X<marker>` or `XX<marker>`.
#[derive(Debug, Clone, Copy)]
struct ToneRule {
    marker: char,
    doubled: bool,
    first: Option<char>,
    second: Option<char>,
}

impl ToneRule {
    const fn single(marker: char, mark: Option<char>) -> Self {
        Self {
            marker,
            doubled: false,
            first: mark,
            second: None,
        }
    }

    const fn doubled(marker: char, first: Option<char>, second: Option<char>) -> Self {
        Self {
            marker,
            doubled: true,
            first,
            second,
        }
    }

    fn width(&self) -> usize {
        if self.doubled { 3 } else { 2 }
    }

    /// Letter matched at the start of `window`, if the rule fires there.
    fn matches(&self, window: &[char]) -> Option<char> {
        let width = self.width();
        if window.len() < width {
            return None;
        }
        let letter = window[0];
        if letter == '\n' || window[width - 1] != self.marker {
            return None;
        }
        if self.doubled && window[1] != letter {
            return None;
        }
        // `(a^)`: falling tone on an optional final vowel is kept as written
        if self.marker == '^' && window.get(width) == Some(&')') {
            return None;
        }
        Some(letter)
    }

    /// Rewrite every non-overlapping match, scanning left to right.
    fn apply(&self, input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        let mut out = String::with_capacity(input.len() + 4);
        let mut i = 0;
        while i < chars.len() {
            match self.matches(&chars[i..]) {
                Some(letter) => {
                    out.push(letter);
                    out.extend(self.first);
                    if self.doubled {
                        out.push(letter);
                        out.extend(self.second);
                    }
                    i += self.width();
                }
                None => {
                    out.push(chars[i]);
                    i += 1;
                }
            }
        }
        out
    }
}

/// Tone rules, most specific first. A doubled-letter pattern must run before
/// its single-letter counterpart, which would otherwise claim the second
/// letter and leave the first unmarked.
const TONE_RULES: [ToneRule; 8] = [
    ToneRule::doubled('!', Some(ACUTE), Some(ACUTE)),
    ToneRule::single('!', Some(ACUTE)),
    ToneRule::doubled('*', None, Some(ACUTE)),
    ToneRule::single('*', Some(ACUTE)),
    ToneRule::doubled('`', Some(GRAVE), Some(GRAVE)),
    ToneRule::single('`', Some(GRAVE)),
    ToneRule::doubled('^', Some(ACUTE), None),
    ToneRule::single('^', None),
];

/// Converts Uchihara database transcriptions into DAILP orthography.
#[derive(Debug, Clone, Copy, Default)]
pub struct UchiharaConverter;

impl UchiharaConverter {
    pub fn new() -> Self {
        Self
    }

    /// Run the rule cascade on an already normalized string.
    fn rewrite(&self, original: &str) -> String {
        let mut out = VOWEL_LENGTH.replace_all(original, "${1}${1}").into_owned();
        out = METATHESIS.replace_all(&out, "*${1}").into_owned();
        for rule in &TONE_RULES {
            out = rule.apply(&out);
        }
        out = PAREN_LENGTH.replace_all(&out, "${1}${1}").into_owned();
        out.replace('\'', GLOTTAL_STOP)
    }
}

impl Transcriber for UchiharaConverter {
    fn notation(&self) -> &str {
        "uchihara"
    }

    fn convert(&self, source: &str, clue: Option<&str>) -> String {
        let (original, clue) = normalize_pair(source, clue);
        if clue.as_deref() == Some(original.as_str()) {
            return original;
        }

        let converted = self.rewrite(&original);
        if let Some(clue) = clue.as_deref()
            && clue != converted
        {
            tracing::debug!(
                notation = self.notation(),
                original = source,
                converted = %converted,
                clue,
                "converted transcription differs from clue: {}",
                unicode_names(&converted)
            );
        }
        converted
    }
}
