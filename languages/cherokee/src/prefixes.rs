//! Pronominal prefix classification.
//!
//! The `pp` column of the verb table names the prefix a verb takes in the
//! third person; together with the person/number tag of a paradigm cell it
//! decides the prefix set (A or B) and the surface allomorph.

/// Person/number tags that take a `.A` or `.B` set marker
const SET_MARKED_TAGS: [&str; 8] = [
    "1SG", "2SG", "3SG", "1DU.IN", "1DU.EX", "1PL.IN", "1PL.EX", "3PL",
];

/// Set A variants spelled with `k` that are written `ka` in analyses
const KA_VARIANTS: [&str; 5] = ["ka", "ka\u{301}", "kaa\u{301}", "ka\u{301}a\u{301}", "kaa"];

/// Surface prefix before a consonant-initial root, keyed by gloss
const PRE_CONSONANTAL: &[(&str, &str)] = &[
    ("1SG.A", "ci"),
    ("2SG.A", "hi"),
    ("1DU.IN.A", "iinii"),
    ("1DU.EX.A", "oostii"),
    ("2DU", "stii"),
    ("1PL.IN.A", "iitii"),
    ("1PL.EX.A", "oocii"),
    ("2PL", "iicii"),
    ("1SG>AN", "cii"),
    ("2SG>AN", "hii"),
    ("1DU.IN>AN", "eenii"),
    ("1DU.EX>AN", "oostii"),
    ("2DU>AN", "eestii"),
    ("1PL.IN>AN", "eetii"),
    ("1PL.EX>AN", "oocii"),
    ("2PL>AN", "eecii"),
    ("1SG.B", "aki"),
    ("2SG.B", "ca"),
    ("1DU.IN.B", "kinii"),
    ("1DU.EX.B", "ookinii"),
    ("1PL.IN.B", "iikii"),
    ("1PL.EX.B", "ookii"),
];

/// Surface prefix before a vowel-initial root, keyed by gloss
const PRE_VOCALIC: &[(&str, &str)] = &[
    ("1SG.A", "k"),
    ("2SG.A", "h"),
    ("1DU.IN.A", "iin"),
    ("1DU.EX.A", "oost"),
    ("2DU", "st"),
    ("1PL.IN.A", "iit"),
    ("1PL.EX.A", "ooc"),
    ("2PL", "iic"),
    ("1SG>AN", "ciiy"),
    ("2SG>AN", "hiiy"),
    ("1DU.IN>AN", "een"),
    ("1DU.EX>AN", "oost"),
    ("2DU>AN", "eest"),
    ("1PL.IN>AN", "eet"),
    ("1PL.EX>AN", "ooc"),
    ("2PL>AN", "eec"),
    ("1SG.B", "akw"),
    ("2SG.B", "c"),
    ("1DU.IN.B", "kin"),
    ("1DU.EX.B", "ookin"),
    ("1PL.IN.B", "iik"),
    ("1PL.EX.B", "ook"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixGroup {
    /// Set A, `3SG` class i (`ka-`)
    SetAClassI,
    /// Set A, `3SG` class ii (`a-` / zero)
    SetAClassII,
    SetB,
    /// Animate `a-` / inanimate `uu-` given together
    MixedAnimacy,
    /// `kaa-` or zero given together
    MixedKaa,
}

impl PrefixGroup {
    /// Mixed groups are resolved to one reading and reported
    pub fn is_mixed(&self) -> bool {
        matches!(self, PrefixGroup::MixedAnimacy | PrefixGroup::MixedKaa)
    }
}

/// Every recognised `pp` value (NFD) and its group.
const PREFIX_GROUPS: &[(PrefixGroup, &[&str])] = &[
    (
        PrefixGroup::SetAClassI,
        &["ka", "ka\u{301}", "kaa\u{301}", "ka\u{301}a\u{301}", "k", "kaa"],
    ),
    (PrefixGroup::SetAClassII, &["\u{d8}", "a"]),
    (PrefixGroup::SetB, &["uu", "uuw", "anii", "an"]),
    (PrefixGroup::MixedAnimacy, &["a, uu", "a (AN); uu (INAN)"]),
    (PrefixGroup::MixedKaa, &["kaa/\u{d8}"]),
];

/// Group a converted `pp` value belongs to
pub fn group_of(prefix: &str) -> Option<PrefixGroup> {
    PREFIX_GROUPS
        .iter()
        .find(|(_, members)| members.contains(&prefix))
        .map(|(group, _)| *group)
}

/// A classified pronominal prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronominalPrefix {
    pub group: PrefixGroup,
    /// Surface allomorph
    pub prefix: String,
    pub gloss: String,
}

/// Classify a converted `pp` value under a paradigm cell's person tag.
///
/// `root` is the converted verb root; its first letter picks the pre-vocalic
/// or pre-consonantal allomorph of first and second person prefixes.
/// Returns `None` when the prefix is in no known group.
pub fn classify(prefix: &str, tag: &str, root: &str) -> Option<PronominalPrefix> {
    let group = group_of(prefix)?;
    let marked = SET_MARKED_TAGS.contains(&tag);

    let (prefix, gloss) = match group {
        PrefixGroup::SetAClassI if marked => (prefix, set_a(tag, ".i")),
        PrefixGroup::SetAClassII if marked => (prefix, set_a(tag, ".ii")),
        PrefixGroup::SetB if marked => (prefix, format!("{tag}.B")),
        PrefixGroup::SetAClassI | PrefixGroup::SetAClassII | PrefixGroup::SetB => {
            (prefix, tag.to_string())
        }
        PrefixGroup::MixedAnimacy if marked => ("a", set_a(tag, ".ii")),
        PrefixGroup::MixedAnimacy => ("a", tag.to_string()),
        PrefixGroup::MixedKaa if tag == "1SG" => ("ka", "1SG>AN".to_string()),
        PrefixGroup::MixedKaa if marked => ("ka", set_a(tag, ".i")),
        PrefixGroup::MixedKaa => ("ka", tag.to_string()),
    };

    let prefix = if KA_VARIANTS.contains(&prefix) { "ka" } else { prefix };
    let prefix = speech_act_allomorph(&gloss, root).unwrap_or(prefix);

    Some(PronominalPrefix {
        group,
        prefix: prefix.to_string(),
        gloss,
    })
}

/// `tag.A`, with the `3SG` class marker appended
fn set_a(tag: &str, class_marker: &str) -> String {
    if tag == "3SG" {
        format!("{tag}.A{class_marker}")
    } else {
        format!("{tag}.A")
    }
}

/// First and second person prefixes are spelled from the allomorph tables.
fn speech_act_allomorph(gloss: &str, root: &str) -> Option<&'static str> {
    if !gloss.starts_with(['1', '2']) {
        return None;
    }
    let table = if root.starts_with(['a', 'e', 'i', 'o', 'u']) {
        PRE_VOCALIC
    } else {
        PRE_CONSONANTAL
    };
    table
        .iter()
        .find(|(key, _)| *key == gloss)
        .map(|(_, allomorph)| *allomorph)
}
