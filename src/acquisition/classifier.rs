//! Charge text classification.
//!
//! Maps free-text, multilingual charge descriptions (English, Spanish,
//! French) onto a closed set of localized [`CrimeLabel`]s. Pure and total:
//! every input, including an absent one, yields exactly one label.
//!
//! Rules are evaluated top to bottom and the first match wins:
//! 1. composite rules needing two co-occurring token groups
//! 2. single-category keyword groups
//! 3. length-based fallback (short codes vs. long unmapped text)

use std::fmt;

/// Charges shorter than this (in characters) that match no rule are treated
/// as codes or abbreviations.
pub const SHORT_TEXT_THRESHOLD: usize = 20;

/// Closed set of classification labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrimeLabel {
    /// No charge text at all
    Wanted,
    LeavingForTerrorism,
    TerroristMembership,
    AttemptedHomicide,
    HumanTrafficking,
    ChildSexualAbuse,
    Homicide,
    Narcotics,
    Fraud,
    Theft,
    Terrorism,
    SexualOffense,
    Kidnapping,
    Assault,
    Weapons,
    Counterfeiting,
    Smuggling,
    OrganizedCrime,
    Arson,
    Extortion,
    /// Short unmatched text
    SeriousOffense,
    /// Long unmatched text; the original wording is withheld
    Withheld,
}

impl CrimeLabel {
    pub const ALL: [CrimeLabel; 22] = [
        CrimeLabel::Wanted,
        CrimeLabel::LeavingForTerrorism,
        CrimeLabel::TerroristMembership,
        CrimeLabel::AttemptedHomicide,
        CrimeLabel::HumanTrafficking,
        CrimeLabel::ChildSexualAbuse,
        CrimeLabel::Homicide,
        CrimeLabel::Narcotics,
        CrimeLabel::Fraud,
        CrimeLabel::Theft,
        CrimeLabel::Terrorism,
        CrimeLabel::SexualOffense,
        CrimeLabel::Kidnapping,
        CrimeLabel::Assault,
        CrimeLabel::Weapons,
        CrimeLabel::Counterfeiting,
        CrimeLabel::Smuggling,
        CrimeLabel::OrganizedCrime,
        CrimeLabel::Arson,
        CrimeLabel::Extortion,
        CrimeLabel::SeriousOffense,
        CrimeLabel::Withheld,
    ];

    /// Localized display string.
    pub fn as_str(self) -> &'static str {
        match self {
            CrimeLabel::Wanted => "Aranıyor",
            CrimeLabel::LeavingForTerrorism => "Terör örgütü faaliyeti amacıyla yurt dışına çıkış",
            CrimeLabel::TerroristMembership => "Terör örgütü üyeliği veya yöneticiliği",
            CrimeLabel::AttemptedHomicide => "Kasten öldürmeye teşebbüs",
            CrimeLabel::HumanTrafficking => "İnsan kaçakçılığı",
            CrimeLabel::ChildSexualAbuse => "Çocuğun cinsel istismarı",
            CrimeLabel::Homicide => "Cinayet / Kasten Öldürme",
            CrimeLabel::Narcotics => "Uyuşturucu Madde Ticareti",
            CrimeLabel::Fraud => "Dolandırıcılık ve Mali Suçlar",
            CrimeLabel::Theft => "Hırsızlık ve Soygun",
            CrimeLabel::Terrorism => "Terör Örgütü Faaliyetleri",
            CrimeLabel::SexualOffense => "Cinsel Saldırı / İstismar",
            CrimeLabel::Kidnapping => "Adam Kaçırma / Kişiyi Hürriyetinden Yoksun Kılma",
            CrimeLabel::Assault => "Kasten Yaralama / Darp",
            CrimeLabel::Weapons => "Yasadışı Silah Ticareti",
            CrimeLabel::Counterfeiting => "Sahtecilik",
            CrimeLabel::Smuggling => "Kaçakçılık",
            CrimeLabel::OrganizedCrime => "Organize Suç Örgütü Üyeliği",
            CrimeLabel::Arson => "Kundaklama",
            CrimeLabel::Extortion => "Gasp / Haraç",
            CrimeLabel::SeriousOffense => "Ağır Ceza Suçu",
            CrimeLabel::Withheld => "Aranıyor (Detaylar Gizli)",
        }
    }
}

impl fmt::Display for CrimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token looked up in lowercased charge text.
#[derive(Debug, Clone, Copy)]
enum Needle {
    /// Matches anywhere in the text
    Sub(&'static str),
    /// Matches a whole word only; for short tokens that would otherwise
    /// fire inside unrelated words ("vol" in "involuntary")
    Word(&'static str),
}

impl Needle {
    fn found_in(self, text: &str) -> bool {
        match self {
            Needle::Sub(token) => text.contains(token),
            Needle::Word(word) => text.split(|c: char| !c.is_alphanumeric()).any(|w| w == word),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Predicate {
    /// Any needle matches
    Any(&'static [Needle]),
    /// At least one needle from each group matches
    Both(&'static [Needle], &'static [Needle]),
}

impl Predicate {
    fn matches(self, text: &str) -> bool {
        let any = |needles: &[Needle]| needles.iter().any(|n| n.found_in(text));
        match self {
            Predicate::Any(needles) => any(needles),
            Predicate::Both(first, second) => any(first) && any(second),
        }
    }
}

/// Ordered (predicate, label) pair.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    predicate: Predicate,
    label: CrimeLabel,
}

impl ClassificationRule {
    pub fn label(&self) -> CrimeLabel {
        self.label
    }

    fn matches(&self, text: &str) -> bool {
        self.predicate.matches(text)
    }
}

const fn any(needles: &'static [Needle], label: CrimeLabel) -> ClassificationRule {
    ClassificationRule { predicate: Predicate::Any(needles), label }
}

const fn both(
    first: &'static [Needle],
    second: &'static [Needle],
    label: CrimeLabel,
) -> ClassificationRule {
    ClassificationRule { predicate: Predicate::Both(first, second), label }
}

use Needle::{Sub, Word};

/// The rule table. Order is significant.
pub static RULES: &[ClassificationRule] = &[
    // ── Composite rules: more specific than any single keyword ──────
    both(&[Sub("leaving canada")], &[Sub("terrorist")], CrimeLabel::LeavingForTerrorism),
    any(
        &[
            Sub("terrorist group"),
            Sub("terrorist organization"),
            Sub("terrorist organisation"),
            Sub("organización terrorista"),
            Sub("organisation terroriste"),
        ],
        CrimeLabel::TerroristMembership,
    ),
    both(
        &[Sub("murder"), Sub("homicide"), Sub("asesinato"), Sub("homicidio"), Sub("meurtre")],
        &[Sub("attempt"), Sub("tentativa"), Sub("tentative")],
        CrimeLabel::AttemptedHomicide,
    ),
    both(
        &[Sub("trafficking"), Word("trata"), Sub("traite")],
        &[Sub("human"), Sub("persons"), Sub("seres humanos"), Sub("êtres humains")],
        CrimeLabel::HumanTrafficking,
    ),
    both(
        &[Sub("sexual"), Sub("sexuel")],
        &[Sub("child"), Word("minor"), Word("minors"), Sub("menor"), Sub("mineur")],
        CrimeLabel::ChildSexualAbuse,
    ),
    // ── Single-category keyword groups ──────────────────────────────
    any(
        &[
            Sub("murder"),
            Sub("kill"),
            Sub("homicide"),
            Sub("manslaughter"),
            Sub("asesinato"),
            Sub("homicidio"),
            Sub("matar"),
            Sub("meurtre"),
            Sub("assassinat"),
        ],
        CrimeLabel::Homicide,
    ),
    any(
        &[
            Sub("drug"),
            Sub("narcotic"),
            Sub("cocaine"),
            Sub("heroin"),
            Sub("cannabis"),
            Sub("psychotropic"),
            Sub("droga"),
            Sub("cocaína"),
            Sub("estupefacientes"),
            Sub("narcotráfico"),
            Sub("stupéfiants"),
            Sub("drogue"),
        ],
        CrimeLabel::Narcotics,
    ),
    any(
        &[
            Sub("fraud"),
            Sub("laundering"),
            Sub("financial"),
            Sub("embezzlement"),
            Sub("swindling"),
            Sub("estafa"),
            Sub("lavado"),
            Sub("blanqueo"),
            Sub("escroquerie"),
            Sub("blanchiment"),
        ],
        CrimeLabel::Fraud,
    ),
    any(
        &[
            Sub("robbery"),
            Sub("theft"),
            Sub("burglary"),
            Sub("larceny"),
            Sub("stealing"),
            Word("robo"),
            Sub("hurto"),
            Sub("latrocinio"),
            Word("vol"),
            Sub("cambriolage"),
        ],
        CrimeLabel::Theft,
    ),
    any(&[Sub("terror")], CrimeLabel::Terrorism),
    any(
        &[
            Sub("rape"),
            Sub("sexual"),
            Sub("abuse"),
            Sub("violación"),
            Sub("violacion"),
            Word("viol"),
            Sub("sexuelle"),
        ],
        CrimeLabel::SexualOffense,
    ),
    any(
        &[
            Sub("kidnap"),
            Sub("abduction"),
            Sub("hostage"),
            Sub("secuestro"),
            Sub("rapto"),
            Sub("detención ilegal"),
            Sub("enlèvement"),
            Sub("séquestration"),
            Sub("sequestration"),
        ],
        CrimeLabel::Kidnapping,
    ),
    any(
        &[
            Sub("assault"),
            Sub("injury"),
            Sub("wound"),
            Sub("lesiones"),
            Sub("heridas"),
            Sub("agresión"),
            Sub("violence"),
            Sub("blessures"),
        ],
        CrimeLabel::Assault,
    ),
    any(
        &[
            Sub("weapon"),
            Sub("firearm"),
            Word("arms"),
            Sub("armas"),
            Sub("armes"),
            Sub("explosive"),
        ],
        CrimeLabel::Weapons,
    ),
    any(
        &[
            Sub("counterfeit"),
            Sub("forgery"),
            Sub("falsificación"),
            Sub("falsificacion"),
            Sub("falsification"),
            Sub("contrefaçon"),
        ],
        CrimeLabel::Counterfeiting,
    ),
    any(
        &[Sub("smuggling"), Sub("contrabando"), Sub("contrebande"), Sub("contrabande")],
        CrimeLabel::Smuggling,
    ),
    any(
        &[
            Sub("organized crime"),
            Sub("organised crime"),
            Sub("criminal organization"),
            Sub("criminal organisation"),
            Sub("crimen organizado"),
            Sub("delincuencia organizada"),
            Sub("organisation criminelle"),
        ],
        CrimeLabel::OrganizedCrime,
    ),
    any(&[Sub("arson"), Sub("incendio"), Sub("incendie")], CrimeLabel::Arson),
    any(
        &[
            Sub("extortion"),
            Sub("extorsión"),
            Sub("extorsion"),
            Sub("blackmail"),
            Sub("chantaje"),
            Sub("chantage"),
            Sub("racket"),
        ],
        CrimeLabel::Extortion,
    ),
];

/// Classify a charge description.
///
/// Accepts `&str` or `Option<&str>`; absent or blank text yields
/// [`CrimeLabel::Wanted`].
pub fn classify<'a>(raw: impl Into<Option<&'a str>>) -> CrimeLabel {
    let Some(raw) = raw.into() else {
        return CrimeLabel::Wanted;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CrimeLabel::Wanted;
    }

    let text = trimmed.to_lowercase();
    if let Some(rule) = RULES.iter().find(|rule| rule.matches(&text)) {
        return rule.label;
    }

    if trimmed.chars().count() < SHORT_TEXT_THRESHOLD {
        CrimeLabel::SeriousOffense
    } else {
        CrimeLabel::Withheld
    }
}
