//! Static lookup tables: country names, occupations and the offline dataset.
//!
//! Display strings are Turkish, the product's locale.

use super::classifier::CrimeLabel;

/// Two-letter country code to localized display name.
pub const COUNTRIES: &[(&str, &str)] = &[
    ("TR", "Türkiye"),
    ("DE", "Almanya"),
    ("GB", "Birleşik Krallık"),
    ("US", "Amerika Birleşik Devletleri"),
    ("FR", "Fransa"),
    ("RU", "Rusya"),
    ("BR", "Brezilya"),
    ("MX", "Meksika"),
    ("CN", "Çin"),
    ("IN", "Hindistan"),
    ("IT", "İtalya"),
    ("ES", "İspanya"),
    ("CA", "Kanada"),
    ("AU", "Avustralya"),
    ("JP", "Japonya"),
    ("NL", "Hollanda"),
    ("SE", "İsveç"),
    ("NO", "Norveç"),
    ("DK", "Danimarka"),
    ("FI", "Finlandiya"),
];

/// High-population / high-registration countries tried after the random one.
pub const PRIORITY_COUNTRIES: &[&str] = &[
    "TR", "US", "FR", "DE", "GB", "IT", "ES", "RU", "CN", "BR", "IN",
];

/// Placeholder when a record carries no country at all.
pub const UNKNOWN_COUNTRY: &str = "Bilinmiyor";

/// Countries assigned to profile results, which expose no nationality.
pub const SAFE_COUNTRIES: &[&str] = &["Türkiye", "Almanya", "Amerika", "İngiltere", "Hollanda"];

/// Localized name for a country code, case-insensitive.
pub fn country_name(code: &str) -> Option<&'static str> {
    let code = code.trim();
    COUNTRIES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Country codes known to the name table, in table order.
pub fn country_codes() -> impl Iterator<Item = &'static str> {
    COUNTRIES.iter().map(|(code, _)| *code)
}

/// An occupation searched for in English and displayed localized.
#[derive(Debug, PartialEq, Eq)]
pub struct Occupation {
    pub en: &'static str,
    pub tr: &'static str,
}

pub const OCCUPATIONS: &[Occupation] = &[
    Occupation { en: "CEO", tr: "Şirket Yöneticisi" },
    Occupation { en: "Software Engineer", tr: "Yazılım Mühendisi" },
    Occupation { en: "Doctor", tr: "Doktor" },
    Occupation { en: "Nurse", tr: "Hemşire" },
    Occupation { en: "Pilot", tr: "Pilot" },
    Occupation { en: "Architect", tr: "Mimar" },
    Occupation { en: "Lawyer", tr: "Avukat" },
    Occupation { en: "Teacher", tr: "Öğretmen" },
    Occupation { en: "Chef", tr: "Aşçı" },
    Occupation { en: "Journalist", tr: "Gazeteci" },
    Occupation { en: "Driver", tr: "Şoför" },
    Occupation { en: "Artist", tr: "Sanatçı" },
    Occupation { en: "Accountant", tr: "Muhasebeci" },
    Occupation { en: "Consultant", tr: "Danışman" },
];

/// Crime labels handed out when no registry data is available.
pub const FALLBACK_CRIMES: &[CrimeLabel] = &[
    CrimeLabel::Homicide,
    CrimeLabel::Narcotics,
    CrimeLabel::Theft,
    CrimeLabel::Fraud,
    CrimeLabel::TerroristMembership,
    CrimeLabel::HumanTrafficking,
    CrimeLabel::OrganizedCrime,
    CrimeLabel::Weapons,
    CrimeLabel::Smuggling,
    CrimeLabel::Kidnapping,
];

// ============================================================================
// Offline dataset
// ============================================================================

pub const OFFLINE_NAMES: &[&str] = &[
    "Ahmet Yılmaz",
    "Mehmet Demir",
    "Ayşe Kaya",
    "Fatma Çelik",
    "Mustafa Şahin",
    "Zeynep Yıldız",
    "Emre Öztürk",
    "Elif Arslan",
    "Burak Doğan",
    "Selin Aydın",
];

pub const OFFLINE_PHOTOS: &[&str] = &[
    "https://randomuser.me/api/portraits/men/32.jpg",
    "https://randomuser.me/api/portraits/women/44.jpg",
    "https://randomuser.me/api/portraits/men/85.jpg",
    "https://randomuser.me/api/portraits/women/65.jpg",
    "https://randomuser.me/api/portraits/men/22.jpg",
    "https://randomuser.me/api/portraits/women/12.jpg",
];

pub const OFFLINE_COUNTRIES: &[&str] = &["Türkiye", "Almanya", "Fransa", "Amerika", "İngiltere"];

pub const OFFLINE_OCCUPATIONS: &[&str] = &[
    "Yazılım Mühendisi",
    "Satış Danışmanı",
    "İK Uzmanı",
    "Grafik Tasarımcı",
    "Öğretmen",
    "Mimar",
    "Doktor",
];
