//! Medicine safety tips.
//!
//! Every tip carries its text in all supported languages; callers pick a
//! language and optionally a category. Nothing here is validated or rewritten,
//! the tables are served as-is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ContentError, ContentResult};

/// Languages the tips are written in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Luganda
    Lg,
    /// Acholi
    Ach,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Lg, Language::Ach];

    /// Short code used as the lookup key ("en", "lg", "ach").
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Lg => "lg",
            Language::Ach => "ach",
        }
    }

    /// Display name of the language.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Lg => "Luganda",
            Language::Ach => "Acholi",
        }
    }
}

impl FromStr for Language {
    type Err = ContentError;

    fn from_str(s: &str) -> ContentResult<Self> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| ContentError::UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Topic a tip belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Spotting,
    Safety,
    Resistance,
    Storage,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Spotting,
        Category::Safety,
        Category::Resistance,
        Category::Storage,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Category::Spotting => "spotting",
            Category::Safety => "safety",
            Category::Resistance => "resistance",
            Category::Storage => "storage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Spotting => "Spotting Fakes",
            Category::Safety => "Safety Practices",
            Category::Resistance => "Antimicrobial Resistance",
            Category::Storage => "Storage",
        }
    }
}

impl FromStr for Category {
    type Err = ContentError;

    fn from_str(s: &str) -> ContentResult<Self> {
        let code = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|cat| cat.code() == code)
            .ok_or_else(|| ContentError::UnknownCategory(s.to_string()))
    }
}

/// Title and body in one language.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LocalizedText {
    pub title: &'static str,
    pub content: &'static str,
}

/// A tip with all of its translations.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EducationTip {
    pub id: &'static str,
    pub category: Category,
    pub en: LocalizedText,
    pub lg: LocalizedText,
    pub ach: LocalizedText,
}

impl EducationTip {
    /// Text of this tip in the given language.
    pub fn text(&self, language: Language) -> &LocalizedText {
        match language {
            Language::En => &self.en,
            Language::Lg => &self.lg,
            Language::Ach => &self.ach,
        }
    }

    /// Flatten to a single-language tip.
    pub fn localize(&self, language: Language) -> LocalizedTip {
        let text = self.text(language);
        LocalizedTip {
            id: self.id.to_string(),
            category: self.category,
            title: text.title.to_string(),
            content: text.content.to_string(),
        }
    }
}

/// A tip rendered in one language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalizedTip {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub content: String,
}

/// All tips, in display order.
pub fn all_tips() -> &'static [EducationTip] {
    &TIPS
}

/// Every tip in the given language, in display order.
pub fn tips_for(language: Language) -> Vec<LocalizedTip> {
    TIPS.iter().map(|tip| tip.localize(language)).collect()
}

/// Tips of one category in the given language.
pub fn tips_in(language: Language, category: Category) -> Vec<LocalizedTip> {
    TIPS.iter()
        .filter(|tip| tip.category == category)
        .map(|tip| tip.localize(language))
        .collect()
}

/// Number of tips filed under a category.
pub fn category_count(category: Category) -> usize {
    TIPS.iter().filter(|tip| tip.category == category).count()
}

static TIPS: [EducationTip; 8] = [
    EducationTip {
        id: "1",
        category: Category::Spotting,
        en: LocalizedText {
            title: "Check the Packaging",
            content: "Authentic medicines have clear, professional packaging with no spelling errors, clear expiry dates, and proper seals.",
        },
        lg: LocalizedText {
            title: "Kebera Ekifuniko",
            content: "Eddagala ettukuvu lirina ekifuniko ekitegeerekeka, ekitalina nsobi mu nnyukuta, n'ekifo ekitegeerekeka eky'okuggwaawo.",
        },
        ach: LocalizedText {
            title: "Nen Pakej",
            content: "Yat ma atir tye ki pakej ma ber, ma pe tye ki bal i nyig, ki nino pa kare ma pire tek, ki seal ma ber.",
        },
    },
    EducationTip {
        id: "2",
        category: Category::Spotting,
        en: LocalizedText {
            title: "Verify Batch Numbers",
            content: "Every medicine should have a batch number. Use MedCheck to verify it matches the manufacturer's records.",
        },
        lg: LocalizedText {
            title: "Kakasa Namba y'Omuganda",
            content: "Buli ddagala lirina namba y'omuganda. Kozesa MedCheck okukakasa nti egatta n'ebiwandiiko by'omukolera.",
        },
        ach: LocalizedText {
            title: "Mok Namba me Batch",
            content: "Yat weng myero obed ki namba me batch. Tii ki MedCheck me moko ni oromo ki gin ma gicoyo pa lukweny.",
        },
    },
    EducationTip {
        id: "3",
        category: Category::Safety,
        en: LocalizedText {
            title: "Buy from Trusted Pharmacies",
            content: "Only purchase medicines from licensed pharmacies. Use our Pharmacy Check feature to verify their credentials.",
        },
        lg: LocalizedText {
            title: "Gula mu Dduka ly'Eddagala Eryeesigika",
            content: "Gulanga eddagala mu maduka g'eddagala agalina layisensi. Kozesa ekikugu kyaffe eky'okukebera amaduka g'eddagala okukakasa ebibakwata.",
        },
        ach: LocalizedText {
            title: "Wil Ki Bot Yat Ma Igen",
            content: "Wil yat ki i gang yat ma tye ki layikin keken. Tii ki jami me Pharmacy Check me moko layikin gi.",
        },
    },
    EducationTip {
        id: "4",
        category: Category::Resistance,
        en: LocalizedText {
            title: "Complete Your Antibiotics",
            content: "Always complete the full course of antibiotics even if you feel better. Stopping early contributes to antimicrobial resistance.",
        },
        lg: LocalizedText {
            title: "Maliriza Eddagala Lyonna",
            content: "Bulijjo maliriza eddagala lyonna ery'okutta obuwuka ne bw'owulira nga wawona. Okuyimiriza mangu kiyamba mu kukola obuwuka obutawangulika ddagala.",
        },
        ach: LocalizedText {
            title: "Tyek Yat me Bacteria",
            content: "Tyek yat me bacteria weng kata bed ni inyorre ni iparo ber. Juko cok con yato me tedo bacteria ma pe mwoyo ki yat.",
        },
    },
    EducationTip {
        id: "5",
        category: Category::Storage,
        en: LocalizedText {
            title: "Store Medicines Properly",
            content: "Keep medicines in a cool, dry place away from direct sunlight. Check storage instructions on the label.",
        },
        lg: LocalizedText {
            title: "Tereka Eddagala Bulungi",
            content: "Kuuma eddagala mu kifo ekinyeegeevu era ekikalu nga tekiraba musana butereevu. Kebera ebiragiro by'okutereka ku kalabba.",
        },
        ach: LocalizedText {
            title: "Kan Yat Maber",
            content: "Kan yat i kabedo ma two kuc, ma yot woko ki ceng ma tye tir. Nen cik me kano yat i kom label.",
        },
    },
    EducationTip {
        id: "6",
        category: Category::Safety,
        en: LocalizedText {
            title: "Watch for Side Effects",
            content: "Be aware of common side effects and seek medical help if you experience severe reactions like difficulty breathing or swelling.",
        },
        lg: LocalizedText {
            title: "Tuntulira Ebiva ku Ddagala",
            content: "Manya ebiva ku ddagala ebya bulijjo era noonya obujjanjabi bw'olaba ebiva ku ddagala ebikambwe ng'okukaluubirwa okukka omukka oba okuzimba.",
        },
        ach: LocalizedText {
            title: "Nen Gin Ma Yat Kelo",
            content: "Bed ki ngec kom gin ma yat twero kelo ki dwog kony pa lutino ka ineno gin marac macalo peko me yubo mukuluk onyo pii.",
        },
    },
    EducationTip {
        id: "7",
        category: Category::Safety,
        en: LocalizedText {
            title: "Never Share Medicines",
            content: "Medicines are prescribed for specific conditions. Never share your medicines with others, even if they have similar symptoms.",
        },
        lg: LocalizedText {
            title: "Togabana Ddagala",
            content: "Eddagala liweerwa olw'endwadde ezitongole. Togabana ddagala lyo na balala wadde ng'balina obubonero obw'enjawulo.",
        },
        ach: LocalizedText {
            title: "Kik I Poki Yat",
            content: "Yat miyo pi tuo matwal keken. Kik i poki yat mamegi ki dano mukene, kata bed ni gutye ki jami macalo.",
        },
    },
    EducationTip {
        id: "8",
        category: Category::Spotting,
        en: LocalizedText {
            title: "Check Expiry Dates",
            content: "Never use expired medicines. They may be ineffective or even harmful. MedCheck helps you track expiry dates.",
        },
        lg: LocalizedText {
            title: "Kebera Olunaku Ddagala Lw'Eggwaawo",
            content: "Tokozesa ddagala erimaze okuggwaawo. Liyinza obutakola oba n'okukosa. MedCheck ekuyamba okugoberera ennaku ddagala ze ziggwaamu.",
        },
        ach: LocalizedText {
            title: "Nen Nino Pa Kare",
            content: "Kik i tii ki yat ma kare ne okato. Romo bedo ni pe tiyo onyo yobo. MedCheck konyi me lubo nino pa kare.",
        },
    },
];
