//! Screens, home actions and bottom navigation tabs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every screen of the app. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Home,
    Scan,
    BatchEntry,
    MedicineResult,
    MyMedicines,
    Education,
    PharmacyCheck,
    SmsVerify,
    Invite,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 10] = [
        Screen::Home,
        Screen::Scan,
        Screen::BatchEntry,
        Screen::MedicineResult,
        Screen::MyMedicines,
        Screen::Education,
        Screen::PharmacyCheck,
        Screen::SmsVerify,
        Screen::Invite,
        Screen::Profile,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Scan => "scan",
            Screen::BatchEntry => "batch-entry",
            Screen::MedicineResult => "medicine-result",
            Screen::MyMedicines => "my-medicines",
            Screen::Education => "education",
            Screen::PharmacyCheck => "pharmacy-check",
            Screen::SmsVerify => "sms-verify",
            Screen::Invite => "invite",
            Screen::Profile => "profile",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Tiles on the home screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum HomeAction {
    QrScan,
    BatchEntry,
    MyMedicines,
    Education,
    PharmacyCheck,
    SmsVerify,
    Invite,
}

impl HomeAction {
    pub const ALL: [HomeAction; 7] = [
        HomeAction::QrScan,
        HomeAction::BatchEntry,
        HomeAction::MyMedicines,
        HomeAction::Education,
        HomeAction::PharmacyCheck,
        HomeAction::SmsVerify,
        HomeAction::Invite,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            HomeAction::QrScan => "qr-scan",
            HomeAction::BatchEntry => "batch-entry",
            HomeAction::MyMedicines => "my-medicines",
            HomeAction::Education => "education",
            HomeAction::PharmacyCheck => "pharmacy-check",
            HomeAction::SmsVerify => "sms-verify",
            HomeAction::Invite => "invite",
        }
    }

    /// Unknown keys map to `None`, which callers treat as "stay put".
    pub fn from_key(key: &str) -> Option<Self> {
        HomeAction::ALL.into_iter().find(|a| a.key() == key)
    }

    /// The screen this tile opens.
    pub fn destination(&self) -> Screen {
        match self {
            HomeAction::QrScan => Screen::Scan,
            HomeAction::BatchEntry => Screen::BatchEntry,
            HomeAction::MyMedicines => Screen::MyMedicines,
            HomeAction::Education => Screen::Education,
            HomeAction::PharmacyCheck => Screen::PharmacyCheck,
            HomeAction::SmsVerify => Screen::SmsVerify,
            HomeAction::Invite => Screen::Invite,
        }
    }
}

/// Bottom navigation bar entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NavTab {
    Home,
    Scan,
    MyMedicines,
    Education,
    Profile,
}

impl NavTab {
    pub const ALL: [NavTab; 5] = [
        NavTab::Home,
        NavTab::Scan,
        NavTab::MyMedicines,
        NavTab::Education,
        NavTab::Profile,
    ];

    pub fn screen(&self) -> Screen {
        match self {
            NavTab::Home => Screen::Home,
            NavTab::Scan => Screen::Scan,
            NavTab::MyMedicines => Screen::MyMedicines,
            NavTab::Education => Screen::Education,
            NavTab::Profile => Screen::Profile,
        }
    }

    /// The tab highlighted for a screen, if it has one.
    pub fn for_screen(screen: Screen) -> Option<Self> {
        NavTab::ALL.into_iter().find(|tab| tab.screen() == screen)
    }
}

impl FromStr for NavTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavTab::ALL
            .into_iter()
            .find(|tab| tab.screen().key() == s)
            .ok_or_else(|| s.to_string())
    }
}
