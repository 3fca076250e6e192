use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical job-category identifiers used as the storage partition key for
/// question pools. Closed set, defined at build time; the wire form is the
/// upper-case hyphenated key (e.g. `INFORMATION-TECHNOLOGY`).
///
/// `Default` is the sentinel pool every unresolvable label falls back to, so
/// downstream question selection always has something to draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum RoleKey {
    Hr,
    Designer,
    InformationTechnology,
    Teacher,
    Advocate,
    BusinessDevelopment,
    Healthcare,
    Fitness,
    Agriculture,
    Bpo,
    Sales,
    Consultant,
    DigitalMedia,
    Automobile,
    Chef,
    Finance,
    Apparel,
    Engineering,
    Accountant,
    Construction,
    PublicRelations,
    Banking,
    Arts,
    Aviation,
    DataScience,
    WebDeveloper,
    Default,
}

impl RoleKey {
    /// Every canonical key, in declaration order. Substring fallbacks iterate
    /// this array, so the order is part of the resolver's observable behavior
    /// and must not be shuffled.
    pub const ALL: [RoleKey; 27] = [
        RoleKey::Hr,
        RoleKey::Designer,
        RoleKey::InformationTechnology,
        RoleKey::Teacher,
        RoleKey::Advocate,
        RoleKey::BusinessDevelopment,
        RoleKey::Healthcare,
        RoleKey::Fitness,
        RoleKey::Agriculture,
        RoleKey::Bpo,
        RoleKey::Sales,
        RoleKey::Consultant,
        RoleKey::DigitalMedia,
        RoleKey::Automobile,
        RoleKey::Chef,
        RoleKey::Finance,
        RoleKey::Apparel,
        RoleKey::Engineering,
        RoleKey::Accountant,
        RoleKey::Construction,
        RoleKey::PublicRelations,
        RoleKey::Banking,
        RoleKey::Arts,
        RoleKey::Aviation,
        RoleKey::DataScience,
        RoleKey::WebDeveloper,
        RoleKey::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKey::Hr => "HR",
            RoleKey::Designer => "DESIGNER",
            RoleKey::InformationTechnology => "INFORMATION-TECHNOLOGY",
            RoleKey::Teacher => "TEACHER",
            RoleKey::Advocate => "ADVOCATE",
            RoleKey::BusinessDevelopment => "BUSINESS-DEVELOPMENT",
            RoleKey::Healthcare => "HEALTHCARE",
            RoleKey::Fitness => "FITNESS",
            RoleKey::Agriculture => "AGRICULTURE",
            RoleKey::Bpo => "BPO",
            RoleKey::Sales => "SALES",
            RoleKey::Consultant => "CONSULTANT",
            RoleKey::DigitalMedia => "DIGITAL-MEDIA",
            RoleKey::Automobile => "AUTOMOBILE",
            RoleKey::Chef => "CHEF",
            RoleKey::Finance => "FINANCE",
            RoleKey::Apparel => "APPAREL",
            RoleKey::Engineering => "ENGINEERING",
            RoleKey::Accountant => "ACCOUNTANT",
            RoleKey::Construction => "CONSTRUCTION",
            RoleKey::PublicRelations => "PUBLIC-RELATIONS",
            RoleKey::Banking => "BANKING",
            RoleKey::Arts => "ARTS",
            RoleKey::Aviation => "AVIATION",
            RoleKey::DataScience => "DATA-SCIENCE",
            RoleKey::WebDeveloper => "WEB-DEVELOPER",
            RoleKey::Default => "DEFAULT",
        }
    }

    /// Exact (byte-for-byte) lookup of a canonical key string.
    pub fn from_canonical(value: &str) -> Option<RoleKey> {
        RoleKey::ALL.iter().copied().find(|key| key.as_str() == value)
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
