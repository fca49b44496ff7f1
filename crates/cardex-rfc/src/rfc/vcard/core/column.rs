//! The fixed output column schema.

use cardex_core::types::EmailLabel;

/// One column of the output schema.
///
/// The schema is fixed and ordered; every record carries a value for every
/// column, so a missing key cannot occur at runtime. The social columns
/// (facebook, linkedin, twitter) are reserved and always emitted empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Organisation,
    JobTitle,
    HomePhone,
    WorkPhone,
    CellPhone,
    Fax,
    PersonalEmail,
    WorkEmail,
    StreetName,
    City,
    StateProvince,
    ZipPostCode,
    Country,
    Facebook,
    Linkedin,
    Twitter,
    Website,
}

impl Column {
    /// All columns in output order.
    pub const ALL: [Self; 18] = [
        Self::Name,
        Self::Organisation,
        Self::JobTitle,
        Self::HomePhone,
        Self::WorkPhone,
        Self::CellPhone,
        Self::Fax,
        Self::PersonalEmail,
        Self::WorkEmail,
        Self::StreetName,
        Self::City,
        Self::StateProvince,
        Self::ZipPostCode,
        Self::Country,
        Self::Facebook,
        Self::Linkedin,
        Self::Twitter,
        Self::Website,
    ];

    /// Number of columns in the schema.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this column in the schema.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Header text for this column.
    ///
    /// The non-work email header depends on the configured label.
    #[must_use]
    pub const fn header(self, email_label: EmailLabel) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Organisation => "Organisation",
            Self::JobTitle => "Job Title",
            Self::HomePhone => "Home Phone",
            Self::WorkPhone => "Work Phone",
            Self::CellPhone => "Cell Phone",
            Self::Fax => "Fax",
            Self::PersonalEmail => email_label.column_header(),
            Self::WorkEmail => "Work Email",
            Self::StreetName => "Street Name",
            Self::City => "City",
            Self::StateProvince => "State/Province",
            Self::ZipPostCode => "Zip/Post Code",
            Self::Country => "Country",
            Self::Facebook => "facebook",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Website => "website",
        }
    }
}
