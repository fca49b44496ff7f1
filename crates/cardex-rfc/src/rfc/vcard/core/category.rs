//! Phone and email classification from property parameters.
//!
//! vCard exporters put category hints in free-form parameter text
//! (`TYPE=WORK`, `type=CELL,VOICE`, `X-ABLabel:FAX`, ...), so
//! classification is a case-insensitive substring search over the joined
//! parameter list rather than strict TYPE parsing.

use super::column::Column;

/// Phone category derived from parameter text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhoneCategory {
    Home,
    Work,
    Cell,
}

impl PhoneCategory {
    const fn column(self) -> Column {
        match self {
            Self::Home => Column::HomePhone,
            Self::Work => Column::WorkPhone,
            Self::Cell => Column::CellPhone,
        }
    }
}

/// Joins parameters for substring matching.
fn param_text(params: &[String]) -> String {
    params.join(",").to_ascii_lowercase()
}

/// Classifies a TEL property into its output column.
///
/// "work" and "cell" substrings pick the category, defaulting to Home.
/// A "fax" substring anywhere takes priority and routes the number to the
/// single Fax column regardless of category.
#[must_use]
pub fn classify_telephone(params: &[String]) -> Column {
    let text = param_text(params);

    if text.contains("fax") {
        return Column::Fax;
    }

    let category = if text.contains("work") {
        PhoneCategory::Work
    } else if text.contains("cell") {
        PhoneCategory::Cell
    } else {
        PhoneCategory::Home
    };

    category.column()
}

/// Classifies an EMAIL property into its output column.
///
/// A "work" substring selects Work Email; everything else lands in the
/// default email column (labelled Home or Personal per configuration).
#[must_use]
pub fn classify_email(params: &[String]) -> Column {
    if param_text(params).contains("work") {
        Column::WorkEmail
    } else {
        Column::PersonalEmail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn telephone_defaults_to_home() {
        assert_eq!(classify_telephone(&params(&[])), Column::HomePhone);
        assert_eq!(
            classify_telephone(&params(&["TYPE=VOICE"])),
            Column::HomePhone
        );
    }

    #[test]
    fn telephone_work_and_cell() {
        assert_eq!(
            classify_telephone(&params(&["TYPE=WORK"])),
            Column::WorkPhone
        );
        assert_eq!(
            classify_telephone(&params(&["type=cell", "type=voice"])),
            Column::CellPhone
        );
    }

    #[test]
    fn telephone_work_beats_cell() {
        assert_eq!(
            classify_telephone(&params(&["TYPE=CELL,WORK"])),
            Column::WorkPhone
        );
    }

    #[test]
    fn fax_takes_priority_over_category() {
        assert_eq!(
            classify_telephone(&params(&["TYPE=WORK", "TYPE=FAX"])),
            Column::Fax
        );
        assert_eq!(classify_telephone(&params(&["TYPE=HomeFAX"])), Column::Fax);
    }

    #[test]
    fn email_work_substring() {
        assert_eq!(
            classify_email(&params(&["TYPE=INTERNET", "TYPE=WORK"])),
            Column::WorkEmail
        );
        assert_eq!(
            classify_email(&params(&["TYPE=INTERNET"])),
            Column::PersonalEmail
        );
    }
}
