use chrono::NaiveDate;
use serde::Deserialize;

/// Subject label marking the opening of an insolvency proceeding.
pub const SUBJECT_OPENING: &str = "Eröffnung des Insolvenzverfahrens";

/// Subject label marking the decision that closes a proceeding.
/// Rows with this subject feed the duration estimate.
pub const SUBJECT_DECISION: &str = "Entscheidungen im Verfahren";

/// One insolvency-court announcement, as published.
///
/// Field order matters: the derived `Ord` is the lexicographic order over
/// `(date, insolvency_court, court_file_number, subject, name_debtor,
/// domicile_debtor)`, which is the total order the report sorts by. No
/// single field is unique per filing — court file numbers are reused across
/// courts and debtor-name spellings vary — so identity is the whole row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub struct Filing {
    pub date: NaiveDate,
    pub insolvency_court: String,
    /// Court-assigned case identifier, `<digits>/<2-digit-year>`.
    pub court_file_number: String,
    pub subject: String,
    /// Required downstream; raw rows may still lack it and get dropped.
    pub name_debtor: Option<String>,
    pub domicile_debtor: Option<String>,
}

/// Sorts filings ascending by the full six-field tuple.
pub fn sort_filings(rows: &mut [Filing]) {
    rows.sort();
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn filing(
        date: &str,
        court: &str,
        file_number: &str,
        subject: &str,
        name: Option<&str>,
        domicile: Option<&str>,
    ) -> Filing {
        Filing {
            date: date.parse().unwrap(),
            insolvency_court: court.to_string(),
            court_file_number: file_number.to_string(),
            subject: subject.to_string(),
            name_debtor: name.map(str::to_string),
            domicile_debtor: domicile.map(str::to_string),
        }
    }

    #[test]
    fn sort_is_total_over_the_six_tuple() {
        let mut rows = vec![
            filing("2020-03-04", "AG Köln", "12/19", SUBJECT_OPENING, Some("B GmbH"), None),
            filing("2020-03-02", "AG Köln", "12/19", SUBJECT_OPENING, Some("B GmbH"), None),
            filing("2020-03-02", "AG Aachen", "9/18", SUBJECT_DECISION, Some("A KG"), Some("Aachen")),
            filing("2020-03-02", "AG Köln", "12/19", SUBJECT_DECISION, Some("B GmbH"), None),
        ];
        sort_filings(&mut rows);
        for pair in rows.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(rows[0].insolvency_court, "AG Aachen");
        assert_eq!(rows[3].date, "2020-03-04".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn missing_optionals_sort_before_present_ones() {
        let a = filing("2020-03-02", "AG Köln", "12/19", SUBJECT_OPENING, Some("B GmbH"), None);
        let b = filing("2020-03-02", "AG Köln", "12/19", SUBJECT_OPENING, Some("B GmbH"), Some("Köln"));
        assert!(a < b);
    }
}
