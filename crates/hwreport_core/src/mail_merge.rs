use crate::report::StudentRecord;

/// Header names expected by mail-merge tools, in column order.
pub const MAIL_MERGE_HEADERS: [&str; 3] = ["FirstName", "Email", "MissedHomeworks"];

/// One mail-merge line per student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMergeRow {
    pub first_name: String,
    pub email: String,
    /// Missed assignments joined by `\n`.
    pub missed_homeworks: String,
}

impl MailMergeRow {
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            first_name: record
                .name
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string(),
            email: record.email.clone(),
            missed_homeworks: record.missed.join("\n"),
        }
    }

    pub fn fields(&self) -> [&str; 3] {
        [
            self.first_name.as_str(),
            self.email.as_str(),
            self.missed_homeworks.as_str(),
        ]
    }
}

pub fn build_mail_merge_rows(records: &[StudentRecord]) -> Vec<MailMergeRow> {
    records.iter().map(MailMergeRow::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Scalar;

    fn record(name: &str, missed: &[&str]) -> StudentRecord {
        StudentRecord {
            name: name.into(),
            group: Scalar::Int(1),
            email: "a@e.edu".into(),
            missed: missed.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_first_name_is_first_token() {
        let row = MailMergeRow::from_record(&record("Mary Ann Lee", &["HW1"]));
        assert_eq!(row.first_name, "Mary");
        assert_eq!(row.email, "a@e.edu");
    }

    #[test]
    fn test_missed_joined_by_newline() {
        let row = MailMergeRow::from_record(&record("Ann Lee", &["HW1", "HW3"]));
        assert_eq!(row.missed_homeworks, "HW1\nHW3");
        assert_eq!(row.fields(), ["Ann", "a@e.edu", "HW1\nHW3"]);
    }

    #[test]
    fn test_empty_name_gives_empty_first_name() {
        let row = MailMergeRow::from_record(&record("", &["HW1"]));
        assert_eq!(row.first_name, "");
    }

    #[test]
    fn test_one_row_per_record_in_order() {
        let records = vec![record("Ann Lee", &["HW1"]), record("Bo Kim", &["HW2"])];
        let rows = build_mail_merge_rows(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].first_name, "Ann");
        assert_eq!(rows[1].first_name, "Bo");
    }
}
