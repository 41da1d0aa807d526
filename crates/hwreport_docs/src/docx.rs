use anyhow::Result;
use docx_rs::*;
use hwreport_core::StudentRecord;
use std::io::Cursor;

pub const EMPTY_REPORT_MESSAGE: &str = "No students with missed homework were found.";

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";
const BULLET_STYLE: &str = "ListBullet";
const BULLET_NUMBERING_ID: usize = 1;

/// Render the missed-homework report as DOCX bytes.
///
/// The title becomes a `Title` paragraph. Each student gets a `Heading1`
/// line `"{name}, {group}, {email}"` followed by one bullet per missed
/// assignment. With no records the body is a single informational paragraph.
pub fn render_missed_homework_document(records: &[StudentRecord], title: &str) -> Result<Vec<u8>> {
    let mut docx = with_report_styles(Docx::new());

    docx = docx.add_paragraph(styled_paragraph(TITLE_STYLE, title));

    if records.is_empty() {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(EMPTY_REPORT_MESSAGE)));
        return pack(docx);
    }

    for record in records {
        docx = docx.add_paragraph(styled_paragraph(HEADING_STYLE, &record.heading()));

        for assignment in &record.missed {
            let bullet = styled_paragraph(BULLET_STYLE, &format!(" {assignment}"))
                .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0));
            docx = docx.add_paragraph(bullet);
        }
    }

    pack(docx)
}

fn styled_paragraph(style: &str, text: &str) -> Paragraph {
    Paragraph::new()
        .style(style)
        .add_run(Run::new().add_text(text))
}

/// Title/heading/list styles plus the bullet numbering they refer to.
fn with_report_styles(docx: Docx) -> Docx {
    // sizes are in half-points: 52 = 26pt, 32 = 16pt, 22 = 11pt
    let title = Style::new(TITLE_STYLE, StyleType::Paragraph)
        .name("Title")
        .size(52);
    let heading = Style::new(HEADING_STYLE, StyleType::Paragraph)
        .name("Heading 1")
        .bold()
        .size(32);
    let bullet = Style::new(BULLET_STYLE, StyleType::Paragraph)
        .name("List Bullet")
        .size(22);

    let bullet_level = Level::new(
        0,
        Start::new(1),
        NumberFormat::new("bullet"),
        LevelText::new("\u{2022}"),
        LevelJc::new("left"),
    )
    .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None);

    docx.add_style(title)
        .add_style(heading)
        .add_style(bullet)
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(bullet_level))
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID))
}

fn pack(docx: Docx) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| anyhow::anyhow!("Failed to pack DOCX: {}", e))?;

    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwreport_core::Scalar;
    use std::io::Read;

    fn document_xml(bytes: &[u8]) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    fn record(name: &str, group: Scalar, email: &str, missed: &[&str]) -> StudentRecord {
        StudentRecord {
            name: name.into(),
            group,
            email: email.into(),
            missed: missed.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_single_student() {
        let records = vec![record("Ann Lee", Scalar::Int(1), "a@e.edu", &["HW1"])];
        let bytes = render_missed_homework_document(&records, "Missed Homework Report").unwrap();
        // DOCX is a zip file -- starts with PK magic bytes
        assert_eq!(&bytes[0..2], b"PK");

        let xml = document_xml(&bytes);
        assert!(xml.contains("Missed Homework Report"));
        assert!(xml.contains("Ann Lee, 1, a@e.edu"));
        assert!(xml.contains("> HW1</w:t>"));
        assert_eq!(xml.matches("\"Heading1\"").count(), 1);
        assert_eq!(xml.matches("\"ListBullet\"").count(), 1);
        assert!(!xml.contains(EMPTY_REPORT_MESSAGE));
    }

    #[test]
    fn test_render_empty_records() {
        let bytes = render_missed_homework_document(&[], "Week 3").unwrap();
        assert_eq!(&bytes[0..2], b"PK");

        let xml = document_xml(&bytes);
        assert!(xml.contains("Week 3"));
        assert_eq!(xml.matches(EMPTY_REPORT_MESSAGE).count(), 1);
        assert!(!xml.contains("\"Heading1\""));
        assert!(!xml.contains("\"ListBullet\""));
    }

    #[test]
    fn test_render_keeps_record_and_bullet_order() {
        let records = vec![
            record("Ann Lee", Scalar::Int(1), "a@e.edu", &["HW1", "HW3"]),
            record("Bo Kim", Scalar::Text("B".into()), "b@e.edu", &["Quiz 2"]),
        ];
        let xml = document_xml(&render_missed_homework_document(&records, "Report").unwrap());

        let positions: Vec<usize> = ["Ann Lee, 1, a@e.edu", " HW1", " HW3", "Bo Kim, B, b@e.edu", " Quiz 2"]
            .iter()
            .map(|needle| xml.find(needle).expect(needle))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(xml.matches("\"Heading1\"").count(), 2);
        assert_eq!(xml.matches("\"ListBullet\"").count(), 3);
    }

    #[test]
    fn test_render_special_characters() {
        let records = vec![record("Zoë <O'Neil>", Scalar::Empty, "z&o@e.edu", &["HW \"A\""])];
        let bytes = render_missed_homework_document(&records, "R&D").unwrap();
        assert_eq!(&bytes[0..2], b"PK");
        assert!(document_xml(&bytes).contains("Zoë"));
    }
}
