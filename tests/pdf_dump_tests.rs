//! PDF Dump Tests
//!
//! End-to-end tests for the document dump loop using the real extractor.

use std::fs;
use std::path::Path;

use promo_tools::pdf::{dump_documents, DocumentOutcome, PageExtractor, PdfExtractor};
use promo_tools::{Result, ToolError};
use tempfile::tempdir;

/// Build a minimal PDF with one Helvetica text line per page
fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
    let page_count = page_texts.len();
    let font_id = 3 + 2 * page_count;
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            (0..page_count)
                .map(|i| format!("{} 0 R", 3 + 2 * i))
                .collect::<Vec<_>>()
                .join(" "),
            page_count
        ),
    ];
    for (i, text) in page_texts.iter().enumerate() {
        let content = format!("BT /F1 24 Tf 72 700 Td ({}) Tj ET", text);
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 {} 0 R >> >> /Contents {} 0 R >>",
            font_id,
            4 + 2 * i
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
    for offset in offsets {
        pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    pdf
}

/// Serves fixed pages for one known path and defers to the real parser otherwise
struct FixtureExtractor<'a> {
    fixture: &'a Path,
    pages: Vec<String>,
}

impl PageExtractor for FixtureExtractor<'_> {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        if path == self.fixture {
            Ok(self.pages.clone())
        } else {
            PdfExtractor::new().extract_pages(path)
        }
    }
}

#[test]
fn test_missing_path_reported_and_skipped() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("Modul 5 - P1.pdf");

    let mut out = Vec::new();
    let report = dump_documents(&mut out, &PdfExtractor::new(), &[&missing]).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("FILE: Modul 5 - P1.pdf"));
    assert!(text.contains(&format!("File not found: {}", missing.display())));
    assert_eq!(report.outcomes, vec![(missing, DocumentOutcome::NotFound)]);
}

#[test]
fn test_non_pdf_reported_and_next_file_unaffected() {
    let dir = tempdir().unwrap();
    let corrupt = dir.path().join("corrupt.pdf");
    let valid = dir.path().join("valid.pdf");
    fs::write(&corrupt, b"this is a text file with a pdf extension").unwrap();
    fs::write(&valid, b"").unwrap();

    let extractor = FixtureExtractor {
        fixture: &valid,
        pages: vec!["Location-Aware\n".to_string(), "  GPS and maps  ".to_string()],
    };

    // Reference output for the valid file alone
    let mut alone = Vec::new();
    dump_documents(&mut alone, &extractor, &[&valid]).unwrap();
    let alone = String::from_utf8(alone).unwrap();

    let mut out = Vec::new();
    let report = dump_documents(&mut out, &extractor, &[&corrupt, &valid]).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains(&format!("Error reading {}", corrupt.display())));
    assert!(text.ends_with(&alone));
    assert!(alone.contains("-- Page 1 --\nLocation-Aware\n-- Page 2 --\nGPS and maps\n"));

    match &report.outcomes[0].1 {
        DocumentOutcome::Failed { reason } => assert!(!reason.is_empty()),
        other => panic!("Expected Failed outcome, got {:?}", other),
    }
    assert_eq!(report.outcomes[1].1, DocumentOutcome::Dumped { pages: 2 });
    assert_eq!(report.dumped_count(), 1);
}

#[test]
fn test_real_pdf_after_corrupt_file() {
    let dir = tempdir().unwrap();
    let corrupt = dir.path().join("corrupt.pdf");
    let real = dir.path().join("handout.pdf");
    fs::write(&corrupt, b"PK\x03\x04 zipped slides, not a pdf").unwrap();
    fs::write(&real, build_pdf(&["Hello One", "Second Page"])).unwrap();

    let mut alone = Vec::new();
    dump_documents(&mut alone, &PdfExtractor::new(), &[&real]).unwrap();
    let alone = String::from_utf8(alone).unwrap();

    let expected = format!(
        "\n{rule}\nFILE: handout.pdf\n{rule}\n-- Page 1 --\nHello One\n-- Page 2 --\nSecond Page\n",
        rule = "=".repeat(80)
    );
    assert_eq!(alone, expected);

    let mut out = Vec::new();
    let report = dump_documents(&mut out, &PdfExtractor::new(), &[&corrupt, &real]).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains(&format!("Error reading {}", corrupt.display())));
    assert!(text.ends_with(&expected));
    assert!(matches!(report.outcomes[0].1, DocumentOutcome::Failed { .. }));
    assert_eq!(report.outcomes[1].1, DocumentOutcome::Dumped { pages: 2 });
}

#[test]
fn test_real_extractor_reads_pages_in_order() {
    let pages = PdfExtractor::new()
        .extract_from_bytes(&build_pdf(&["Alpha", "Beta", "Gamma"]), "three.pdf")
        .unwrap();
    let trimmed: Vec<&str> = pages.iter().map(|p| p.trim()).collect();
    assert_eq!(trimmed, vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn test_real_extractor_rejects_non_pdf() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.pdf");
    fs::write(&path, b"just some notes").unwrap();

    match PdfExtractor::new().extract_pages(&path) {
        Err(ToolError::PdfParse { path: reported, .. }) => {
            assert!(reported.contains("notes.pdf"));
        }
        other => panic!("Expected PdfParse error, got {:?}", other),
    }
}

#[test]
fn test_outcomes_follow_input_order() {
    let dir = tempdir().unwrap();
    let paths: Vec<_> = ["c.pdf", "a.pdf", "b.pdf"]
        .iter()
        .map(|name| dir.path().join(name))
        .collect();

    let mut out = Vec::new();
    let report = dump_documents(&mut out, &PdfExtractor::new(), &paths).unwrap();
    let text = String::from_utf8(out).unwrap();

    let reported: Vec<_> = report.outcomes.iter().map(|(p, _)| p.clone()).collect();
    assert_eq!(reported, paths);

    let c = text.find("FILE: c.pdf").unwrap();
    let a = text.find("FILE: a.pdf").unwrap();
    let b = text.find("FILE: b.pdf").unwrap();
    assert!(c < a && a < b);
}
