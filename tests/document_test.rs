//! Integration tests for document composition and rendering.

use std::io::Write;

use rtfdoc::presets::{color, font};
use rtfdoc::{
    page_size, Document, Error, FontFamily, Orientation, Outcome, PageFormat, PageSetup, Picture,
    Rgb,
};

#[test]
fn test_default_content_width() {
    let doc = Document::new();
    assert_eq!(doc.page_format(), PageFormat::A4);
    assert_eq!(doc.orientation(), Orientation::Portrait);
    assert_eq!(doc.max_content_width(), 10466);
}

#[test]
fn test_margins_update_content_width() {
    let mut doc = Document::new();
    doc.set_margin_left(1440).set_margin_right(1000);
    assert_eq!(doc.max_content_width(), 11906 - 2440);

    // Vertical margins do not affect the width.
    doc.set_margin_top(2000).set_margin_bottom(2000);
    assert_eq!(doc.max_content_width(), 11906 - 2440);
}

#[test]
fn test_orientation_swaps_page() {
    let mut doc = Document::new();
    doc.set_orientation(Orientation::Landscape);
    assert_eq!(doc.page_size().width, 16838);
    assert_eq!(doc.page_size().height, 11906);
    assert_eq!(doc.max_content_width(), 16838 - 1440);

    let rtf = doc.render();
    assert!(rtf.contains("\n\\landscape\n\\paperw16838\\paperh11906\n\\margl720"));
}

#[test]
fn test_keyword_setters() {
    let mut doc = Document::new();
    assert_eq!(doc.set_format_keyword("Letter"), Outcome::Applied);
    assert_eq!(doc.page_size().width, 12240);

    assert_eq!(doc.set_format_keyword("B7"), Outcome::Ignored);
    assert_eq!(doc.set_orientation_keyword("sideways"), Outcome::Ignored);
    assert_eq!(doc.page_format(), PageFormat::Letter);
    assert_eq!(doc.orientation(), Orientation::Portrait);
    assert_eq!(doc.page_size().width, 12240);

    assert_eq!(doc.set_orientation_keyword("landscape"), Outcome::Applied);
    assert_eq!(doc.page_size().width, 15840);
}

#[test]
fn test_page_size_lookup() {
    let size = page_size("A3", "portrait").unwrap();
    assert_eq!((size.width, size.height), (16838, 23811));

    let size = page_size("A3", "landscape").unwrap();
    assert_eq!((size.width, size.height), (23811, 16838));

    let err = page_size("A9", "portrait").unwrap_err();
    assert!(matches!(err, Error::UnknownPageSize { .. }));
}

#[test]
fn test_page_setup_from_json() {
    let setup: PageSetup =
        serde_json::from_str(r#"{"format":"Legal","orientation":"landscape","margin_left":1000}"#)
            .unwrap();
    let doc = Document::with_page_setup(&setup);

    assert_eq!(doc.page_size().width, 20160);
    assert_eq!(doc.margins(), (1000, 720, 720, 720));
    assert_eq!(doc.max_content_width(), 20160 - 1720);
}

#[test]
fn test_font_indices_follow_registration_order() {
    let mut doc = Document::new();
    doc.new_font_table();
    for i in 0..4 {
        doc.add_font(FontFamily::Swiss, 0, 2, format!("Face {}", i), format!("face{}", i));
    }
    let para = doc.add_paragraph();
    for i in 0..4 {
        para.add_text(format!("t{}", i)).set_font(format!("face{}", i));
    }

    let rtf = doc.render();
    for i in 0..4 {
        assert!(rtf.contains(&format!("{{\\f{}\\fswiss\\fprq2\\fcharset0 Face {};}}", i, i)));
        assert!(rtf.contains(&format!("{{\\f{} t{}}}", i, i)));
    }
}

#[test]
fn test_color_indices_are_one_based() {
    let mut doc = Document::new();
    doc.new_color_table();
    doc.add_color(Rgb::new(10, 20, 30), "first")
        .add_color(Rgb::new(40, 50, 60), "second");
    doc.add_paragraph()
        .add_text("x")
        .set_color("second")
        .set_highlight("first");

    let rtf = doc.render();
    assert!(rtf.contains("{\\colortbl;\\red10\\green20\\blue30;\\red40\\green50\\blue60;}"));
    assert!(rtf.contains("{\\cf2\\highlight1 x}"));
}

#[test]
fn test_default_font_by_code() {
    let mut doc = Document::new();
    assert_eq!(doc.set_default_font(font::ARIAL), Outcome::Applied);
    assert!(doc.render().starts_with("{\\rtf1\\ansi\\deff2\n"));

    assert_eq!(doc.set_default_font("wingdings"), Outcome::Ignored);
    assert!(doc.render().starts_with("{\\rtf1\\ansi\\deff2\n"));
}

#[test]
fn test_font_keyword_rejects_unknown_family() {
    let mut doc = Document::new();
    assert_eq!(
        doc.add_font_keyword("decor", 0, 2, "Old English", "old"),
        Outcome::Applied
    );
    assert_eq!(
        doc.add_font_keyword("gothic", 0, 2, "Fraktur", "fraktur"),
        Outcome::Ignored
    );
    assert_eq!(doc.header().font_table.len(), 6);
}

#[test]
fn test_font_size_is_doubled() {
    let mut doc = Document::new();
    doc.add_paragraph().add_text("big").set_font_size(14);
    assert!(doc.render().contains("{\\fs28 big}"));
}

#[test]
fn test_paragraph_alignment_keyword() {
    let mut doc = Document::new();
    let para = doc.add_paragraph();
    assert_eq!(para.set_align_keyword("j"), Outcome::Applied);
    assert_eq!(para.set_align_keyword("middle"), Outcome::Ignored);
    para.add_text("text");

    assert!(doc.render().contains("\\pard \\qj {\\fi0 \\li0 \\ri0 { text}}\\par"));
}

#[test]
fn test_line_break_and_styles() {
    let mut doc = Document::new();
    let para = doc.add_paragraph();
    para.add_text("H").set_subscript(true).set_superscript(true);
    para.add_line_break();
    para.add_text("x").set_italic(true).set_strikethrough(true).set_all_caps(true);

    let rtf = doc.render();
    assert!(rtf.contains("{\\super H}\\line {\\i\\strike\\caps x}"));
}

#[test]
fn test_unicode_text_is_escaped() {
    let mut doc = Document::new();
    doc.add_paragraph().add_text("Привет 😀");
    let rtf = doc.render();

    assert!(rtf.is_ascii());
    assert!(rtf.contains("\\u1055\\'5f"));
    assert!(rtf.contains("\\u-10179\\'5f\\u-8704\\'5f"));
}

#[test]
fn test_picture_embedding() {
    let mut doc = Document::new();
    doc.add_paragraph()
        .add_picture(Picture::jpeg("ffd8ffe0", 2000, 1000));

    let result = rtfdoc::render::to_rtf_with_stats(&doc);
    assert!(result
        .content
        .contains("{\\pict\\jpegblip\\picwgoal2000\\pichgoal1000\nffd8ffe0}"));
    assert_eq!(result.stats.picture_count, 1);
}

#[test]
fn test_render_is_idempotent() {
    let mut doc = Document::new();
    doc.add_paragraph().add_text("once").set_color(color::BLUE);
    let table = doc.add_table();
    table.add_row().add_cell(3000);

    let first = doc.render();
    let second = doc.render();
    assert_eq!(first, second);
    assert_eq!(doc.export(), first.into_bytes());
}

#[test]
fn test_export_to_file() {
    let mut doc = Document::new();
    doc.add_paragraph().add_text("on disk");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    doc.export_to(file.as_file_mut()).unwrap();
    file.flush().unwrap();

    let written = std::fs::read(file.path()).unwrap();
    assert_eq!(written, doc.export());
}

#[test]
fn test_export_to_failing_sink() {
    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let doc = Document::new();
    let err = doc.export_to(Closed).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_plain_text() {
    let mut doc = Document::new();
    doc.add_paragraph().add_text("Title");
    doc.add_table()
        .add_row()
        .add_cell(1000)
        .add_paragraph()
        .add_text("cell");

    let text = doc.plain_text();
    assert!(text.starts_with("Title"));
    assert!(text.contains("cell"));
}

#[test]
fn test_unresolved_references_are_counted() {
    let mut doc = Document::new();
    doc.add_paragraph()
        .add_text("x")
        .set_font("no-such-font")
        .set_color("no-such-color");

    let result = rtfdoc::render::to_rtf_with_stats(&doc);
    assert!(!result.stats.all_references_resolved());
    assert_eq!(result.stats.unresolved_reference_count, 2);
    assert!(result.content.contains("{ x}"));
}
