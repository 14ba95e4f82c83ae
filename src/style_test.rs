#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn line_height_uses_text_table() {
    let mut style = RichTextStyle::sized(20.0);
    style.paragraph_spacing = ParagraphSpacing::Small;
    assert_eq!(line_height(&style), 20.0);
    style.paragraph_spacing = ParagraphSpacing::Medium;
    assert_eq!(line_height(&style), 24.0);
    style.paragraph_spacing = ParagraphSpacing::Large;
    assert_eq!(line_height(&style), 30.0);
}

#[test]
fn ruled_table_is_larger_for_every_spacing() {
    for spacing in [ParagraphSpacing::Small, ParagraphSpacing::Medium, ParagraphSpacing::Large] {
        assert!(spacing.ruled_multiplier() > spacing.multiplier());
    }
}

#[test]
fn font_descriptor_orders_italic_before_bold() {
    let style = RichTextStyle {
        font_italic: true,
        font_bold: true,
        font_family: "Caveat".to_owned(),
        ..RichTextStyle::sized(18.0)
    };
    assert_eq!(style.font_descriptor(), "italic bold 18px Caveat");
}

#[test]
fn font_descriptor_plain() {
    assert_eq!(RichTextStyle::sized(12.5).font_descriptor(), "12.5px Arial");
}

#[test]
fn style_deserializes_camel_case_with_defaults() {
    let style: RichTextStyle = serde_json::from_str(
        r##"{"fontSize": 22, "fontBold": true, "paragraphSpacing": "large", "align": "center"}"##,
    )
    .unwrap();
    assert_eq!(style.font_size, 22.0);
    assert!(style.font_bold);
    assert_eq!(style.paragraph_spacing, ParagraphSpacing::Large);
    assert_eq!(style.align, TextAlign::Center);
    assert_eq!(style.font_family, "Arial");
    assert_eq!(style.font_opacity, 1.0);
}

#[test]
fn unknown_alignment_rejects() {
    let result = serde_json::from_str::<RichTextStyle>(r#"{"align": "justify"}"#);
    assert!(result.is_err());
}
