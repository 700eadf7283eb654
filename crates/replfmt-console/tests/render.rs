//! End-to-end pipeline tests: values through the formatter, spans
//! through the console.

use replfmt_console::{ColorDepth, Console, OutputMode, Theme};
use replfmt_core::{Formatter, ObjectValue, Style, Value};

fn rich(theme: Theme) -> Console {
    let mut console = Console::with_theme(theme);
    console.set_mode(OutputMode::Rich);
    console.set_color_depth(ColorDepth::TrueColor);
    console
}

fn sample_value() -> Value {
    Value::map(vec![
        ("id".into(), 7.into()),
        ("active".into(), true.into()),
        ("tags".into(), Value::Seq(vec!["a".into(), "b".into()])),
    ])
}

#[test]
fn test_plain_pipeline_matches_display() {
    let text = Formatter::new().format(&sample_value());
    let console = Console::with_mode(OutputMode::Plain);
    assert_eq!(console.render(&text), text.to_string());
}

#[test]
fn test_rich_pipeline_colors_every_tagged_span() {
    let text = Formatter::new().format(&sample_value());
    let rendered = rich(Theme::dark()).render(&text);
    let tagged = text.iter().filter(|s| !s.style.is_plain()).count();
    assert_eq!(rendered.matches("\x1b[38;2;").count(), tagged);
    assert_eq!(rendered.matches("\x1b[0m").count(), tagged);
}

#[test]
fn test_rich_pipeline_preserves_visible_text() {
    let text = Formatter::new().format(&sample_value());
    let rendered = rich(Theme::dark()).render(&text);
    let visible: String = rendered
        .split('\x1b')
        .map(|chunk| match chunk.find('m') {
            Some(i) if chunk.starts_with('[') => &chunk[i + 1..],
            _ => chunk,
        })
        .collect();
    assert_eq!(visible, text.to_string());
}

#[test]
fn test_json_pipeline_round_trips_spans() {
    let formatter = Formatter::new();
    let text = formatter.format(&sample_value());
    let console = Console::with_mode(OutputMode::Json);
    let parsed: serde_json::Value = serde_json::from_str(&console.render(&text)).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), text.spans().len());
    assert!(array.iter().all(|s| s["style"].is_string() && s["text"].is_string()));
}

#[test]
fn test_every_core_tag_resolves_in_both_themes() {
    let tags = [
        Style::NUMBER,
        Style::CONSTANT,
        Style::STRING,
        Style::ESCAPE,
        Style::DIM,
        Style::HEX_INDEX,
        Style::HEX_ASCII,
        Style::TYPE_NAME,
        Style::KEYWORD,
        Style::OPERATOR,
        Style::COMMENT,
    ];
    for theme in [Theme::dark(), Theme::light()] {
        for tag in &tags {
            assert!(
                theme.resolve(tag).is_some(),
                "no color for tag {:?}",
                tag.as_str()
            );
        }
        assert!(theme.resolve(&Style::PLAIN).is_none());
    }
}

#[test]
fn test_hexdump_gutter_renders_with_index_color() {
    let text = Formatter::new().format(&Value::Bytes(b"AB".to_vec()));
    let rendered = rich(Theme::dark()).render(&text);
    // offset column in the hex.index color, gutter in the hex.ascii color
    assert!(rendered.contains("\x1b[38;2;139;233;253m00  "));
    assert!(rendered.contains("\x1b[38;2;255;121;198mAB"));
}

#[test]
fn test_object_header_renders_with_type_color() {
    let obj: Value = ObjectValue::new("Task").with_attr("id", 7).into();
    let text = Formatter::new().format(&obj);
    let rendered = rich(Theme::dark()).render(&text);
    assert!(rendered.contains("\x1b[38;2;248;248;242m<Task>\x1b[0m"));
}

#[test]
fn test_elision_marker_renders_dim() {
    let mut v = Value::Seq(vec![Value::Int(1)]);
    for _ in 0..7 {
        v = Value::Seq(vec![v]);
    }
    let text = Formatter::new().format(&v);
    let rendered = rich(Theme::dark()).render(&text);
    assert!(rendered.contains("\x1b[38;2;98;114;164m...\x1b[0m"));
}
