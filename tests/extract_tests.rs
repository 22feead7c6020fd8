use serde::Deserialize;
use sjson::{from_str, from_value, parse, parse_slice, ErrorKind, Value};

#[derive(Deserialize, Debug, PartialEq)]
struct Element {
    #[serde(rename = "type")]
    kind: String,
    src: String,
    position: [i32; 3],
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Mode {
    Edit,
    Preview,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Project {
    name: String,
    mode: Mode,
    fps: f32,
    frames: Vec<Vec<Element>>,
    notes: Option<String>,
}

#[test]
fn test_extract_project() {
    let text = r#"
        {
            "name": "demo",
            "mode": "preview",
            "fps": 24.0,
            "frames": [
                [{"type": "image", "src": "guy.png", "position": [0, 0, 0]}],
                [],
            ],
        }
    "#;

    let project: Project = from_str(text).unwrap();
    assert_eq!(project.name, "demo");
    assert_eq!(project.mode, Mode::Preview);
    assert_eq!(project.fps, 24.0);
    assert_eq!(project.frames.len(), 2);
    assert_eq!(
        project.frames[0][0],
        Element {
            kind: "image".to_string(),
            src: "guy.png".to_string(),
            position: [0, 0, 0],
        }
    );
    assert!(project.frames[1].is_empty());
    assert_eq!(project.notes, None);
}

#[test]
fn test_extract_reports_shape_errors() {
    let err = from_str::<Project>("{'name': 'demo'}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Custom);
    assert!(err.to_string().contains("missing field"));

    let err = from_str::<Mode>("'unknown'").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Custom);

    let err = from_value::<Vec<i32>>(Value::from("not a list")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Custom);
}


#[test]
fn test_extract_from_parsed_tree() {
    let value = parse("['edit', 'preview', 'edit']").unwrap();
    let modes: Vec<Mode> = from_value(value).unwrap();
    assert_eq!(modes, vec![Mode::Edit, Mode::Preview, Mode::Edit]);
}

#[test]
fn test_extract_from_bytes() {
    let value = parse_slice(br#"{"type": "text", "src": "", "position": [1, 2, 3]}"#).unwrap();
    let element: Element = from_value(value).unwrap();
    assert_eq!(element.position, [1, 2, 3]);
    assert_eq!(element.kind, "text");
}

#[test]
fn test_extract_keeps_parse_errors() {
    let err = from_str::<Vec<i32>>("[1, 2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingCloseBracket);
    assert_eq!(err.position(), Some((1, 6)));
}
