//! Integration tests for the scanning session

use objscan_core::{Lexer, ScanConfig, ScanErrorKind};
use pretty_assertions::assert_eq;

const CUBE_OBJ: &str = "# cube
mtllib cube.mtl
o Cube
v 1.000000 1.000000 -1.000000
v 1.000000 -1.000000 -1.000000
vn -0.0000 1.0000 0.0000
usemtl Brushed Steel
s off
f 1/1/1 2/2/1 3/3/1
";

const STEEL_MTL: &str = "newmtl Brushed Steel
    Ns 225.000000
\tKd 0.8 0.8 0.8
    d 1
";

// ============================================================================
// Line Walking Tests
// ============================================================================

#[test]
fn test_walk_obj_keywords() {
    let mut lexer = Lexer::new(CUBE_OBJ.as_bytes());
    let mut keywords = Vec::new();
    while !lexer.is_eof() {
        let keyword = lexer.keyword();
        keywords.push(String::from_utf8_lossy(lexer.slice(keyword)).into_owned());
        lexer.skip_line();
    }
    assert_eq!(keywords, vec!["#", "mtllib", "o", "v", "v", "vn", "usemtl", "s", "f"]);
    assert_eq!(lexer.line(), 9);
}

#[test]
fn test_read_vertices() {
    let mut lexer = Lexer::new(CUBE_OBJ.as_bytes());
    let mut vertices = Vec::new();
    while !lexer.is_eof() {
        let keyword = lexer.keyword();
        if lexer.slice(keyword) == b"v" {
            let mut xyz = [0.0; 3];
            assert_eq!(lexer.floats(&mut xyz), 3);
            vertices.push(xyz);
        }
        lexer.skip_line();
    }
    assert_eq!(vertices, vec![[1.0, 1.0, -1.0], [1.0, -1.0, -1.0]]);
}

#[test]
fn test_read_names() {
    let mut lexer = Lexer::new(CUBE_OBJ.as_bytes());
    let mut library = None;
    let mut material = None;
    while !lexer.is_eof() {
        let keyword = lexer.keyword();
        match lexer.slice(keyword) {
            b"mtllib" => {
                lexer.next_word();
                library = Some(lexer.name_no_space());
            }
            b"usemtl" => {
                lexer.next_word();
                material = Some(lexer.name());
            }
            _ => {}
        }
        lexer.skip_line();
    }
    assert_eq!(library.as_deref(), Some("cube.mtl"));
    assert_eq!(material.as_deref(), Some("Brushed Steel"));
}

#[test]
fn test_indented_material_lines() {
    let mut lexer = Lexer::new(STEEL_MTL.as_bytes());
    lexer.next_token();
    assert_eq!(lexer.name(), "Brushed Steel");
    lexer.skip_line();

    let keyword = lexer.keyword();
    assert_eq!(lexer.slice(keyword), b"Ns");
    assert_eq!(lexer.float(), 225.0);
    lexer.skip_line();

    let keyword = lexer.keyword();
    assert_eq!(lexer.slice(keyword), b"Kd");
    let mut rgb = [0.0; 3];
    assert_eq!(lexer.floats(&mut rgb), 3);
    assert_eq!(rgb, [0.8, 0.8, 0.8]);
    lexer.skip_line();

    let keyword = lexer.keyword();
    assert_eq!(lexer.slice(keyword), b"d");
    assert_eq!(lexer.try_float().unwrap(), 1.0);
    lexer.skip_line();

    assert!(lexer.is_eof());
    assert_eq!(lexer.line(), 4);
}

#[test]
fn test_floats_stop_at_line_end() {
    let mut lexer = Lexer::new(b"vt 0.5 0.25\nvt 1 1\n");
    lexer.next_token();
    let mut uvw = [-1.0; 3];
    assert_eq!(lexer.floats(&mut uvw), 2);
    assert_eq!(uvw, [0.5, 0.25, -1.0]);
    assert_eq!(lexer.line(), 0);
}

#[test]
fn test_unterminated_last_field_reads_as_zero() {
    let mut lexer = Lexer::new(b"v 1 2 3");
    lexer.next_token();
    let mut xyz = [9.0; 3];
    assert_eq!(lexer.floats(&mut xyz), 2);
    assert_eq!(xyz, [1.0, 2.0, 9.0]);
    assert!(lexer.at_boundary());
}

// ============================================================================
// Line View Tests
// ============================================================================

#[test]
fn test_next_line_views() {
    let mut lexer = Lexer::new(b"o a\n\n  g b\r\n");
    let first = lexer.next_line().unwrap();
    assert_eq!(first.text, b"o a");
    assert_eq!(first.number, 1);

    let blank = lexer.next_line().unwrap();
    assert!(blank.is_blank());
    assert_eq!(blank.number, 2);

    let third = lexer.peek_line().unwrap();
    assert_eq!(third.text, b"g b");
    assert!(third.starts_with(b"g"));
    assert_eq!(lexer.next_line(), Some(third));
}

#[test]
fn test_next_line_crlf_counts_each_line_once() {
    let mut lexer = Lexer::new(b"o a\r\ng b\r\n");
    let mut seen = Vec::new();
    while let Some(line) = lexer.next_line() {
        seen.push((line.number, line.text));
    }
    assert_eq!(seen, vec![(1, &b"o a"[..]), (2, &b"g b"[..])]);
    assert_eq!(lexer.line(), 2);
    assert!(lexer.is_eof());
}

#[test]
fn test_skip_line_crlf_with_indentation() {
    let mut lexer = Lexer::new(b"newmtl a\r\n\tKd 1 1 1\r\n");
    lexer.skip_line();
    assert_eq!(lexer.line(), 1);
    let keyword = lexer.keyword();
    assert_eq!(lexer.slice(keyword), b"Kd");
}

#[test]
fn test_next_line_at_eof() {
    let mut lexer = Lexer::new(b"x\n");
    assert!(lexer.next_line().is_some());
    assert!(lexer.next_line().is_none());
    assert!(lexer.peek_line().is_none());
}

#[test]
fn test_line_trimmed() {
    let mut lexer = Lexer::new(b"s off \t\n");
    let line = lexer.next_line().unwrap();
    assert_eq!(line.trimmed(), b"s off");
}

// ============================================================================
// Session State Tests
// ============================================================================

#[test]
fn test_with_offset_rejects_out_of_bounds() {
    let err = Lexer::new(b"abc").with_offset(4).err().unwrap();
    assert_eq!(err.kind, ScanErrorKind::CursorOutOfBounds);
}

#[test]
fn test_with_offset_starts_mid_buffer() {
    let mut lexer = Lexer::new(b"v 1 2\nv 3 4\n").with_offset(6).unwrap();
    assert_eq!(lexer.remaining(), b"v 3 4\n");
    lexer.next_token();
    assert_eq!(lexer.float(), 3.0);
}

#[test]
fn test_try_float_keeps_cursor_on_error() {
    let mut lexer = Lexer::new(b"f a/b\n");
    lexer.next_token();
    let before = lexer.offset();
    let err = lexer.try_float().unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::InvalidNumber);
    assert_eq!(lexer.offset(), before);
}

#[test]
fn test_copy_word() {
    let mut lexer = Lexer::new(b"newmtl verylongname\n");
    let mut out = [0u8; 5];
    assert_eq!(lexer.copy_word(&mut out), 4);
    assert_eq!(&out, b"newm\0");
}

#[test]
fn test_has_line_end() {
    let lexer = Lexer::new(b"v 1 2 3\n");
    assert!(lexer.has_line_end());
    let lexer = Lexer::new(b"v 1 2 3");
    assert!(!lexer.has_line_end());
}

#[test]
fn test_config_applies_to_floats() {
    let mut lexer =
        Lexer::new(b"Ka 0,5 1,5\n").with_config(ScanConfig::new().with_decimal_comma(true));
    lexer.next_token();
    assert_eq!(lexer.float(), 0.5);
    assert_eq!(lexer.float(), 1.5);
}
