//! Parser for the FontoBene-style stroke-font text format.
//!
//! The format is line oriented:
//!
//! ```text
//! [format]
//! format = FontoBene
//! format_version = 1.0
//!
//! [font]
//! name = Example Sans
//! letter_spacing = 1.8
//! word_spacing = 4.0
//! line_spacing = 3.0
//!
//! ---
//!
//! [0041] LATIN CAPITAL LETTER A
//! 0,0;4.5,9;9,0
//! 1.8,3.6;7.2,3.6
//!
//! [00C4] LATIN CAPITAL LETTER A WITH DIAERESIS
//! @0041
//! 3,10.5,1;3.5,10.5,1;3,10.5
//! ```
//!
//! Glyph blocks start with `[XXXX]` (hexadecimal code point) and contain
//! one polyline per line: `x,y[,bulge]` vertices separated by `;`. Lines
//! starting with `@XXXX` splice in another glyph's polylines; references
//! are resolved after parsing and may nest but not cycle. `#` starts a
//! comment. Header metrics default to zero when absent.

use crate::store::{Font, FontHeader, FontVertex, Glyph, Polyline};
use crate::{FontError, Result};
use std::collections::HashMap;

/// One element of an unresolved glyph body.
#[derive(Debug, Clone)]
enum RawElement {
    Polyline(Polyline),
    Reference(char),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum HeaderSection {
    None,
    Format,
    Font,
}

/// Parse a complete font definition from its textual form.
pub fn parse_font(input: &str) -> Result<Font> {
    let mut header = FontHeader::default();
    let mut raw_glyphs: HashMap<char, Vec<RawElement>> = HashMap::new();
    let mut order: Vec<char> = Vec::new();

    let mut section = HeaderSection::None;
    let mut in_glyph_part = false;
    let mut current: Option<char> = None;

    for (index, raw_line) in input.lines().enumerate() {
        let number = index + 1;
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        if !in_glyph_part {
            match line {
                "---" => in_glyph_part = true,
                "[format]" => section = HeaderSection::Format,
                "[font]" => section = HeaderSection::Font,
                _ => parse_header_line(line, number, section, &mut header)?,
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let code = rest.split(']').next().unwrap_or(rest);
            let glyph = parse_code_point(code, number)?;
            raw_glyphs.entry(glyph).or_default();
            order.push(glyph);
            current = Some(glyph);
        } else {
            let glyph = current.ok_or_else(|| FontError::Syntax {
                line: number,
                message: "glyph data before any glyph declaration".into(),
            })?;
            let element = if let Some(reference) = line.strip_prefix('@') {
                RawElement::Reference(parse_code_point(reference.trim(), number)?)
            } else {
                RawElement::Polyline(parse_polyline(line, number)?)
            };
            raw_glyphs.entry(glyph).or_default().push(element);
        }
    }

    let mut glyphs = HashMap::with_capacity(raw_glyphs.len());
    let mut resolving = Vec::new();
    for glyph in order {
        if !glyphs.contains_key(&glyph) {
            let polylines = resolve_glyph(glyph, &raw_glyphs, &glyphs, &mut resolving)?;
            glyphs.insert(glyph, Glyph::new(polylines));
        }
    }

    Ok(Font { header, glyphs })
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_header_line(
    line: &str,
    number: usize,
    section: HeaderSection,
    header: &mut FontHeader,
) -> Result<()> {
    let (key, value) = line.split_once('=').ok_or_else(|| FontError::Syntax {
        line: number,
        message: format!("expected `key = value`, got {line:?}"),
    })?;
    if section != HeaderSection::Font {
        // [format] keys and anything before the first section are
        // accepted and ignored for forward compatibility.
        return Ok(());
    }
    let key = key.trim();
    let target = match key {
        "letter_spacing" => &mut header.letter_spacing,
        "word_spacing" => &mut header.word_spacing,
        "line_spacing" => &mut header.line_spacing,
        _ => return Ok(()), // name, author, version, ...
    };
    *target = value.trim().parse().map_err(|_| FontError::Syntax {
        line: number,
        message: format!("invalid number for {key}: {:?}", value.trim()),
    })?;
    Ok(())
}

fn parse_code_point(text: &str, number: usize) -> Result<char> {
    u32::from_str_radix(text, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| FontError::InvalidCodePoint {
            line: number,
            value: text.to_owned(),
        })
}

fn parse_polyline(line: &str, number: usize) -> Result<Polyline> {
    line.split(';')
        .map(|vertex| parse_vertex(vertex.trim(), number))
        .collect()
}

fn parse_vertex(text: &str, number: usize) -> Result<FontVertex> {
    let mut fields = text.split(',').map(str::trim);
    let mut next_number = |what: &str| -> Result<f64> {
        fields
            .next()
            .filter(|f| !f.is_empty())
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| FontError::Syntax {
                line: number,
                message: format!("invalid vertex {text:?}: bad {what}"),
            })
    };
    let x = next_number("x")?;
    let y = next_number("y")?;
    let bulge = match fields.next() {
        Some(field) => field.parse().map_err(|_| FontError::Syntax {
            line: number,
            message: format!("invalid vertex {text:?}: bad bulge"),
        })?,
        None => 0.0,
    };
    if fields.next().is_some() {
        return Err(FontError::Syntax {
            line: number,
            message: format!("invalid vertex {text:?}: too many fields"),
        });
    }
    Ok(FontVertex::new(x, y, bulge))
}

/// Expand a glyph's references into plain polylines, depth first.
fn resolve_glyph(
    glyph: char,
    raw: &HashMap<char, Vec<RawElement>>,
    resolved: &HashMap<char, Glyph>,
    resolving: &mut Vec<char>,
) -> Result<Vec<Polyline>> {
    if resolving.contains(&glyph) {
        return Err(FontError::CyclicReference { glyph });
    }
    resolving.push(glyph);
    let mut polylines = Vec::new();
    for element in raw.get(&glyph).map(Vec::as_slice).unwrap_or_default() {
        match element {
            RawElement::Polyline(polyline) => polylines.push(polyline.clone()),
            RawElement::Reference(reference) => {
                if let Some(done) = resolved.get(reference) {
                    polylines.extend(done.polylines.iter().cloned());
                } else if raw.contains_key(reference) {
                    polylines.extend(resolve_glyph(*reference, raw, resolved, resolving)?);
                } else {
                    return Err(FontError::UnknownReference {
                        glyph,
                        reference: *reference,
                    });
                }
            }
        }
    }
    resolving.pop();
    Ok(polylines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[format]
format = FontoBene
format_version = 1.0

[font]
name = Test Font
letter_spacing = 1.8
word_spacing = 4.0
line_spacing = 3.0

---

# capital A
[0041] LATIN CAPITAL LETTER A
0,0;2,9;4,0
0.8,3;3.2,3

[0042] LATIN CAPITAL LETTER B
0,0;0,9
0,9;2,9,-1;2,4.5

[00C4] LATIN CAPITAL LETTER A WITH DIAERESIS
@0041
1,10.5;1.5,10.5
";

    #[test]
    fn test_parse_header_metrics() {
        let font = parse_font(SAMPLE).unwrap();
        assert_eq!(font.header.letter_spacing, 1.8);
        assert_eq!(font.header.word_spacing, 4.0);
        assert_eq!(font.header.line_spacing, 3.0);
    }

    #[test]
    fn test_parse_glyphs_and_vertices() {
        let font = parse_font(SAMPLE).unwrap();
        assert_eq!(font.glyph_count(), 3);

        let a = &font.glyphs[&'A'];
        assert_eq!(a.polylines.len(), 2);
        assert_eq!(a.polylines[0][1], FontVertex::new(2.0, 9.0, 0.0));

        let b = &font.glyphs[&'B'];
        assert_eq!(b.polylines[1][1].bulge, -1.0);
    }

    #[test]
    fn test_reference_splices_polylines_in_order() {
        let font = parse_font(SAMPLE).unwrap();
        let a = &font.glyphs[&'A'];
        let a_umlaut = &font.glyphs[&'Ä'];
        assert_eq!(a_umlaut.polylines.len(), 3);
        assert_eq!(&a_umlaut.polylines[..2], &a.polylines[..]);
    }

    #[test]
    fn test_forward_reference_resolves() {
        let font = parse_font("---\n[0041] A\n@0042\n[0042] B\n0,0;1,1\n").unwrap();
        assert_eq!(font.glyphs[&'A'].polylines, font.glyphs[&'B'].polylines);
    }

    #[test]
    fn test_missing_metrics_default_to_zero() {
        let font = parse_font("---\n[0020] SPACE\n").unwrap();
        assert_eq!(font.header, FontHeader::default());
        assert!(font.glyphs[&' '].polylines.is_empty());
    }

    #[test]
    fn test_bad_vertex_reports_line_number() {
        let err = parse_font("---\n[0041] A\n0,0;nope,9\n").unwrap_err();
        match err {
            FontError::Syntax { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_reference_is_an_error() {
        let err = parse_font("---\n[0041] A\n@0999\n").unwrap_err();
        assert!(matches!(
            err,
            FontError::UnknownReference { glyph: 'A', .. }
        ));
    }

    #[test]
    fn test_cyclic_reference_is_an_error() {
        let err = parse_font("---\n[0041] A\n@0042\n[0042] B\n@0041\n").unwrap_err();
        assert!(matches!(err, FontError::CyclicReference { .. }));
    }

    #[test]
    fn test_bad_code_point_is_an_error() {
        let err = parse_font("---\n[D800] lone surrogate\n").unwrap_err();
        assert!(matches!(err, FontError::InvalidCodePoint { line: 2, .. }));
    }
}
