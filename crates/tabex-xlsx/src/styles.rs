//! XLSX styles (styles.xml) writer

use std::collections::HashMap;

use tabex_core::{Color, FillStyle, FontStyle, Style, StyleId, Workbook};

use crate::writer::escape_xml;

/// Workbook-wide cell format table.
///
/// Each worksheet interns styles in its own pool; this maps every
/// `(sheet, StyleId)` pair onto one global, deduplicated `cellXfs` index.
#[derive(Debug)]
pub(crate) struct XlsxStyleTable {
    /// Index corresponds to the cellXfs index (xfId); 0 is the default
    styles: Vec<Style>,
    /// Per-worksheet mapping: local style handle -> global xfId
    sheet_maps: Vec<HashMap<StyleId, u32>>,
}

#[derive(Debug, Clone, Copy)]
struct ResolvedXfIds {
    font_id: u32,
    fill_id: u32,
}

impl XlsxStyleTable {
    pub(crate) fn build(workbook: &Workbook) -> Self {
        let mut styles = vec![Style::default()];
        let mut style_to_xf: HashMap<Style, u32> = HashMap::new();
        style_to_xf.insert(Style::default(), 0);

        let mut sheet_maps = Vec::with_capacity(workbook.sheet_count());

        for sheet in workbook.worksheets() {
            let mut map = HashMap::new();
            map.insert(StyleId::DEFAULT, 0);

            for (_, cell) in sheet.iter_cells() {
                if map.contains_key(&cell.style) {
                    continue;
                }

                let style = sheet.style_by_id(cell.style).cloned().unwrap_or_default();
                let xf_id = *style_to_xf.entry(style.clone()).or_insert_with(|| {
                    styles.push(style);
                    styles.len() as u32 - 1
                });
                map.insert(cell.style, xf_id);
            }

            sheet_maps.push(map);
        }

        Self { styles, sheet_maps }
    }

    pub(crate) fn xf_id_for(&self, sheet_index: usize, style: StyleId) -> u32 {
        self.sheet_maps
            .get(sheet_index)
            .and_then(|m| m.get(&style).copied())
            .unwrap_or(0)
    }

    pub(crate) fn len(&self) -> usize {
        self.styles.len()
    }

    pub(crate) fn to_styles_xml(&self) -> String {
        let mut font_ids: HashMap<&FontStyle, u32> = HashMap::new();
        let default_font = FontStyle::default();
        let mut fonts: Vec<&FontStyle> = vec![&default_font];
        font_ids.insert(&default_font, 0);

        // The first two fills are reserved: none and gray125
        let mut fill_ids: HashMap<Color, u32> = HashMap::new();
        let mut fill_colors: Vec<Color> = Vec::new();

        let mut resolved = Vec::with_capacity(self.styles.len());
        for style in &self.styles {
            let font_id = *font_ids.entry(&style.font).or_insert_with(|| {
                fonts.push(&style.font);
                fonts.len() as u32 - 1
            });

            let fill_id = match style.fill {
                FillStyle::None => 0,
                FillStyle::Solid { color } => *fill_ids.entry(color).or_insert_with(|| {
                    fill_colors.push(color);
                    fill_colors.len() as u32 + 1
                }),
            };

            resolved.push(ResolvedXfIds { font_id, fill_id });
        }

        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        xml.push_str(&format!("\n  <fonts count=\"{}\">", fonts.len()));
        for font in &fonts {
            xml.push_str("\n    ");
            xml.push_str(&write_font(font));
        }
        xml.push_str("\n  </fonts>");

        xml.push_str(&format!("\n  <fills count=\"{}\">", fill_colors.len() + 2));
        xml.push_str("\n    <fill><patternFill patternType=\"none\"/></fill>");
        xml.push_str("\n    <fill><patternFill patternType=\"gray125\"/></fill>");
        for color in &fill_colors {
            xml.push_str("\n    ");
            xml.push_str(&write_solid_fill(color));
        }
        xml.push_str("\n  </fills>");

        xml.push_str(
            r#"
  <borders count="1">
    <border><left/><right/><top/><bottom/><diagonal/></border>
  </borders>
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        xml.push_str(&format!("\n  <cellXfs count=\"{}\">", self.styles.len()));
        for (style, ids) in self.styles.iter().zip(&resolved) {
            xml.push_str("\n    ");
            xml.push_str(&write_xf(style, *ids));
        }
        xml.push_str("\n  </cellXfs>");

        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>
</styleSheet>"#,
        );
        xml
    }
}

fn write_font(font: &FontStyle) -> String {
    let mut s = String::from("<font>");
    if font.bold {
        s.push_str("<b/>");
    }
    s.push_str(&format!("<sz val=\"{}\"/>", font.size));
    if !font.color.is_auto() {
        s.push_str(&format!("<color rgb=\"{}\"/>", font.color.to_argb_hex()));
    }
    s.push_str(&format!("<name val=\"{}\"/>", escape_xml(&font.name)));
    s.push_str("<family val=\"2\"/></font>");
    s
}

fn write_solid_fill(color: &Color) -> String {
    format!(
        "<fill><patternFill patternType=\"solid\"><fgColor rgb=\"{}\"/><bgColor indexed=\"64\"/></patternFill></fill>",
        color.to_argb_hex()
    )
}

fn write_xf(style: &Style, ids: ResolvedXfIds) -> String {
    let mut attrs = String::new();
    if style.font != FontStyle::default() {
        attrs.push_str(" applyFont=\"1\"");
    }
    if !style.fill.is_none() {
        attrs.push_str(" applyFill=\"1\"");
    }

    let mut s = format!(
        "<xf numFmtId=\"0\" fontId=\"{}\" fillId=\"{}\" borderId=\"0\" xfId=\"0\"{}",
        ids.font_id, ids.fill_id, attrs
    );

    match style.alignment.horizontal.as_xml_str() {
        Some(horizontal) => s.push_str(&format!(
            " applyAlignment=\"1\"><alignment horizontal=\"{}\"/></xf>",
            horizontal
        )),
        None => s.push_str("/>"),
    }
    s
}
