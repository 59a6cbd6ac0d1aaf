//! Synthetic fonts for tests
//!
//! Writes the smallest sfnt that ttf-parser accepts and that carries every
//! field metric extraction reads: `OS/2`, `head`, `hhea`, `maxp` and `name`.

/// Metrics and names of a synthesized font
#[derive(Debug, Clone)]
pub struct FixtureFont {
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
    pub cap_height: i16,
    pub x_height: i16,
    pub family: String,
    pub subfamily: String,
}

impl Default for FixtureFont {
    fn default() -> Self {
        Self {
            units_per_em: 2048,
            ascender: 1900,
            descender: -500,
            line_gap: 0,
            cap_height: 1490,
            x_height: 1118,
            family: "Inter".into(),
            subfamily: "Regular".into(),
        }
    }
}

impl FixtureFont {
    pub fn new(family: &str) -> Self {
        Self {
            family: family.to_string(),
            ..Default::default()
        }
    }

    pub fn with_line_gap(mut self, line_gap: i16) -> Self {
        self.line_gap = line_gap;
        self
    }

    pub fn with_units_per_em(mut self, units_per_em: u16) -> Self {
        self.units_per_em = units_per_em;
        self
    }

    /// Serialize to TrueType bytes
    pub fn build(&self) -> Vec<u8> {
        // Tags must be sorted for the table directory lookup
        let tables: [(&[u8; 4], Vec<u8>); 5] = [
            (b"OS/2", self.os2()),
            (b"head", self.head()),
            (b"hhea", self.hhea()),
            (b"maxp", maxp()),
            (b"name", self.name()),
        ];

        let num_tables = tables.len() as u16;
        let mut out = Vec::new();
        push_u32(&mut out, 0x0001_0000);
        push_u16(&mut out, num_tables);
        push_u16(&mut out, 64); // searchRange
        push_u16(&mut out, 2); // entrySelector
        push_u16(&mut out, num_tables * 16 - 64); // rangeShift

        let mut offset = 12 + 16 * tables.len();
        let mut body = Vec::new();
        for (tag, data) in &tables {
            out.extend_from_slice(*tag);
            push_u32(&mut out, 0); // checksum
            push_u32(&mut out, offset as u32);
            push_u32(&mut out, data.len() as u32);

            body.extend_from_slice(data);
            while body.len() % 4 != 0 {
                body.push(0);
            }
            offset = 12 + 16 * tables.len() + body.len();
        }

        out.extend_from_slice(&body);
        out
    }

    fn head(&self) -> Vec<u8> {
        let mut t = Vec::with_capacity(54);
        push_u32(&mut t, 0x0001_0000); // version
        push_u32(&mut t, 0x0001_0000); // fontRevision
        push_u32(&mut t, 0); // checksumAdjustment
        push_u32(&mut t, 0x5F0F_3CF5); // magicNumber
        push_u16(&mut t, 0); // flags
        push_u16(&mut t, self.units_per_em);
        t.extend_from_slice(&[0; 16]); // created, modified
        push_i16(&mut t, 0); // xMin
        push_i16(&mut t, self.descender);
        push_i16(&mut t, self.units_per_em as i16);
        push_i16(&mut t, self.ascender);
        push_u16(&mut t, 0); // macStyle
        push_u16(&mut t, 8); // lowestRecPPEM
        push_i16(&mut t, 2); // fontDirectionHint
        push_i16(&mut t, 0); // indexToLocFormat
        push_i16(&mut t, 0); // glyphDataFormat
        t
    }

    fn hhea(&self) -> Vec<u8> {
        let mut t = Vec::with_capacity(36);
        push_u32(&mut t, 0x0001_0000);
        push_i16(&mut t, self.ascender);
        push_i16(&mut t, self.descender);
        push_i16(&mut t, self.line_gap);
        push_u16(&mut t, self.units_per_em); // advanceWidthMax
        push_i16(&mut t, 0); // minLeftSideBearing
        push_i16(&mut t, 0); // minRightSideBearing
        push_i16(&mut t, self.units_per_em as i16); // xMaxExtent
        push_i16(&mut t, 1); // caretSlopeRise
        push_i16(&mut t, 0); // caretSlopeRun
        push_i16(&mut t, 0); // caretOffset
        t.extend_from_slice(&[0; 8]); // reserved
        push_i16(&mut t, 0); // metricDataFormat
        push_u16(&mut t, 1); // numberOfHMetrics
        t
    }

    fn os2(&self) -> Vec<u8> {
        let mut t = vec![0u8; 96];
        put_u16(&mut t, 0, 4); // version
        put_u16(&mut t, 2, (self.units_per_em / 2) as u16); // xAvgCharWidth
        put_u16(&mut t, 4, 400); // usWeightClass
        put_u16(&mut t, 6, 5); // usWidthClass
        put_u16(&mut t, 62, 0x0040); // fsSelection: REGULAR
        put_u16(&mut t, 64, 0x20); // usFirstCharIndex
        put_u16(&mut t, 66, 0x7E); // usLastCharIndex
        put_u16(&mut t, 68, self.ascender as u16);
        put_u16(&mut t, 70, self.descender as u16);
        put_u16(&mut t, 72, self.line_gap as u16);
        put_u16(&mut t, 74, self.ascender.unsigned_abs());
        put_u16(&mut t, 76, self.descender.unsigned_abs());
        put_u16(&mut t, 86, self.x_height as u16);
        put_u16(&mut t, 88, self.cap_height as u16);
        t
    }

    fn name(&self) -> Vec<u8> {
        let full = format!("{} {}", self.family, self.subfamily);
        let postscript = format!("{}-{}", self.family, self.subfamily).replace(' ', "");
        let records: [(u16, &str); 4] = [
            (1, &self.family),
            (2, &self.subfamily),
            (4, &full),
            (6, &postscript),
        ];

        let mut storage = Vec::new();
        let mut t = Vec::new();
        push_u16(&mut t, 0); // format
        push_u16(&mut t, records.len() as u16);
        push_u16(&mut t, (6 + 12 * records.len()) as u16);

        for (id, text) in records {
            let encoded: Vec<u8> = text.encode_utf16().flat_map(u16::to_be_bytes).collect();
            push_u16(&mut t, 3); // platform: Windows
            push_u16(&mut t, 1); // encoding: Unicode BMP
            push_u16(&mut t, 0x0409); // language: en-US
            push_u16(&mut t, id);
            push_u16(&mut t, encoded.len() as u16);
            push_u16(&mut t, storage.len() as u16);
            storage.extend_from_slice(&encoded);
        }

        t.extend_from_slice(&storage);
        t
    }
}

fn maxp() -> Vec<u8> {
    let mut t = Vec::with_capacity(6);
    push_u32(&mut t, 0x0000_5000);
    push_u16(&mut t, 1); // numGlyphs
    t
}

fn push_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_be_bytes());
}

fn push_i16(buf: &mut Vec<u8>, value: i16) {
    buf.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_be_bytes());
}

fn put_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}
