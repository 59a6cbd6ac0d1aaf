//! Font face with parsed metrics

use ttf_parser::{Face, name_id};

use crate::{Result, TextError};

/// Parsed font face with metrics
pub struct FontFace<'a> {
    /// The underlying ttf-parser face
    face: Face<'a>,
}

impl<'a> FontFace<'a> {
    /// Parse the first face in a font file
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        Self::parse_index(data, 0)
    }

    /// Parse a font face from a collection index
    pub fn parse_index(data: &'a [u8], index: u32) -> Result<Self> {
        if data.is_empty() {
            return Err(TextError::UnsupportedFont("empty font data".into()));
        }

        Face::parse(data, index)
            .map(|face| Self { face })
            .map_err(|e| TextError::UnsupportedFont(e.to_string()))
    }

    /// Units per em
    pub fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }

    /// Ascender (above baseline)
    pub fn ascender(&self) -> i16 {
        self.face.ascender()
    }

    /// Descender (below baseline, usually negative)
    pub fn descender(&self) -> i16 {
        self.face.descender()
    }

    /// Line gap
    pub fn line_gap(&self) -> i16 {
        self.face.line_gap()
    }

    /// Cap height, or the ascender when the font has no OS/2 value
    pub fn cap_height(&self) -> i16 {
        self.face.capital_height().unwrap_or_else(|| self.ascender())
    }

    /// x-height, or 0 when the font has no OS/2 value
    pub fn x_height(&self) -> i16 {
        self.face.x_height().unwrap_or(0)
    }

    /// Family name, preferring the typographic family
    pub fn family_name(&self) -> Option<String> {
        self.name(name_id::TYPOGRAPHIC_FAMILY)
            .or_else(|| self.name(name_id::FAMILY))
    }

    /// Subfamily name, preferring the typographic subfamily
    pub fn subfamily_name(&self) -> Option<String> {
        self.name(name_id::TYPOGRAPHIC_SUBFAMILY)
            .or_else(|| self.name(name_id::SUBFAMILY))
    }

    pub fn full_name(&self) -> Option<String> {
        self.name(name_id::FULL_NAME)
    }

    pub fn postscript_name(&self) -> Option<String> {
        self.name(name_id::POST_SCRIPT_NAME)
    }

    /// First decodable name record with the given ID
    fn name(&self, id: u16) -> Option<String> {
        self.face
            .names()
            .into_iter()
            .filter(|name| name.name_id == id)
            .find_map(|name| name.to_string())
    }
}
