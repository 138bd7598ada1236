//! MTL (Material Template Library) file parser
//!
//! Parses Wavefront .mtl files into an [`MtlDocument`]: the declared materials in
//! file order plus the deduplicated diffuse and normal texture references.
//!
//! Only `newmtl`, `Kd`, `Ks`, `map_Kd` and `map_Kn` are understood. Fields are
//! separated by single spaces and leading whitespace is ignored; every other
//! directive is skipped.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::MaterialError;
use super::texture_collector::{collect_images_by_token, dedup_preserving_order};
use crate::foundation::math::{black, Vec3};

/// Starts a new material
pub const NEW_MATERIAL: &str = "newmtl";
/// Diffuse color
pub const DIFFUSE_COLOR: &str = "Kd";
/// Specular color
pub const SPECULAR_COLOR: &str = "Ks";
/// Diffuse texture map
pub const DIFFUSE_MAP: &str = "map_Kd";
/// Normal texture map
pub const NORMAL_MAP: &str = "map_Kn";

/// One `newmtl` block of an MTL file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialRecord {
    /// Material name as written after `newmtl`
    pub name: String,
    /// Diffuse color (Kd)
    pub diffuse_color: Vec3,
    /// Specular color (Ks)
    pub specular_color: Vec3,
    /// Diffuse texture file (map_Kd), as written in the file
    pub diffuse_map: Option<String>,
    /// Normal texture file (map_Kn), as written in the file
    pub normal_map: Option<String>,
}

impl MaterialRecord {
    /// A freshly declared material: black colors, no maps
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            diffuse_color: black(),
            specular_color: black(),
            diffuse_map: None,
            normal_map: None,
        }
    }
}

/// Everything an import needs from one MTL file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MtlDocument {
    /// Materials in `newmtl` order
    pub materials: Vec<MaterialRecord>,
    /// Unique diffuse texture paths, first occurrence first
    pub diffuse_maps: Vec<PathBuf>,
    /// Unique normal texture paths, first occurrence first
    pub normal_maps: Vec<PathBuf>,
}

impl MtlDocument {
    /// Look up a material by name
    pub fn material(&self, name: &str) -> Option<&MaterialRecord> {
        self.materials.iter().find(|m| m.name == name)
    }
}

/// Line walker state
#[derive(Debug)]
enum WalkerState {
    NoMaterialPending,
    MaterialPending(MaterialRecord),
}

/// State machine turning MTL lines into [`MaterialRecord`]s.
///
/// A record is emitted when the next `newmtl` arrives or when the walker is
/// finished. Property lines seen before the first `newmtl` are dropped.
#[derive(Debug)]
pub struct MtlLineWalker {
    state: WalkerState,
    emitted: Vec<MaterialRecord>,
}

impl Default for MtlLineWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl MtlLineWalker {
    /// Create a walker with no material pending
    pub fn new() -> Self {
        Self {
            state: WalkerState::NoMaterialPending,
            emitted: Vec::new(),
        }
    }

    /// Whether a material is currently being filled in
    pub fn is_material_pending(&self) -> bool {
        matches!(self.state, WalkerState::MaterialPending(_))
    }

    /// Feed one raw line; `line_num` is 0-based
    pub fn feed(&mut self, line_num: usize, line: &str) -> Result<(), MaterialError> {
        let fields: Vec<&str> = line.trim_start().split(' ').collect();
        let directive = fields[0];
        let operands = &fields[1..];

        match directive {
            NEW_MATERIAL => {
                let name = Self::parse_operand(operands, line_num, directive)?;
                log::debug!("Line {}: new material '{}'", line_num + 1, name);
                let next = WalkerState::MaterialPending(MaterialRecord::new(name));
                if let WalkerState::MaterialPending(done) = std::mem::replace(&mut self.state, next) {
                    self.emitted.push(done);
                }
            }

            DIFFUSE_COLOR => {
                let color = Self::parse_color(operands, line_num, directive)?;
                if let Some(record) = self.pending_record(line_num, directive) {
                    record.diffuse_color = color;
                }
            }

            SPECULAR_COLOR => {
                let color = Self::parse_color(operands, line_num, directive)?;
                if let Some(record) = self.pending_record(line_num, directive) {
                    record.specular_color = color;
                }
            }

            DIFFUSE_MAP => {
                let file = Self::map_operand(operands, line_num, directive);
                if let Some(record) = self.pending_record(line_num, directive) {
                    record.diffuse_map = file;
                }
            }

            NORMAL_MAP => {
                let file = Self::map_operand(operands, line_num, directive);
                if let Some(record) = self.pending_record(line_num, directive) {
                    record.normal_map = file;
                }
            }

            // Ignore unknown commands silently
            _ => {}
        }

        Ok(())
    }

    /// Emit the pending material, if any, and return all records in order
    pub fn finish(mut self) -> Vec<MaterialRecord> {
        if let WalkerState::MaterialPending(done) = self.state {
            self.emitted.push(done);
        }
        self.emitted
    }

    fn pending_record(&mut self, line_num: usize, directive: &str) -> Option<&mut MaterialRecord> {
        match &mut self.state {
            WalkerState::MaterialPending(record) => Some(record),
            WalkerState::NoMaterialPending => {
                log::debug!("Line {}: {} before any newmtl, ignored", line_num + 1, directive);
                None
            }
        }
    }

    /// First operand of a directive, which must be present and non-empty
    fn parse_operand<'a>(operands: &[&'a str], line_num: usize, directive: &str) -> Result<&'a str, MaterialError> {
        match operands.first().copied() {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(MaterialError::parse(line_num, directive, "missing value")),
        }
    }

    /// File name of a map directive; a blank operand means the material has no map
    fn map_operand(operands: &[&str], line_num: usize, directive: &str) -> Option<String> {
        let file = operands.first().copied().filter(|file| !file.is_empty());
        if file.is_none() {
            log::debug!("Line {}: {} without a file name, no map", line_num + 1, directive);
        }
        file.map(str::to_string)
    }

    /// Parse an RGB color from the first three operands
    fn parse_color(operands: &[&str], line_num: usize, directive: &str) -> Result<Vec3, MaterialError> {
        if operands.len() < 3 {
            return Err(MaterialError::parse(
                line_num,
                directive,
                format!("expects 3 values, found {}", operands.len()),
            ));
        }
        let r = Self::parse_f32(operands[0], line_num, directive)?;
        let g = Self::parse_f32(operands[1], line_num, directive)?;
        let b = Self::parse_f32(operands[2], line_num, directive)?;
        Ok(Vec3::new(r, g, b))
    }

    /// Parse a single f32 value
    fn parse_f32(token: &str, line_num: usize, directive: &str) -> Result<f32, MaterialError> {
        token
            .trim()
            .parse::<f32>()
            .map_err(|_| MaterialError::parse(line_num, directive, format!("invalid float value '{token}'")))
    }
}

/// MTL file parser
pub struct MtlParser;

impl MtlParser {
    /// Parse MTL file contents
    ///
    /// # Arguments
    /// * `contents` - The text contents of the MTL file
    /// * `texture_prefix` - Directory joined onto every texture file name
    ///
    /// # Returns
    /// The materials in declaration order plus the unique texture references
    pub fn parse(contents: &str, texture_prefix: &Path) -> Result<MtlDocument, MaterialError> {
        let lines: Vec<&str> = contents.lines().collect();
        Self::parse_lines(&lines, texture_prefix)
    }

    /// Parse already split MTL lines
    pub fn parse_lines<S: AsRef<str>>(lines: &[S], texture_prefix: &Path) -> Result<MtlDocument, MaterialError> {
        let diffuse_maps = dedup_preserving_order(collect_images_by_token(lines, DIFFUSE_MAP, texture_prefix));
        let normal_maps = dedup_preserving_order(collect_images_by_token(lines, NORMAL_MAP, texture_prefix));
        let materials = Self::walk(lines)?;

        log::debug!(
            "Parsed {} material(s), {} diffuse map(s), {} normal map(s)",
            materials.len(),
            diffuse_maps.len(),
            normal_maps.len()
        );

        Ok(MtlDocument {
            materials,
            diffuse_maps,
            normal_maps,
        })
    }

    /// Run the line walker over every line and collect the emitted records
    pub fn walk<S: AsRef<str>>(lines: &[S]) -> Result<Vec<MaterialRecord>, MaterialError> {
        let mut walker = MtlLineWalker::new();
        for (line_num, line) in lines.iter().enumerate() {
            walker.feed(line_num, line.as_ref())?;
        }
        Ok(walker.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn parse(contents: &str) -> MtlDocument {
        MtlParser::parse(contents, Path::new("")).unwrap()
    }

    #[test]
    fn test_two_materials_with_defaults() {
        let lines = [
            "newmtl Wood",
            "Kd 0.5 0.3 0.1",
            "map_Kd wood.png",
            "newmtl Metal",
            "Ks 0.9 0.9 0.9",
        ];
        let doc = MtlParser::parse_lines(&lines, Path::new("")).unwrap();
        assert_eq!(doc.materials.len(), 2);

        let wood = &doc.materials[0];
        assert_eq!(wood.name, "Wood");
        assert_relative_eq!(wood.diffuse_color, Vec3::new(0.5, 0.3, 0.1));
        assert_eq!(wood.diffuse_map.as_deref(), Some("wood.png"));

        let metal = &doc.materials[1];
        assert_eq!(metal.name, "Metal");
        assert_relative_eq!(metal.specular_color, Vec3::new(0.9, 0.9, 0.9));
        assert_eq!(metal.diffuse_color, Vec3::zeros());
        assert_eq!(metal.diffuse_map, None);
    }

    #[test]
    fn test_record_count_matches_newmtl_lines() {
        let contents = "\
# exported
newmtl A
newmtl B
Kd 1 0 0
  newmtl C
newmtl A
";
        let doc = parse(contents);
        let names: Vec<&str> = doc.materials.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "A"]);
        assert_eq!(doc.material("B").unwrap().diffuse_color, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_no_newmtl_yields_no_records() {
        let doc = parse("# just a comment\nKd 0.1 0.2 0.3\nmap_Kd orphan.png\n");
        assert!(doc.materials.is_empty());
        // Texture references are collected regardless of material ownership
        assert_eq!(doc.diffuse_maps, vec![PathBuf::from("orphan.png")]);
    }

    #[test]
    fn test_empty_input() {
        let doc = parse("");
        assert_eq!(doc, MtlDocument::default());
    }

    #[test]
    fn test_properties_before_first_newmtl_are_dropped() {
        let doc = parse("Kd 0.2 0.2 0.2\nmap_Kd early.png\nnewmtl Late\n");
        assert_eq!(doc.materials.len(), 1);
        assert_eq!(doc.materials[0], MaterialRecord::new("Late"));
    }

    #[test]
    fn test_non_numeric_color_is_parse_error() {
        let result = MtlParser::parse("newmtl Bad\nKd 0.5 abc 0.1\n", Path::new(""));
        match result {
            Err(MaterialError::Parse { line, directive, message }) => {
                assert_eq!(line, 2);
                assert_eq!(directive, "Kd");
                assert!(message.contains("abc"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_emits_nothing() {
        let mut walker = MtlLineWalker::new();
        walker.feed(0, "newmtl First").unwrap();
        walker.feed(1, "newmtl Second").unwrap();
        assert!(walker.feed(2, "Ks 1 1 x").is_err());

        let lines = ["newmtl First", "newmtl Second", "Ks 1 1 x"];
        assert!(MtlParser::walk(&lines).is_err());
    }

    #[test]
    fn test_missing_operands_are_parse_errors() {
        for contents in ["newmtl\n", "newmtl A\nKd 0.1 0.2\n", "newmtl A\nKs \n"] {
            let result = MtlParser::parse(contents, Path::new(""));
            assert!(matches!(result, Err(MaterialError::Parse { .. })), "{contents:?}");
        }
    }

    #[test]
    fn test_blank_map_operand_means_no_map() {
        let lines = ["newmtl A", "map_Kd ", "Kd 0.5 0.5 0.5", "map_Kn"];
        let doc = MtlParser::parse_lines(&lines, Path::new("")).unwrap();
        assert_eq!(doc.materials.len(), 1);
        let mat = &doc.materials[0];
        assert_eq!(mat.diffuse_map, None);
        assert_eq!(mat.normal_map, None);
        assert_relative_eq!(mat.diffuse_color, Vec3::new(0.5, 0.5, 0.5));
        assert!(doc.diffuse_maps.is_empty());
        assert!(doc.normal_maps.is_empty());
    }

    #[test]
    fn test_double_space_map_clears_earlier_map() {
        // Walker and collector agree: the second field is empty, so there is no map
        let doc = parse("newmtl A\nmap_Kd a.png\nmap_Kd  x.png\n");
        assert_eq!(doc.materials[0].diffuse_map, None);
        assert_eq!(doc.diffuse_maps, vec![PathBuf::from("a.png")]);
    }

    #[test]
    fn test_double_space_breaks_numeric_field() {
        let result = MtlParser::parse("newmtl A\nKd 0.1  0.2 0.3\n", Path::new(""));
        assert!(matches!(result, Err(MaterialError::Parse { .. })));
    }

    #[test]
    fn test_leading_whitespace_and_crlf() {
        let doc = parse("newmtl Tabbed\r\n\tKd 0.25 0.5 0.75\r\n    map_Kn tabbed_n.png\r\n");
        let mat = &doc.materials[0];
        assert_relative_eq!(mat.diffuse_color, Vec3::new(0.25, 0.5, 0.75));
        assert_eq!(mat.normal_map.as_deref(), Some("tabbed_n.png"));
        assert_eq!(doc.normal_maps, vec![PathBuf::from("tabbed_n.png")]);
    }

    #[test]
    fn test_unknown_directives_ignored() {
        let doc = parse("newmtl Shiny\nNs 250.0\nd 1.0\nillum 2\nmap_Bump n.png\nKs 0.5 0.5 0.5\n");
        let mat = &doc.materials[0];
        assert_relative_eq!(mat.specular_color, Vec3::new(0.5, 0.5, 0.5));
        assert_eq!(mat.normal_map, None);
        assert!(doc.normal_maps.is_empty());
    }

    #[test]
    fn test_later_property_overrides_earlier() {
        let doc = parse("newmtl A\nmap_Kd one.png\nmap_Kd two.png\nKd 1 1 1\nKd 0 0.5 0\n");
        let mat = &doc.materials[0];
        assert_eq!(mat.diffuse_map.as_deref(), Some("two.png"));
        assert_relative_eq!(mat.diffuse_color, Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_new_material_starts_from_defaults() {
        let doc = parse("newmtl A\nKd 1 1 1\nKs 1 1 1\nmap_Kd a.png\nmap_Kn a_n.png\nnewmtl B\n");
        assert_eq!(doc.materials[1], MaterialRecord::new("B"));
    }

    #[test]
    fn test_texture_lists_are_prefixed_and_unique() {
        let contents = "\
newmtl A
map_Kd shared.png
map_Kn a_n.png
newmtl B
map_Kd b.png
newmtl C
map_Kd shared.png
map_Kn a_n.png
";
        let doc = MtlParser::parse(contents, Path::new("maps")).unwrap();
        assert_eq!(
            doc.diffuse_maps,
            vec![PathBuf::from("maps/shared.png"), PathBuf::from("maps/b.png")]
        );
        assert_eq!(doc.normal_maps, vec![PathBuf::from("maps/a_n.png")]);
        // Records keep the file name exactly as written
        assert_eq!(doc.materials[2].diffuse_map.as_deref(), Some("shared.png"));
    }

    #[test]
    fn test_walker_state_transitions() {
        let mut walker = MtlLineWalker::new();
        assert!(!walker.is_material_pending());
        walker.feed(0, "Kd 1 1 1").unwrap();
        assert!(!walker.is_material_pending());
        walker.feed(1, "newmtl A").unwrap();
        assert!(walker.is_material_pending());
        walker.feed(2, "newmtl B").unwrap();
        assert!(walker.is_material_pending());

        let records = walker.finish();
        assert_eq!(records.len(), 2);
    }
}
