use serde::{Deserialize, Serialize};

/// One product module in the showroom catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LensModule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub demos: Vec<Demo>,
}

/// One interactive demo attached to a module.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Demo {
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[serde(flatten)]
    pub kind: DemoKind,
}

/// What a demo renders, keyed by the catalog's `type` field.
///
/// Unrecognized `type` strings deserialize to `Unsupported` so a newer
/// catalog still opens on an older build; the demo screen shows a
/// placeholder for those. A demo entry with no `type` at all is malformed
/// and fails the whole catalog parse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum DemoKind {
    #[serde(rename = "splitCompare")]
    SplitCompare { before: String, after: String },
    #[serde(rename = "coatingToggles")]
    CoatingToggles,
    #[serde(rename = "photochromic")]
    Photochromic,
    #[serde(rename = "thicknessCalculator")]
    ThicknessCalculator,
    #[serde(other)]
    Unsupported,
}

impl LensModule {
    /// "1 demo" / "3 demos" pill text for the catalog card.
    pub fn demo_count_label(&self) -> String {
        let n = self.demos.len();
        if n == 1 {
            "1 demo".to_string()
        } else {
            format!("{n} demos")
        }
    }

    /// Card icon; modules without an emoji get a stock glasses glyph.
    pub fn display_emoji(&self) -> &str {
        if self.emoji.is_empty() {
            "👓"
        } else {
            &self.emoji
        }
    }

    // Search scans title, subtitle and description as one lowercase blob.
    fn search_haystack(&self) -> String {
        format!("{}{}{}", self.title, self.subtitle, self.description).to_lowercase()
    }
}

/// Parse a catalog document (a JSON array of modules).
pub fn parse_catalog(json: &str) -> anyhow::Result<Vec<LensModule>> {
    use anyhow::Context;
    serde_json::from_str(json).context("Failed to parse catalog document")
}

/// Look a module up by id. Ids are opaque and matched exactly.
pub fn find_module<'a>(modules: &'a [LensModule], id: &str) -> Option<&'a LensModule> {
    modules.iter().find(|m| m.id == id)
}

/// Case-insensitive substring filter over the catalog.
///
/// The empty query returns everything. Whitespace is not trimmed, so a
/// query of " " only matches text that actually contains a space.
pub fn filter_modules<'a>(modules: &'a [LensModule], query: &str) -> Vec<&'a LensModule> {
    if query.is_empty() {
        return modules.iter().collect();
    }
    let needle = query.to_lowercase();
    modules
        .iter()
        .filter(|m| m.search_haystack().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<LensModule> {
        parse_catalog(
            r#"[
                {
                    "id": "polarised",
                    "title": "Polarised Sun Lenses",
                    "subtitle": "Glare control",
                    "description": "Cuts reflected glare from water.",
                    "emoji": "X",
                    "demos": [
                        {
                            "title": "Glare compare",
                            "caption": "Drag the divider.",
                            "type": "splitCompare",
                            "before": "assets/polar_before.jpg",
                            "after": "assets/polar_after.jpg"
                        }
                    ]
                },
                {
                    "id": "coatings",
                    "title": "Premium Coatings",
                    "subtitle": "Anti-reflection stack",
                    "description": "Hydrophobic top layer.",
                    "emoji": "Y",
                    "demos": [
                        { "title": "Build the stack", "type": "coatingToggles" },
                        { "title": "Future demo", "type": "holographicPreview" }
                    ]
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_demo_kinds_including_asset_paths() {
        let modules = sample_catalog();
        assert_eq!(
            modules[0].demos[0].kind,
            DemoKind::SplitCompare {
                before: "assets/polar_before.jpg".to_string(),
                after: "assets/polar_after.jpg".to_string(),
            }
        );
        assert_eq!(modules[1].demos[0].kind, DemoKind::CoatingToggles);
    }

    #[test]
    fn unknown_demo_type_parses_as_unsupported() {
        let modules = sample_catalog();
        assert_eq!(modules[1].demos[1].kind, DemoKind::Unsupported);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let modules = parse_catalog(r#"[{ "id": "m", "title": "Minimal" }]"#).unwrap();
        assert!(modules[0].subtitle.is_empty());
        assert!(modules[0].demos.is_empty());
        assert_eq!(modules[0].demo_count_label(), "0 demos");
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_catalog("{ not a catalog").is_err());
        // A demo without a `type` field poisons the parse rather than
        // silently dropping the entry.
        let missing_type = r#"[{ "id": "m", "title": "T", "demos": [{ "title": "D" }] }]"#;
        assert!(parse_catalog(missing_type).is_err());
    }

    #[test]
    fn find_module_matches_exact_id_only() {
        let modules = sample_catalog();
        assert_eq!(find_module(&modules, "coatings").unwrap().title, "Premium Coatings");
        assert!(find_module(&modules, "COATINGS").is_none());
        assert!(find_module(&modules, "missing").is_none());
    }

    #[test]
    fn filter_is_case_insensitive_across_all_text_fields() {
        let modules = sample_catalog();

        let hits = filter_modules(&modules, "GLARE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "polarised");

        // "hydrophobic" only appears in a description.
        let hits = filter_modules(&modules, "hydrophobic");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "coatings");

        assert!(filter_modules(&modules, "varifocal").is_empty());
    }

    #[test]
    fn empty_query_restores_full_catalog() {
        let modules = sample_catalog();
        assert_eq!(filter_modules(&modules, "").len(), modules.len());
    }

    #[test]
    fn whitespace_is_a_literal_query_not_empty() {
        let modules = sample_catalog();
        // " sun " occurs inside "Polarised Sun Lenses"; the spaces count.
        let hits = filter_modules(&modules, " sun ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "polarised");
        // No module text contains a double space, so this matches nothing.
        assert!(filter_modules(&modules, "  ").is_empty());
    }

    #[test]
    fn demo_count_label_pluralises() {
        let modules = sample_catalog();
        assert_eq!(modules[0].demo_count_label(), "1 demo");
        assert_eq!(modules[1].demo_count_label(), "2 demos");
    }

    #[test]
    fn card_emoji_falls_back_to_glasses() {
        let modules = sample_catalog();
        assert_eq!(modules[0].display_emoji(), "X");

        let minimal = parse_catalog(r#"[{ "id": "m", "title": "Minimal" }]"#).unwrap();
        assert_eq!(minimal[0].display_emoji(), "👓");
    }
}
