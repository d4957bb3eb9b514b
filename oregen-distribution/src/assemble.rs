//! Distribution assemblers: one row in, one element tree out.
//!
//! [`assemble`] dispatches on the row's kind discriminator column and hands
//! the row to the kind's assembler. Each assembler is a pure function of the
//! row and the fixed schema tables; a failing row never yields a partial
//! tree.

use std::fmt;

use oregen_document::Element;
use tracing::{debug, trace};

use crate::attributes::{apply_debug_display_attributes, apply_standard_attributes};
use crate::error::DistributionError;
use crate::params::{Params, Row};
use crate::schema;
use crate::settings::synthesize_settings;
use crate::weighted_list;

/// Row column that selects the distribution kind.
pub const KIND_COLUMN: &str = "distribution";

/// Row column that splits `Veins` into its plain and preset flavors.
const VEINS_TYPE_COLUMN: &str = "Type";

/// The closed set of distribution kinds.
///
/// StandardGen, Cloud and Substitute are recognized but terminally
/// unsupported: their engine-side schema is not pinned down yet, so their
/// assemblers fail fast rather than guess at an incomplete tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionKind {
    /// A standard scatter generator.
    StandardGen,
    /// A vein network (plain or preset flavor, split by the `Type` column).
    Veins,
    /// A strategic cloud.
    Cloud,
    /// A block substitution rule.
    Substitute,
}

impl DistributionKind {
    /// Read the kind from a row's discriminator column.
    pub fn from_params(params: &Params<'_>) -> Result<Self, DistributionError> {
        let Some(value) = params.text(KIND_COLUMN) else {
            return Err(DistributionError::MissingKind {
                column: KIND_COLUMN,
            });
        };
        match value.as_ref() {
            "StandardGen" => Ok(Self::StandardGen),
            "Veins" => Ok(Self::Veins),
            "Cloud" => Ok(Self::Cloud),
            "Substitute" => Ok(Self::Substitute),
            other => Err(DistributionError::UnknownKind {
                column: KIND_COLUMN,
                value: other.to_owned(),
            }),
        }
    }

    /// The kind's name as it appears in the discriminator column.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StandardGen => "StandardGen",
            Self::Veins => "Veins",
            Self::Cloud => "Cloud",
            Self::Substitute => "Substitute",
        }
    }

    /// The kind's fixed, ordered setting-name list.
    #[must_use]
    pub const fn settings(self) -> &'static [&'static str] {
        match self {
            Self::StandardGen => schema::STANDARD_GEN_SETTINGS,
            Self::Veins => schema::VEINS_SETTINGS,
            Self::Cloud => schema::CLOUD_SETTINGS,
            Self::Substitute => schema::SUBSTITUTE_SETTINGS,
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Assemble the element tree for one row, selecting the assembler from the
/// row's kind discriminator column.
pub fn assemble(row: &Row) -> Result<Element, DistributionError> {
    let params = Params::new(row);
    let kind = DistributionKind::from_params(&params)?;
    trace!(kind = kind.name(), "assembling distribution row");
    match kind {
        DistributionKind::Veins => assemble_veins(&params),
        DistributionKind::StandardGen | DistributionKind::Cloud | DistributionKind::Substitute => {
            Err(DistributionError::Unsupported(kind))
        }
    }
}

/// Assemble one `Veins` (or `VeinsPreset`) element tree from a row.
///
/// The `Type` column picks the tag: `"Preset"` builds a `VeinsPreset`
/// element, `"Distribution"` a plain `Veins` element; anything else — or a
/// missing value — is rejected. The rest is the shared recipe: standard and
/// debug attributes, the `branchType` scalar, an optional `Description` text
/// child, the Veins setting list, then the weighted child groups.
pub fn assemble_veins(params: &Params<'_>) -> Result<Element, DistributionError> {
    let tag = match params.text(VEINS_TYPE_COLUMN) {
        Some(value) => match value.as_ref() {
            "Preset" => "VeinsPreset",
            "Distribution" => "Veins",
            other => {
                return Err(DistributionError::UnknownKind {
                    column: VEINS_TYPE_COLUMN,
                    value: other.to_owned(),
                });
            }
        },
        None => {
            return Err(DistributionError::MissingKind {
                column: VEINS_TYPE_COLUMN,
            });
        }
    };

    let mut element = Element::new(tag);

    apply_standard_attributes(
        &mut element,
        params.text("name").as_deref(),
        params.text("seed").as_deref(),
        params.text("inherits").as_deref(),
    )?;
    apply_debug_display_attributes(&mut element, params.text("color").as_deref())?;

    if let Some(branch_type) = params.text("branchType") {
        element.set_attr("branchType", branch_type.as_ref());
    }

    if let Some(description) = params.text("Description") {
        element.push_child("Description").set_text(description.as_ref());
    }

    synthesize_settings(params, DistributionKind::Veins.settings(), &mut element);

    for group in schema::WEIGHTED_GROUPS {
        if let Some(list) = params.text(group.column) {
            weighted_list::emit(&mut element, group.tag, group.value_attr, &list).map_err(
                |source| DistributionError::WeightedList {
                    column: group.column.to_owned(),
                    source,
                },
            )?;
        }
    }

    debug!(
        tag,
        name = element.attr("name").unwrap_or_default(),
        children = element.children().len(),
        "assembled veins distribution"
    );
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn veins_row() -> Row {
        let mut row = Row::new();
        row.insert(KIND_COLUMN, "Veins");
        row.insert("Type", "Distribution");
        row.insert("name", "copper");
        row
    }

    #[test]
    fn dispatch_requires_the_kind_column() {
        let row = Row::new();
        assert_eq!(
            assemble(&row),
            Err(DistributionError::MissingKind {
                column: KIND_COLUMN
            })
        );
    }

    #[test]
    fn dispatch_rejects_unknown_kinds() {
        let mut row = Row::new();
        row.insert(KIND_COLUMN, "Nebula");
        assert_eq!(
            assemble(&row),
            Err(DistributionError::UnknownKind {
                column: KIND_COLUMN,
                value: "Nebula".to_owned()
            })
        );
    }

    #[test]
    fn unsupported_kinds_fail_fast() {
        for kind in ["StandardGen", "Cloud", "Substitute"] {
            let mut row = Row::new();
            row.insert(KIND_COLUMN, kind);
            row.insert("name", "anything");
            let err = assemble(&row).unwrap_err();
            assert!(
                matches!(err, DistributionError::Unsupported(k) if k.name() == kind),
                "kind: {kind}, err: {err}"
            );
        }
    }

    #[test]
    fn dispatch_reaches_the_veins_assembler() {
        let element = assemble(&veins_row()).unwrap();
        assert_eq!(element.tag(), "Veins");
        assert_eq!(element.attr("name"), Some("copper"));
    }

    #[test]
    fn veins_type_column_is_required() {
        let mut row = veins_row();
        row.insert_null("Type");
        assert_eq!(
            assemble(&row),
            Err(DistributionError::MissingKind {
                column: VEINS_TYPE_COLUMN
            })
        );
    }

    #[test]
    fn veins_type_column_is_a_closed_choice() {
        let mut row = veins_row();
        row.insert("Type", "Template");
        assert_eq!(
            assemble(&row),
            Err(DistributionError::UnknownKind {
                column: VEINS_TYPE_COLUMN,
                value: "Template".to_owned()
            })
        );
    }

    #[test]
    fn branch_type_passes_through() {
        let mut row = veins_row();
        row.insert("branchType", "Bezier");
        let element = assemble(&row).unwrap();
        assert_eq!(element.attr("branchType"), Some("Bezier"));
    }

    #[test]
    fn description_becomes_a_text_child() {
        let mut row = veins_row();
        row.insert("Description", "Sparse native copper.");
        let element = assemble(&row).unwrap();

        let description: Vec<_> = element.children_tagged("Description").collect();
        assert_eq!(description.len(), 1);
        assert_eq!(description[0].text(), Some("Sparse native copper."));
    }

    #[test]
    fn weighted_list_errors_carry_the_column_name() {
        let mut row = veins_row();
        row.insert("OreBlock", "minecraft:copper_ore,heavy;");
        let err = assemble(&row).unwrap_err();
        assert!(
            matches!(&err, DistributionError::WeightedList { column, .. } if column == "OreBlock"),
            "err: {err}"
        );
    }

    #[test]
    fn setting_tables_match_their_kinds() {
        assert_eq!(DistributionKind::Veins.settings().len(), 16);
        assert_eq!(DistributionKind::StandardGen.settings().len(), 4);
        assert_eq!(DistributionKind::Cloud.settings().len(), 10);
        assert!(DistributionKind::Substitute.settings().is_empty());
    }
}
