//! Synthesizes `Setting` children from suffix-grouped row columns.
//!
//! A setting named `MotherlodeSize` is spread across up to four row columns:
//! `MotherlodeSize_avg`, `MotherlodeSize_range`, `MotherlodeSize_type` and
//! `MotherlodeSize_scaleTo`. One `Setting` child is emitted per setting name
//! that has at least one facet present; a fully absent group is elided, not
//! emitted empty.

use oregen_document::Element;

use crate::params::Params;

/// Emit one `Setting` child per name in `setting_names` that has at least
/// one facet present in the row, preserving list order.
///
/// `avg` and `range` are numeric multipliers of an engine-side default and
/// are wrapped in the scaling formula; `type` and `scaleTo` are categorical
/// and pass through raw. That asymmetry is fixed.
pub fn synthesize_settings(params: &Params<'_>, setting_names: &[&str], parent: &mut Element) {
    for name in setting_names {
        let avg = params.text(&format!("{name}_avg"));
        let range = params.text(&format!("{name}_range"));
        let kind = params.text(&format!("{name}_type"));
        let scale_to = params.text(&format!("{name}_scaleTo"));

        if avg.is_none() && range.is_none() && kind.is_none() && scale_to.is_none() {
            continue;
        }

        let setting = parent.push_child("Setting");
        setting.set_attr("name", *name);
        if let Some(avg) = avg {
            setting.set_attr("avg", scale_formula(&avg));
        }
        if let Some(range) = range {
            setting.set_attr("range", scale_formula(&range));
        }
        if let Some(kind) = kind {
            setting.set_attr("type", kind.as_ref());
        }
        if let Some(scale_to) = scale_to {
            setting.set_attr("scaleTo", scale_to.as_ref());
        }
    }
}

/// Wrap a multiplier in the engine's scaling formula, e.g. `:= 1.25 * _default_`.
fn scale_formula(value: &str) -> String {
    format!(":= {value} * _default_")
}
