//! Attribute appliers shared by every distribution kind.

use oregen_document::Element;
use phf::{Set, phf_set};

use crate::error::DistributionError;

/// Inheritance presets shipped with the engine. Closed set, matched exactly.
static PRESETS: Set<&'static str> = phf_set! {
    // StandardGen presets
    "PresetStandardGen",
    // Veins presets
    "PresetLayeredVeins",
    "PresetVerticalVeins",
    "PresetSmallDeposits",
    "PresetLavaDeposits",
    "PresetHugeVeins",
    "PresetHintVeins",
    "PresetSparseVeins",
    "PresetPipeVeins",
    // Cloud presets
    "PresetStrategicCloud",
    "PresetStratum",
};

/// Element tags that accept the wireframe/bounding-box debug attributes.
/// `VeinsPreset` is the preset flavor of a Veins element and counts too.
static DEBUG_DISPLAY_TAGS: Set<&'static str> = phf_set! {
    "StandardGen",
    "Veins",
    "VeinsPreset",
    "Cloud",
};

/// Alpha prefix for debug colors. Colors are ARGB; 0x60 is about 40% opaque.
const DEBUG_ALPHA_PREFIX: &str = "0x60";

/// Apply the identity attributes every distribution carries.
///
/// `name` is the single required field across all kinds: a missing, empty,
/// or whitespace-only name is rejected, otherwise it is set verbatim.
/// `seed` is set only when present. `inherits` is set only when present and
/// a member of the engine's preset whitelist.
pub fn apply_standard_attributes(
    element: &mut Element,
    name: Option<&str>,
    seed: Option<&str>,
    inherits: Option<&str>,
) -> Result<(), DistributionError> {
    match name {
        Some(name) if !name.trim().is_empty() => element.set_attr("name", name),
        _ => return Err(DistributionError::MissingName),
    }

    if let Some(seed) = seed {
        element.set_attr("seed", seed);
    }

    if let Some(preset) = inherits {
        if !PRESETS.contains(preset) {
            return Err(DistributionError::UnknownPreset(preset.to_owned()));
        }
        element.set_attr("inherits", preset);
    }

    Ok(())
}

/// Derive the wireframe/bounding-box debug display attributes from a
/// six-hex-digit color code.
///
/// A missing color is a no-op. Wireframes are always drawn and bounding
/// boxes never are; both carry the same ARGB color at fixed opacity. That
/// policy is not configurable per call.
pub fn apply_debug_display_attributes(
    element: &mut Element,
    color: Option<&str>,
) -> Result<(), DistributionError> {
    let Some(color) = color else {
        return Ok(());
    };

    if !DEBUG_DISPLAY_TAGS.contains(element.tag()) {
        return Err(DistributionError::WrongElementKind(element.tag().to_owned()));
    }

    if color.len() != 6 || !color.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DistributionError::InvalidColor(color.to_owned()));
    }

    let argb = format!("{DEBUG_ALPHA_PREFIX}{}", color.to_ascii_uppercase());
    element.set_attr("drawWireframe", "true");
    element.set_attr("wireframeColor", argb.as_str());
    element.set_attr("drawBoundBox", "false");
    element.set_attr("boundBoxColor", argb);

    Ok(())
}
