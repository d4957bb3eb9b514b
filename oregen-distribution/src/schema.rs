//! Per-kind schema tables.
//!
//! These are data, not behavior: the fixed, ordered setting-name list for
//! each distribution kind and the weighted-list-backed child groups shared
//! by all kinds. The consuming engine defines them; nothing here is derived.

/// A weighted-list-backed child group: the row column holding the packed
/// list, the child tag to emit, and the attribute the value half lands in.
#[derive(Debug, Clone, Copy)]
pub struct WeightedGroup {
    /// Row column holding the packed weighted list.
    pub column: &'static str,
    /// Tag of each emitted child element.
    pub tag: &'static str,
    /// Attribute name carrying the value half of each pair.
    pub value_attr: &'static str,
}

/// Setting names recognized by `Veins` distributions, in emission order.
pub const VEINS_SETTINGS: &[&str] = &[
    "OreDensity",
    "OreRadiusMult",
    "MotherlodeFrequency",
    "MotherlodeRangeLimit",
    "MotherlodeSize",
    "MotherlodeHeight",
    "BranchFrequency",
    "BranchInclination",
    "BranchLength",
    "BranchHeightLimit",
    "SegmentForkFrequency",
    "SegmentForkLengthMult",
    "SegmentLength",
    "SegmentAngle",
    "SegmentPitch",
    "SegmentRadius",
];

/// Setting names recognized by `StandardGen` distributions, in emission order.
pub const STANDARD_GEN_SETTINGS: &[&str] = &["Size", "Frequency", "Height", "ParentRangeLimit"];

/// Setting names recognized by `Cloud` distributions, in emission order.
pub const CLOUD_SETTINGS: &[&str] = &[
    "ParentRangeLimit",
    "DistributionFrequency",
    "CloudRadius",
    "CloudThickness",
    "CloudSizeNoise",
    "CloudHeight",
    "CloudInclination",
    "OreDensity",
    "OreVolumeNoiseCutoff",
    "OreRadiusMult",
];

/// `Substitute` distributions carry no settings.
pub const SUBSTITUTE_SETTINGS: &[&str] = &[];

/// Weighted-list child groups, shared by every kind and emitted in this
/// order: the ore-block palette, the replacement rules, the biome filters.
pub const WEIGHTED_GROUPS: &[WeightedGroup] = &[
    WeightedGroup {
        column: "OreBlock",
        tag: "OreBlock",
        value_attr: "block",
    },
    WeightedGroup {
        column: "Replaces",
        tag: "Replaces",
        value_attr: "block",
    },
    WeightedGroup {
        column: "ReplacesOre",
        tag: "ReplacesOre",
        value_attr: "name",
    },
    WeightedGroup {
        column: "ReplacesItself",
        tag: "ReplacesItself",
        value_attr: "block",
    },
    WeightedGroup {
        column: "Biome",
        tag: "Biome",
        value_attr: "name",
    },
    WeightedGroup {
        column: "BiomeType",
        tag: "BiomeType",
        value_attr: "name",
    },
];
