use std::collections::HashSet;

use crate::models::Resolution;

/// Pseudo-model exposing the union of every model's resolutions.
pub const ALL_MODELS: &str = "All";

pub struct ModelPresets {
    pub name: &'static str,
    pub square: &'static [(u32, u32)],
    pub portrait: &'static [(u32, u32)],
    pub landscape: &'static [(u32, u32)],
}

impl ModelPresets {
    // Authored display order: square, then portrait, then landscape.
    fn buckets(&self) -> [&'static [(u32, u32)]; 3] {
        [self.square, self.portrait, self.landscape]
    }
}

// Model-optimized sizes plus photo print, digital/social and canvas-art
// ratios. Bucket order within a model is display order; entries are
// authored per category rather than classified at runtime.
pub const MODEL_CATALOG: &[ModelPresets] = &[
    ModelPresets {
        name: "Flux",
        square: &[
            (512, 512),
            (768, 768),
            (1024, 1024),
            (1088, 1088),
            (1280, 1280),
            (1536, 1536),
            (1920, 1920),
            (2048, 2048),
        ],
        portrait: &[
            (688, 2048),
            (768, 1344),
            (832, 1216),
            (896, 1152),
            (928, 1664),
            (1024, 1536),
            (1024, 1792),
            (1024, 2048),
            (1088, 1920),
            (1152, 2048),
            (1200, 1792),
            (1360, 2048),
            (1456, 2048),
            (1536, 2048),
            (1616, 2048),
            (1632, 2048),
            (1712, 2048),
        ],
        landscape: &[
            (1280, 720),
            (1344, 768),
            (1216, 832),
            (1152, 896),
            (1536, 1024),
            (1664, 928),
            (1792, 1024),
            (1792, 1200),
            (1920, 1088),
            (2048, 688),
            (2048, 1024),
            (2048, 1152),
            (2048, 1360),
            (2048, 1456),
            (2048, 1536),
            (2048, 1616),
            (2048, 1632),
            (2048, 1712),
        ],
    },
    ModelPresets {
        name: "Qwen Image",
        square: &[
            (1024, 1024),
            (1080, 1080),
            (1280, 1280),
            (1328, 1328),
            (1536, 1536),
            (1920, 1920),
            (2048, 2048),
        ],
        portrait: &[
            (680, 2048),
            (928, 1664),
            (1024, 1536),
            (1024, 2048),
            (1080, 1920),
            (1140, 1472),
            (1152, 2048),
            (1200, 1800),
            (1368, 2048),
            (1464, 2048),
            (1536, 2048),
            (1608, 2048),
            (1640, 2048),
            (1704, 2048),
        ],
        landscape: &[
            (1280, 720),
            (1472, 1140),
            (1536, 1024),
            (1664, 928),
            (1800, 1200),
            (1920, 1080),
            (2048, 680),
            (2048, 1024),
            (2048, 1152),
            (2048, 1368),
            (2048, 1464),
            (2048, 1536),
            (2048, 1608),
            (2048, 1640),
            (2048, 1704),
        ],
    },
    ModelPresets {
        name: "Z-Image",
        square: &[
            (512, 512),
            (768, 768),
            (1024, 1024),
            (1080, 1080),
            (1280, 1280),
            (1536, 1536),
            (1920, 1920),
            (2048, 2048),
        ],
        portrait: &[
            (680, 2048),
            (720, 1280),
            (768, 1024),
            (1024, 2048),
            (1080, 1920),
            (1152, 2048),
            (1200, 1800),
            (1368, 2048),
            (1464, 2048),
            (1536, 2048),
            (1608, 2048),
            (1640, 2048),
            (1704, 2048),
        ],
        landscape: &[
            (1024, 768),
            (1280, 720),
            (1800, 1200),
            (1920, 1080),
            (2048, 680),
            (2048, 1024),
            (2048, 1152),
            (2048, 1368),
            (2048, 1464),
            (2048, 1536),
            (2048, 1608),
            (2048, 1640),
            (2048, 1704),
        ],
    },
    ModelPresets {
        name: "SD 1.5",
        square: &[
            (512, 512),
            (768, 768),
            (1024, 1024),
            (1080, 1080),
            (1280, 1280),
            (1536, 1536),
        ],
        portrait: &[
            (512, 768),
            (512, 682),
            (512, 1024),
            (680, 2048),
            (768, 1024),
            (768, 1344),
            (1024, 2048),
            (1080, 1920),
            (1200, 1800),
            (1368, 2048),
            (1464, 2048),
            (1536, 2048),
            (1608, 2048),
            (1640, 2048),
            (1704, 2048),
        ],
        landscape: &[
            (768, 512),
            (1024, 512),
            (1024, 768),
            (1280, 720),
            (1344, 768),
            (1536, 512),
            (1800, 1200),
            (1920, 1080),
            (2048, 680),
            (2048, 1024),
            (2048, 1368),
            (2048, 1464),
            (2048, 1536),
            (2048, 1608),
            (2048, 1640),
            (2048, 1704),
        ],
    },
    ModelPresets {
        name: "SDXL",
        square: &[
            (1024, 1024),
            (1080, 1080),
            (1280, 1280),
            (1536, 1536),
            (1920, 1920),
            (2048, 2048),
        ],
        portrait: &[
            (640, 1536),
            (680, 2048),
            (768, 1344),
            (832, 1216),
            (896, 1152),
            (1024, 1536),
            (1024, 2048),
            (1080, 1920),
            (1152, 2048),
            (1200, 1800),
            (1368, 2048),
            (1464, 2048),
            (1536, 2048),
            (1608, 2048),
            (1640, 2048),
            (1704, 2048),
        ],
        landscape: &[
            (1152, 896),
            (1216, 832),
            (1280, 720),
            (1344, 768),
            (1536, 640),
            (1536, 1024),
            (1800, 1200),
            (1920, 1080),
            (2048, 680),
            (2048, 1024),
            (2048, 1152),
            (2048, 1368),
            (2048, 1464),
            (2048, 1536),
            (2048, 1608),
            (2048, 1640),
            (2048, 1704),
        ],
    },
];

// Native/optimal resolution per model, used to pre-select the dropdown.
const DEFAULT_RESOLUTIONS: &[(&str, (u32, u32))] = &[
    ("Flux", (1024, 1024)),
    ("Qwen Image", (1328, 1328)),
    ("Z-Image", (1024, 1024)),
    ("SD 1.5", (512, 512)),
    ("SDXL", (1024, 1024)),
    (ALL_MODELS, (1024, 1024)),
];

const FALLBACK_DEFAULT: (u32, u32) = (1024, 1024);

/// Every catalog model in authored order, with the "All" pseudo-model last.
pub fn list_models() -> Vec<&'static str> {
    MODEL_CATALOG
        .iter()
        .map(|presets| presets.name)
        .chain(std::iter::once(ALL_MODELS))
        .collect()
}

/// Formatted labels for a model's dropdown. A known model yields its buckets
/// in authored order, "All" the sorted deduplicated union, an unknown name
/// an empty vec so the caller can decide what to show.
pub fn resolutions_for(model: &str) -> Vec<String> {
    if model == ALL_MODELS {
        return all_resolutions();
    }

    let Some(presets) = MODEL_CATALOG.iter().find(|p| p.name == model) else {
        return Vec::new();
    };

    presets
        .buckets()
        .into_iter()
        .flatten()
        .map(|&(w, h)| format_resolution(w, h))
        .collect()
}

fn all_resolutions() -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for presets in MODEL_CATALOG {
        for bucket in presets.buckets() {
            for &(w, h) in bucket {
                let resolution = Resolution::new(w, h);
                if seen.insert(resolution) {
                    unique.push(resolution);
                }
            }
        }
    }

    unique.sort_by_key(|r| (r.pixels(), r.width));
    unique.iter().map(Resolution::label).collect()
}

/// Label to pre-select when `model` becomes active. Unknown models fall back
/// to 1024x1024; this never fails.
pub fn default_for(model: &str) -> String {
    let (w, h) = DEFAULT_RESOLUTIONS
        .iter()
        .find(|(name, _)| *name == model)
        .map(|&(_, pair)| pair)
        .unwrap_or(FALLBACK_DEFAULT);

    format_resolution(w, h)
}

pub fn format_resolution(width: u32, height: u32) -> String {
    Resolution::new(width, height).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_model_plus_all() {
        let models = list_models();
        assert_eq!(
            models,
            vec!["Flux", "Qwen Image", "Z-Image", "SD 1.5", "SDXL", "All"]
        );
    }

    #[test]
    fn known_models_are_non_empty_with_consistent_orientation() {
        for presets in MODEL_CATALOG {
            let labels = resolutions_for(presets.name);
            assert!(!labels.is_empty(), "{} has no resolutions", presets.name);

            for label in &labels {
                let resolution = Resolution::parse(label)
                    .unwrap_or_else(|| panic!("unparseable label {label:?}"));
                assert!(
                    label.contains(resolution.orientation().as_str()),
                    "{label:?} does not carry its orientation"
                );
            }
        }
    }

    #[test]
    fn model_buckets_keep_authored_order() {
        let labels = resolutions_for("Flux");
        let presets = MODEL_CATALOG
            .iter()
            .find(|p| p.name == "Flux")
            .unwrap();

        let expected: Vec<String> = presets
            .buckets()
            .into_iter()
            .flatten()
            .map(|&(w, h)| format_resolution(w, h))
            .collect();
        assert_eq!(labels, expected);

        // Square bucket leads, so the first entry is the smallest square.
        assert!(labels[0].starts_with("512x512"));
    }

    #[test]
    fn all_is_deduplicated_and_sorted() {
        let labels = resolutions_for(ALL_MODELS);
        assert!(!labels.is_empty());

        let mut seen = std::collections::HashSet::new();
        let mut previous: Option<Resolution> = None;
        for label in &labels {
            let resolution = Resolution::parse(label).unwrap();
            assert!(
                seen.insert(resolution),
                "duplicate entry {label:?} in All"
            );
            if let Some(prev) = previous {
                assert!(
                    (prev.pixels(), prev.width) <= (resolution.pixels(), resolution.width),
                    "{prev} sorts after {resolution}"
                );
            }
            previous = Some(resolution);
        }
    }

    #[test]
    fn all_spans_more_than_any_single_model() {
        let all = resolutions_for(ALL_MODELS).len();
        for presets in MODEL_CATALOG {
            assert!(all > resolutions_for(presets.name).len());
        }
    }

    #[test]
    fn unknown_model_yields_empty() {
        assert!(resolutions_for("nonexistent-model").is_empty());
        assert!(resolutions_for("").is_empty());
    }

    #[test]
    fn model_defaults() {
        assert_eq!(default_for("Flux"), format_resolution(1024, 1024));
        assert_eq!(default_for("Qwen Image"), format_resolution(1328, 1328));
        assert_eq!(default_for("SD 1.5"), format_resolution(512, 512));
        assert_eq!(default_for(ALL_MODELS), format_resolution(1024, 1024));
    }

    #[test]
    fn unknown_model_falls_back_to_1024() {
        assert_eq!(default_for("nonexistent-model"), format_resolution(1024, 1024));
    }

    #[test]
    fn default_is_selectable_for_every_model() {
        for model in list_models() {
            let labels = resolutions_for(model);
            let default = default_for(model);
            assert!(
                labels.contains(&default),
                "{model}: default {default:?} not offered"
            );
        }
    }

    #[test]
    fn default_label_shape() {
        for model in ["Flux", "SDXL", "nonexistent-model"] {
            let label = default_for(model);
            let resolution = Resolution::parse(&label).unwrap();
            assert!(label.contains(&format!("{}x{}", resolution.width, resolution.height)));
            assert!(label.ends_with(')'));
            assert!(label.contains('('));
            assert!(label.contains(resolution.orientation().as_str()));
        }
    }

    #[test]
    fn format_spot_checks() {
        assert_eq!(format_resolution(1920, 1080), "1920x1080    (16:9 Landscape)");
        assert_eq!(format_resolution(1024, 1024), "1024x1024    (1:1 Square)");
    }
}
