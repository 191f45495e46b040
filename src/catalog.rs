//! Fixed option catalog behind the scene form: preset poses, studio
//! background colors and artistic styles. Served to the page by
//! `GET /api/options` so the form and the prompt composer share one table.

use serde::Serialize;

pub const DEFAULT_BACKGROUND: &str = "Cool Grey";
pub const DEFAULT_STYLE: &str = "default";

pub struct Background {
    pub key: &'static str,
    pub label: &'static str,
    pub hex: &'static str,
    pub description: &'static str,
}

pub struct Style {
    pub key: &'static str,
    pub label: &'static str,
}

pub struct Pose {
    pub label: &'static str,
    /// The natural-language fragment interpolated into the prompt.
    pub description: &'static str,
}

pub struct PoseCategory {
    pub title: &'static str,
    pub poses: &'static [Pose],
}

pub const BACKGROUNDS: &[Background] = &[
    Background {
        key: "White",
        label: "White",
        hex: "#ffffff",
        description: "a seamless, pure white studio background",
    },
    Background {
        key: "Warm Beige",
        label: "Warm Beige",
        hex: "#eaddd7",
        description: "a seamless, warm beige studio background",
    },
    Background {
        key: "Cool Grey",
        label: "Cool Grey",
        hex: "#d1d5db",
        description: "a seamless, gradient cool grey studio background",
    },
    Background {
        key: "Soft Pink",
        label: "Soft Pink",
        hex: "#fbcfe8",
        description: "a seamless, soft pastel pink studio background",
    },
    Background {
        key: "Sky Blue",
        label: "Sky Blue",
        hex: "#bae6fd",
        description: "a seamless, light sky blue studio background",
    },
    Background {
        key: "Olive Green",
        label: "Olive Green",
        hex: "#6b705c",
        description: "a seamless, muted olive green studio background",
    },
    Background {
        key: "Burnt Orange",
        label: "Burnt Orange",
        hex: "#d97706",
        description: "a seamless, warm burnt orange studio background",
    },
    Background {
        key: "Rich Maroon",
        label: "Rich Maroon",
        hex: "#883a3a",
        description: "a seamless, rich maroon studio background",
    },
    Background {
        key: "Deep Navy",
        label: "Deep Navy",
        hex: "#2b2d42",
        description: "a seamless, deep navy blue studio background",
    },
    Background {
        key: "Charcoal",
        label: "Charcoal",
        hex: "#374151",
        description: "a seamless, dark charcoal grey studio background",
    },
];

pub const STYLES: &[Style] = &[
    Style {
        key: "default",
        label: "Standard studio",
    },
    Style {
        key: "cinematic",
        label: "Cinematic lighting",
    },
    Style {
        key: "ethereal",
        label: "Ethereal couture",
    },
    Style {
        key: "minimalist",
        label: "Minimal motion",
    },
    Style {
        key: "street",
        label: "Street shadows",
    },
];

pub const POSE_CATEGORIES: &[PoseCategory] = &[
    PoseCategory {
        title: "Formal & elegant",
        poses: &[
            Pose {
                label: "Confident walk",
                description: "a confident walking pose",
            },
            Pose {
                label: "Poised stance",
                description: "an elegant and poised standing pose",
            },
            Pose {
                label: "Making a point",
                description: "as if assertively explaining a point",
            },
            Pose {
                label: "Hand on hip",
                description: "a sophisticated pose with one hand on the hip",
            },
            Pose {
                label: "Down the staircase",
                description: "as if confidently descending a staircase",
            },
        ],
    },
    PoseCategory {
        title: "Sportswear & athletic",
        poses: &[
            Pose {
                label: "Running shot",
                description: "a powerful running motion",
            },
            Pose {
                label: "Mid-air jump",
                description: "a dynamic mid-air jumping pose",
            },
            Pose {
                label: "Yoga stretch",
                description: "a focused yoga or stretching pose",
            },
            Pose {
                label: "Kicking a ball",
                description: "in a dynamic pose as if kicking a ball",
            },
            Pose {
                label: "Post-workout stretch",
                description: "a powerful post-workout stretching pose",
            },
        ],
    },
    PoseCategory {
        title: "Casual & relaxed",
        poses: &[
            Pose {
                label: "Relaxed float",
                description: "a relaxed floating pose, suggesting ease",
            },
            Pose {
                label: "Caught in a breeze",
                description: "gently swaying as if caught in a breeze",
            },
            Pose {
                label: "Casual lean",
                description: "a casual leaning pose",
            },
            Pose {
                label: "Invisible stool",
                description: "casually sitting on an invisible stool",
            },
            Pose {
                label: "Arms crossed",
                description: "leaning against an invisible wall with crossed arms",
            },
        ],
    },
    PoseCategory {
        title: "Dresses & flowing fabric",
        poses: &[
            Pose {
                label: "Graceful twirl",
                description: "a graceful twirling motion, with the fabric flowing out",
            },
            Pose {
                label: "Majestic walk",
                description: "a sweeping, majestic walking pose",
            },
            Pose {
                label: "Gentle curtsy",
                description: "a gentle curtsy pose, with the fabric draping elegantly",
            },
            Pose {
                label: "Showcasing the sleeves",
                description: "a dramatic pose with arms outstretched, showcasing the sleeves",
            },
        ],
    },
    PoseCategory {
        title: "Dynamic & in motion",
        poses: &[
            Pose {
                label: "Into the wind",
                description: "a powerful forward stride, as if walking into a strong wind",
            },
            Pose {
                label: "Dramatic side leap",
                description: "a dramatic mid-air leap to the side",
            },
            Pose {
                label: "Ready to sprint",
                description: "an athletic pose, as if about to sprint off the blocks",
            },
            Pose {
                label: "Quick twist",
                description: "a quick twisting motion, capturing the fabric in movement",
            },
            Pose {
                label: "Celebration",
                description: "arms thrown up in a celebratory motion",
            },
        ],
    },
];

#[derive(Serialize)]
pub struct OptionsResponse {
    poses: Vec<PoseCategoryPayload>,
    backgrounds: Vec<BackgroundPayload>,
    styles: Vec<StylePayload>,
}

#[derive(Serialize)]
struct PoseCategoryPayload {
    title: &'static str,
    poses: Vec<PosePayload>,
}

#[derive(Serialize)]
struct PosePayload {
    label: &'static str,
    value: &'static str,
}

#[derive(Serialize)]
struct BackgroundPayload {
    key: &'static str,
    label: &'static str,
    hex: &'static str,
}

#[derive(Serialize)]
struct StylePayload {
    key: &'static str,
    label: &'static str,
}

pub fn options() -> OptionsResponse {
    OptionsResponse {
        poses: POSE_CATEGORIES
            .iter()
            .map(|category| PoseCategoryPayload {
                title: category.title,
                poses: category
                    .poses
                    .iter()
                    .map(|pose| PosePayload {
                        label: pose.label,
                        value: pose.description,
                    })
                    .collect(),
            })
            .collect(),
        backgrounds: BACKGROUNDS
            .iter()
            .map(|background| BackgroundPayload {
                key: background.key,
                label: background.label,
                hex: background.hex,
            })
            .collect(),
        styles: STYLES
            .iter()
            .map(|style| StylePayload {
                key: style.key,
                label: style.label,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn defaults_are_listed() {
        assert!(BACKGROUNDS.iter().any(|b| b.key == DEFAULT_BACKGROUND));
        assert!(STYLES.iter().any(|s| s.key == DEFAULT_STYLE));
    }

    #[test]
    fn keys_are_unique() {
        let backgrounds: HashSet<_> = BACKGROUNDS.iter().map(|b| b.key).collect();
        assert_eq!(backgrounds.len(), BACKGROUNDS.len());

        let styles: HashSet<_> = STYLES.iter().map(|s| s.key).collect();
        assert_eq!(styles.len(), STYLES.len());
    }

    #[test]
    fn every_pose_carries_a_description() {
        let total: usize = POSE_CATEGORIES.iter().map(|c| c.poses.len()).sum();
        assert_eq!(total, 24);
        for category in POSE_CATEGORIES {
            for pose in category.poses {
                assert!(!pose.description.trim().is_empty(), "{}", pose.label);
            }
        }
    }

    #[test]
    fn options_payload_mirrors_the_tables() {
        let payload = options();
        assert_eq!(payload.backgrounds.len(), BACKGROUNDS.len());
        assert_eq!(payload.styles.len(), STYLES.len());
        assert_eq!(payload.poses.len(), POSE_CATEGORIES.len());
    }
}
