//! Prompt construction for the garment transformation request.
//!
//! `compose` is a pure function of the form selections: same selections,
//! same prompt string.

use crate::catalog;

pub const BACKGROUND_PLACEHOLDER: &str = "{{BACKGROUND_PLACEHOLDER}}";

/// The user's current choices, as posted by the scene form.
#[derive(Debug, Clone)]
pub struct Selection {
    pub pose: String,
    pub background: String,
    pub style: String,
}

const CINEMATIC_TEMPLATE: &str = "A stunning, high-fashion product photograph of a garment, \
gracefully floating or suspended. The composition is centered. Dramatic, cinematic lighting \
from the upper right creates intense, warm highlights and ethereal, glowing rim light effect \
that sharply contrasts with cooler shadows. The background is {{BACKGROUND_PLACEHOLDER}}. The \
overall aesthetic is clean, modern, and elegant, rendered with photorealistic precision, \
emphasizing the delicate texture and luxurious feel of the fabric, achieved with a shallow \
depth of field.";

const ETHEREAL_TEMPLATE: &str = "A highly detailed, ethereal, high-fashion studio shot of a \
pristine white mannequin gracefully 'floating' mid-air, wearing an exquisite garment. The \
entire scene is bathed in soft, diffused, high-key overhead lighting. Surrounding the mannequin \
are numerous delicate, abstract, petal-like fabric elements, fluttering around. The background \
is a vast, flowing cascade of smooth fabric that is {{BACKGROUND_PLACEHOLDER}}. The image \
exudes a sense of purity, lightness, and elegant motion, rendered with hyperrealistic detail.";

const MINIMALIST_TEMPLATE: &str = "A high-key, minimalist studio product photograph of a \
garment, dynamically suspended mid-air as if in motion. The garment exhibits natural folds and \
creases. The composition features the garment floating against a clean, seamless background \
which is {{BACKGROUND_PLACEHOLDER}}. Soft, diffused professional studio lighting illuminates \
the garment from above and slightly in front, creating subtle volumetric shadows. A soft, \
elongated shadow is cast beneath the garment. Shot with a shallow depth of field, sharp focus, \
evoking a clean, contemporary aesthetic.";

const STREET_TEMPLATE: &str = "A full-body, high-fashion studio shot of an invisible person or \
headless mannequin, dynamically posed. The background is a clean, minimalist seamless studio \
setup which is {{BACKGROUND_PLACEHOLDER}}. Dramatic, high-contrast, directional natural light \
originates from the upper left, casting intricate, sharp, elongated shadow patterns resembling \
palm fronds or window blinds across the entire background and subtly onto the subject. The \
lighting creates strong specular highlights on the fabric. The overall aesthetic is modern, \
clean, editorial, and sophisticated with a strong focus on light and shadow play.";

fn style_template(key: &str) -> Option<&'static str> {
    match key {
        "cinematic" => Some(CINEMATIC_TEMPLATE),
        "ethereal" => Some(ETHEREAL_TEMPLATE),
        "minimalist" => Some(MINIMALIST_TEMPLATE),
        "street" => Some(STREET_TEMPLATE),
        _ => None,
    }
}

fn background_description(key: &str) -> &'static str {
    const FALLBACK: &str = "a seamless, gradient cool grey studio background";
    catalog::BACKGROUNDS
        .iter()
        .find(|background| background.key == key)
        .map(|background| background.description)
        .unwrap_or(FALLBACK)
}

fn default_prompt(pose: &str, background: &str) -> String {
    format!(
        "Your task is to perform a professional fashion product photo transformation. \
         1. **Isolate the Outfit:** From the reference image provided, meticulously isolate \
         the complete outfit. \
         2. **Remove the Model:** Completely remove every trace of the human model. The final \
         image must contain ONLY the clothing on a perfectly invisible mannequin. \
         3. **Re-render on Invisible Mannequin:** Re-render the isolated outfit as a \
         hyperrealistic 3D object, worn by an invisible mannequin in the following pose: \
         \"{pose}\". \
         4. **CRITICAL for Headwear:** If the garment is a hijab, reconstruct the inner lining \
         to look natural on an invisible head. \
         5. **Set the Scene:** Place the outfit in a clean, minimalist scene with this \
         background: {background}. Use soft, diffused studio lighting. \
         6. **Final Aesthetic:** The final image must have a high-fashion, sophisticated, and \
         ethereal editorial photography aesthetic."
    )
}

/// Builds the instruction string sent to the model. Unknown background keys
/// fall back to the Cool Grey description; unknown style keys fall back to
/// the default invisible-mannequin template.
///
/// The four named style templates only use the background; the pose is still
/// required by the form but does not appear in their output.
pub fn compose(selection: &Selection) -> String {
    let background = background_description(&selection.background);

    match style_template(&selection.style) {
        Some(template) => template.replace(BACKGROUND_PLACEHOLDER, background),
        None => default_prompt(&selection.pose, background),
    }
}
