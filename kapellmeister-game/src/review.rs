//! The morning-after press: canned reviews picked by quality tier.

use rand::Rng;

use crate::catalog::{CompositionForm, CompositionStyle};

/// Critical reception bands. Boundaries: <20, <40, <55, <70, <85, else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTier {
    Terrible,
    Poor,
    Mediocre,
    Good,
    Excellent,
    Masterpiece,
}

impl ReviewTier {
    #[must_use]
    pub const fn for_quality(quality: i32) -> Self {
        if quality < 20 {
            Self::Terrible
        } else if quality < 40 {
            Self::Poor
        } else if quality < 55 {
            Self::Mediocre
        } else if quality < 70 {
            Self::Good
        } else if quality < 85 {
            Self::Excellent
        } else {
            Self::Masterpiece
        }
    }

    /// Templates interpolate `{form}` and `{style}` with lowercase names.
    const fn templates(self) -> &'static [&'static str] {
        match self {
            Self::Terrible => &[
                "\"A bewildering cacophony that sent half the audience fleeing before the finale.\"",
                "\"One struggles to find any redeeming quality in this unfortunate attempt at {form}.\"",
                "\"The less said about last evening's performance, the better for everyone concerned.\"",
            ],
            Self::Poor => &[
                "\"A work of modest ambitions, achieving even less than it attempts.\"",
                "\"While not entirely without merit, one cannot recommend this {form} to persons of refined taste.\"",
                "\"The {style} idiom deserves better treatment than this.\"",
            ],
            Self::Mediocre => &[
                "\"A competent if uninspired work that will neither offend nor particularly delight.\"",
                "\"Perfectly adequate for background music at a modest gathering.\"",
                "\"The composer shows promise, though this {form} falls short of greatness.\"",
            ],
            Self::Good => &[
                "\"A thoroughly enjoyable {form} that rewards careful listening.\"",
                "\"The composer demonstrates genuine command of the {style} style.\"",
                "\"An evening well spent - we eagerly await the next offering from this talented pen.\"",
            ],
            Self::Excellent => &[
                "\"A masterful {form} that had the audience in raptures.\"",
                "\"Here is a composer who truly understands the power of music to move the soul.\"",
                "\"Bravo! A work of genuine distinction that will surely enter the repertoire.\"",
            ],
            Self::Masterpiece => &[
                "\"We have witnessed history. This {form} will be remembered for generations.\"",
                "\"Sublime. There are no other words adequate to describe this triumph.\"",
                "\"The very heavens seemed to open. A work of transcendent genius.\"",
            ],
        }
    }
}

/// Draw a review for the given quality from its tier's pool.
#[must_use]
pub fn pick_review<R: Rng>(
    quality: i32,
    form: CompositionForm,
    style: CompositionStyle,
    rng: &mut R,
) -> String {
    let pool = ReviewTier::for_quality(quality).templates();
    let template = pool[rng.gen_range(0..pool.len())];
    template
        .replace("{form}", &form.info().name.to_lowercase())
        .replace("{style}", &style.info().name.to_lowercase())
}
