//! Work-title generation: a random key and a form-appropriate prefix with
//! an opus number, except operas and lieder, which draw from curated pools.

use rand::Rng;

use crate::catalog::CompositionForm;

const KEYS: [&str; 20] = [
    "C major",
    "G major",
    "D major",
    "A major",
    "E major",
    "B major",
    "F major",
    "B-flat major",
    "E-flat major",
    "A-flat major",
    "C minor",
    "G minor",
    "D minor",
    "A minor",
    "E minor",
    "F minor",
    "B-flat minor",
    "E-flat minor",
    "F-sharp minor",
    "C-sharp minor",
];

const OPERA_TITLES: [&str; 8] = [
    "Die Zauberflöte",
    "Leonore",
    "Der Freischütz",
    "Euryanthe",
    "La Vestale",
    "Medea",
    "Armide",
    "Iphigénie",
];

const LIED_TITLES: [&str; 7] = [
    "Wanderer",
    "Sehnsucht",
    "An die Musik",
    "Erlkönig",
    "Gretchen am Spinnrade",
    "Die Forelle",
    "Nachtlied",
];

const fn prefixes(form: CompositionForm) -> &'static [&'static str] {
    match form {
        CompositionForm::PianoSonata => &["Sonata", "Grand Sonata", "Sonatina"],
        CompositionForm::StringQuartet => &["Quartet", "String Quartet"],
        CompositionForm::Symphony => &["Symphony", "Grand Symphony", "Sinfonia"],
        CompositionForm::Concerto => &["Concerto", "Grand Concerto"],
        CompositionForm::Mass => &["Mass", "Missa"],
        // Operas and lieder use curated pools instead.
        CompositionForm::Opera | CompositionForm::Lied => &[],
    }
}

/// Generate a title for the composer's `work_number`-th work (zero-based).
/// Opus numbers stride faster than works so a catalogue feels lived-in.
#[must_use]
pub fn generate_work_title<R: Rng>(form: CompositionForm, work_number: usize, rng: &mut R) -> String {
    let opus_number = 1 + work_number * 3 / 2;

    match form {
        CompositionForm::Opera => {
            OPERA_TITLES[rng.gen_range(0..OPERA_TITLES.len())].to_string()
        }
        CompositionForm::Lied => {
            let title = LIED_TITLES[rng.gen_range(0..LIED_TITLES.len())];
            format!("\"{title}\", Op. {opus_number}")
        }
        _ => {
            let key = KEYS[rng.gen_range(0..KEYS.len())];
            let pool = prefixes(form);
            let prefix = pool[rng.gen_range(0..pool.len())];
            format!("{prefix} in {key}, Op. {opus_number}")
        }
    }
}
