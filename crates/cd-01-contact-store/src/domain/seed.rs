//! Sample roster for a freshly seeded store.

use shared_types::ContactPatch;

const ROSTER: &[(&str, &str, &str)] = &[
    ("Ada", "Okafor", "adaokafor"),
    ("Bruno", "Lindqvist", "brunolq"),
    ("Carmen", "Ruiz", "carmenruiz"),
    ("Dmitri", "Volkov", "dvolkov"),
    ("Elena", "Marsh", "elenamarsh"),
    ("Farid", "Haddad", "faridh"),
    ("Greta", "Holm", "gretaholm"),
    ("Hiro", "Tanaka", "hirotanaka"),
    ("Ines", "Moreau", "inesmoreau"),
    ("Jonah", "Whitfield", "jwhitfield"),
    ("Keira", "Nolan", "keiranolan"),
    ("Luca", "Bianchi", "lucabianchi"),
];

/// Patches applied, in order, to blank contacts when seeding.
#[must_use]
pub fn sample_roster() -> Vec<ContactPatch> {
    ROSTER
        .iter()
        .map(|(first, last, twitter)| {
            ContactPatch::default()
                .with_first(*first)
                .with_last(*last)
                .with_twitter(*twitter)
                .with_avatar(format!("https://avatars.example.com/{twitter}.png"))
        })
        .collect()
}
