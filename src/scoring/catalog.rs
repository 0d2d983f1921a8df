// src/scoring/catalog.rs
//! Static descriptive content attached to test results: French names,
//! descriptions and career suggestions per RIASEC category and Enneagram
//! type. Pure lookups, nothing here is computed.

use serde::Serialize;

use super::{EnneagramType, RiasecCategory};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryProfile {
    pub code: char,
    pub name: &'static str,
    pub description: &'static str,
    pub careers: &'static [&'static str],
}

pub fn riasec_profile(category: RiasecCategory) -> &'static CategoryProfile {
    match category {
        RiasecCategory::Realistic => &CategoryProfile {
            code: 'R',
            name: "Réaliste",
            description: "Aime travailler avec ses mains, utiliser des outils et machines",
            careers: &["Ingénieur", "Technicien", "Mécanicien", "Électricien", "Architecte"],
        },
        RiasecCategory::Investigative => &CategoryProfile {
            code: 'I',
            name: "Investigateur",
            description: "Aime observer, apprendre, analyser et résoudre des problèmes",
            careers: &["Chercheur", "Médecin", "Analyste", "Scientifique", "Programmeur"],
        },
        RiasecCategory::Artistic => &CategoryProfile {
            code: 'A',
            name: "Artistique",
            description: "Aime créer, innover et s'exprimer de manière créative",
            careers: &["Designer", "Artiste", "Musicien", "Écrivain", "Photographe"],
        },
        RiasecCategory::Social => &CategoryProfile {
            code: 'S',
            name: "Social",
            description: "Aime aider, enseigner et travailler avec les autres",
            careers: &["Enseignant", "Psychologue", "Infirmier", "Travailleur social", "Coach"],
        },
        RiasecCategory::Enterprising => &CategoryProfile {
            code: 'E',
            name: "Entreprenant",
            description: "Aime diriger, persuader et prendre des décisions",
            careers: &["Manager", "Vendeur", "Entrepreneur", "Avocat", "Consultant"],
        },
        RiasecCategory::Conventional => &CategoryProfile {
            code: 'C',
            name: "Conventionnel",
            description: "Aime organiser, classer et travailler avec des données",
            careers: &["Comptable", "Secrétaire", "Banquier", "Administrateur", "Contrôleur"],
        },
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeProfile {
    pub number: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub motivation: &'static str,
    pub fear: &'static str,
    pub careers: &'static [&'static str],
}

pub fn enneagram_profile(personality: EnneagramType) -> &'static TypeProfile {
    match personality {
        EnneagramType::One => &TypeProfile {
            number: 1,
            name: "Le Perfectionniste",
            description: "Rationnel, idéaliste, ayant des principes, déterminé, maîtrisé et perfectionniste",
            motivation: "Être bon, juste, parfait et améliorer tout",
            fear: "Être corrompu, défectueux ou mauvais",
            careers: &["Juge", "Éditeur", "Critique", "Réformateur", "Organisateur"],
        },
        EnneagramType::Two => &TypeProfile {
            number: 2,
            name: "L'Altruiste",
            description: "Attentionné, interpersonnel, démonstratif, généreux, possessif et manipulateur",
            motivation: "Se sentir aimé et nécessaire",
            fear: "Être indigne d'amour",
            careers: &["Conseiller", "Infirmier", "Travailleur social", "Enseignant", "Thérapeute"],
        },
        EnneagramType::Three => &TypeProfile {
            number: 3,
            name: "Le Battant",
            description: "Adaptable, ambitieux, énergique, orienté image, pragmatique et vaniteux",
            motivation: "Se sentir valorisé et digne d'estime",
            fear: "Être sans valeur en dehors de ses réalisations",
            careers: &["Manager", "Vendeur", "Entrepreneur", "Politicien", "Athlète"],
        },
        EnneagramType::Four => &TypeProfile {
            number: 4,
            name: "L'Artiste",
            description: "Expressif, dramatique, égocentrique, tempéramental, créatif et morose",
            motivation: "Trouver son identité et sa signification",
            fear: "N'avoir aucune identité ou signification personnelle",
            careers: &["Artiste", "Designer", "Écrivain", "Musicien", "Acteur"],
        },
        EnneagramType::Five => &TypeProfile {
            number: 5,
            name: "L'Investigateur",
            description: "Intense, cérébral, perceptif, innovant, secret et isolé",
            motivation: "Être capable et compétent",
            fear: "Être inutile, incapable ou envahi",
            careers: &["Chercheur", "Analyste", "Ingénieur", "Programmeur", "Scientifique"],
        },
        EnneagramType::Six => &TypeProfile {
            number: 6,
            name: "Le Loyaliste",
            description: "Engagé, responsable, anxieux, suspicieux, loyal et défensif",
            motivation: "Avoir sécurité et soutien",
            fear: "Être sans soutien ou guidance",
            careers: &["Avocat", "Policier", "Comptable", "Administrateur", "Consultant"],
        },
        EnneagramType::Seven => &TypeProfile {
            number: 7,
            name: "L'Enthousiaste",
            description: "Spontané, versatile, acquisitif, dispersé, optimiste et impulsif",
            motivation: "Maintenir bonheur et satisfaction",
            fear: "Être piégé dans la douleur ou la privation",
            careers: &["Journaliste", "Animateur", "Consultant", "Entrepreneur", "Guide touristique"],
        },
        EnneagramType::Eight => &TypeProfile {
            number: 8,
            name: "Le Challenger",
            description: "Puissant, dominateur, confiant en soi, confrontant, autoritaire et vengeur",
            motivation: "Être autonome et contrôler sa vie",
            fear: "Être contrôlé ou vulnérable",
            careers: &["PDG", "Entrepreneur", "Avocat", "Militaire", "Négociateur"],
        },
        EnneagramType::Nine => &TypeProfile {
            number: 9,
            name: "Le Médiateur",
            description: "Réceptif, rassurant, agréable, complaisant, résigné et négligent",
            motivation: "Maintenir paix et harmonie intérieure",
            fear: "Perte de connexion et fragmentation",
            careers: &["Médiateur", "Conseiller", "Bibliothécaire", "Vétérinaire", "Diplomate"],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_riasec_profiles_match_their_category() {
        for category in RiasecCategory::ALL {
            let profile = riasec_profile(category);
            assert_eq!(profile.code, category.code());
            assert!(!profile.careers.is_empty());
        }
    }

    #[test]
    fn test_enneagram_profiles_match_their_number() {
        for personality in EnneagramType::ALL {
            let profile = enneagram_profile(personality);
            assert_eq!(profile.number, personality.number());
            assert!(!profile.careers.is_empty());
        }
    }
}
