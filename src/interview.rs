// src/interview.rs
//! Interview-preparation content: the static question/tips guide and the
//! keyword-routed coaching assistant.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct QuestionGroup {
    pub category: &'static str,
    pub questions: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct TipGroup {
    pub title: &'static str,
    pub tips: &'static [&'static str],
}

pub const COMMON_QUESTIONS: &[QuestionGroup] = &[
    QuestionGroup {
        category: "Présentation",
        questions: &[
            "Parlez-moi de vous",
            "Quelles sont vos principales qualités ?",
            "Quels sont vos défauts ?",
            "Pourquoi voulez-vous ce poste ?",
            "Pourquoi voulez-vous travailler dans notre entreprise ?",
        ],
    },
    QuestionGroup {
        category: "Expérience",
        questions: &[
            "Décrivez votre expérience professionnelle",
            "Quel a été votre plus grand défi professionnel ?",
            "Parlez-moi d'un projet dont vous êtes fier",
            "Comment gérez-vous le stress ?",
            "Décrivez une situation de conflit que vous avez résolue",
        ],
    },
    QuestionGroup {
        category: "Motivation",
        questions: &[
            "Où vous voyez-vous dans 5 ans ?",
            "Qu'est-ce qui vous motive au travail ?",
            "Pourquoi quittez-vous votre emploi actuel ?",
            "Quelles sont vos attentes salariales ?",
            "Avez-vous des questions sur le poste ?",
        ],
    },
];

pub const INTERVIEW_TIPS: &[TipGroup] = &[
    TipGroup {
        title: "Avant l'entretien",
        tips: &[
            "Recherchez l'entreprise et le poste",
            "Préparez vos réponses aux questions courantes",
            "Préparez vos propres questions",
            "Choisissez une tenue appropriée",
            "Arrivez 10-15 minutes en avance",
        ],
    },
    TipGroup {
        title: "Pendant l'entretien",
        tips: &[
            "Maintenez un contact visuel",
            "Écoutez attentivement les questions",
            "Donnez des exemples concrets",
            "Montrez votre enthousiasme",
            "Posez des questions pertinentes",
        ],
    },
    TipGroup {
        title: "Après l'entretien",
        tips: &[
            "Envoyez un email de remerciement",
            "Faites le bilan de l'entretien",
            "Notez les points à améliorer",
            "Suivez l'évolution de votre candidature",
            "Préparez-vous pour d'éventuels entretiens suivants",
        ],
    },
];

/// Coaching reply for a free-form message, routed on keywords. Falls back
/// to generic STAR-method advice when nothing matches.
pub fn coach_reply(message: &str) -> &'static str {
    let input = message.to_lowercase();

    if input.contains("présent") || input.contains("parlez-moi de vous") {
        return "Excellente question ! Pour bien vous présenter, structurez votre réponse \
                en 3 parties : votre parcours professionnel, vos compétences clés, et \
                pourquoi vous êtes intéressé par ce poste. Gardez votre présentation entre \
                2-3 minutes. Voulez-vous que nous pratiquions ensemble ?";
    }

    if input.contains("stress") || input.contains("pression") {
        return "La gestion du stress est cruciale. Parlez d'une situation concrète où vous \
                avez géré la pression, expliquez votre méthode (priorisation, organisation, \
                communication) et le résultat obtenu. Montrez que vous restez efficace sous \
                pression.";
    }

    if input.contains("défaut") || input.contains("faiblesse") {
        return "Pour parler de vos défauts, choisissez un point d'amélioration réel mais pas \
                rédhibitoire pour le poste. Expliquez surtout les actions que vous prenez pour \
                vous améliorer. Par exemple : \"Je peux parfois être perfectionniste, mais j'ai \
                appris à fixer des priorités et des délais réalistes.\"";
    }

    if input.contains("salaire") || input.contains("rémunération") {
        return "Pour négocier votre salaire, renseignez-vous d'abord sur les standards du \
                marché suisse pour votre poste et région. Donnez une fourchette plutôt qu'un \
                chiffre fixe, et mettez en avant votre valeur ajoutée. En Suisse romande, \
                n'oubliez pas de considérer les avantages (13ème salaire, assurances, etc.).";
    }

    "C'est une excellente question ! Pour bien y répondre, je vous conseille de structurer \
     votre réponse avec des exemples concrets de votre expérience. Utilisez la méthode STAR \
     (Situation, Tâche, Action, Résultat) pour être plus convaincant. Voulez-vous que nous \
     pratiquions cette réponse ensemble ?"
}

/// Opening message for a practice round on a specific question.
pub fn practice_prompt(question: &str) -> String {
    format!(
        "Parfait ! Entraînons-nous avec cette question : \"{}\". Prenez votre temps pour \
         réfléchir et donnez-moi votre réponse. Je vous donnerai ensuite des conseils pour \
         l'améliorer.",
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_routing() {
        assert!(coach_reply("Comment gérer le stress en entretien ?").contains("pression"));
        assert!(coach_reply("Parlez-moi de vous").contains("3 parties"));
        assert!(coach_reply("Quels sont mes défauts ?").contains("point d'amélioration"));
        assert!(coach_reply("Quel salaire demander ?").contains("Suisse romande"));
    }

    #[test]
    fn test_routing_is_case_insensitive() {
        assert_eq!(
            coach_reply("LE STRESS me bloque"),
            coach_reply("le stress me bloque")
        );
    }

    #[test]
    fn test_fallback_uses_star_method() {
        assert!(coach_reply("Que penser des horaires ?").contains("STAR"));
    }

    #[test]
    fn test_guide_content_present() {
        assert_eq!(COMMON_QUESTIONS.len(), 3);
        assert_eq!(INTERVIEW_TIPS.len(), 3);
        assert!(practice_prompt("Parlez-moi de vous").contains("Parlez-moi de vous"));
    }
}
