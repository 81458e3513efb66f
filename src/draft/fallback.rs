//! Offline fallback synthesis
//!
//! Deterministic per-language email skeletons. No external calls; every
//! request that passes validation gets a syntactically complete email,
//! whatever the state of the generation service.

use super::request::{Length, NormalizedRequest};

/// Tone variants carried by each skeleton, indexed by [`tone_index`].
/// Order: professional, casual, friendly.
struct Skeleton {
    code: &'static str,
    /// Greeting with a `{}` slot for the recipient name.
    greeting_named: [&'static str; 3],
    /// Greeting used when no recipient name was given.
    greeting_generic: [&'static str; 3],
    /// Opening sentence with a `{}` slot for the subject.
    opening: &'static str,
    /// Added for medium and long drafts.
    body_medium: &'static str,
    /// Added as an extra paragraph for long drafts.
    body_long: &'static str,
    closing: &'static str,
    signoff: [&'static str; 3],
}

/// The English skeleton doubles as the universal default, so it must
/// always exist independent of the table.
static ENGLISH: Skeleton = Skeleton {
    code: "en",
    greeting_named: ["Dear {},", "Hi {},", "Hello {},"],
    greeting_generic: ["Dear Sir or Madam,", "Hi there,", "Hello,"],
    opening: "I am writing to you regarding \"{}\".",
    body_medium: "I wanted to make sure this reaches you with all the relevant context, and I am happy to provide any further details you might need.",
    body_long: "Please take whatever time you need to consider this. If anything is unclear, do not hesitate to reach out and I will gladly clarify or provide supporting material.",
    closing: "Thank you for your time and consideration.",
    signoff: ["Best regards,", "Cheers,", "Warm regards,"],
};

static SKELETONS: &[&Skeleton] = &[
    &ENGLISH,
    &Skeleton {
        code: "es",
        greeting_named: ["Estimado/a {}:", "¡Hola {}!", "Hola {}:"],
        greeting_generic: ["Estimado/a señor/a:", "¡Hola!", "Hola:"],
        opening: "Le escribo en relación con \"{}\".",
        body_medium: "Quería asegurarme de que le llegue toda la información pertinente; quedo a su disposición para cualquier detalle adicional.",
        body_long: "Tómese el tiempo que necesite para considerarlo. Si algo no queda claro, no dude en escribirme y con gusto se lo aclararé.",
        closing: "Gracias por su tiempo y atención.",
        signoff: ["Atentamente,", "Saludos,", "Un cordial saludo,"],
    },
    &Skeleton {
        code: "fr",
        greeting_named: ["Cher/Chère {},", "Salut {},", "Bonjour {},"],
        greeting_generic: ["Madame, Monsieur,", "Salut,", "Bonjour,"],
        opening: "Je vous écris au sujet de « {} ».",
        body_medium: "Je tenais à vous transmettre tous les éléments utiles ; je reste à votre disposition pour tout complément d'information.",
        body_long: "Prenez le temps qu'il vous faut pour y réfléchir. Si quelque chose n'est pas clair, n'hésitez pas à me contacter, je vous répondrai avec plaisir.",
        closing: "Je vous remercie de votre temps et de votre attention.",
        signoff: ["Cordialement,", "À bientôt,", "Bien à vous,"],
    },
    &Skeleton {
        code: "de",
        greeting_named: ["Sehr geehrte/r {},", "Hi {},", "Hallo {},"],
        greeting_generic: ["Sehr geehrte Damen und Herren,", "Hi,", "Hallo,"],
        opening: "Ich schreibe Ihnen bezüglich \"{}\".",
        body_medium: "Ich wollte sicherstellen, dass Sie alle relevanten Informationen erhalten; für Rückfragen stehe ich jederzeit gern zur Verfügung.",
        body_long: "Nehmen Sie sich gern die Zeit, die Sie brauchen. Sollte etwas unklar sein, melden Sie sich einfach bei mir, ich erläutere es gern genauer.",
        closing: "Vielen Dank für Ihre Zeit und Aufmerksamkeit.",
        signoff: ["Mit freundlichen Grüßen,", "Viele Grüße,", "Herzliche Grüße,"],
    },
    &Skeleton {
        code: "pt",
        greeting_named: ["Prezado(a) {},", "Oi {},", "Olá {},"],
        greeting_generic: ["Prezado(a) senhor(a),", "Oi,", "Olá,"],
        opening: "Escrevo a respeito de \"{}\".",
        body_medium: "Gostaria de garantir que todas as informações relevantes cheguem até você; fico à disposição para qualquer esclarecimento.",
        body_long: "Leve o tempo que precisar para avaliar. Se algo não estiver claro, é só me escrever que esclareço com prazer.",
        closing: "Obrigado pelo seu tempo e atenção.",
        signoff: ["Atenciosamente,", "Abraços,", "Um abraço,"],
    },
    &Skeleton {
        code: "it",
        greeting_named: ["Gentile {},", "Ciao {},", "Salve {},"],
        greeting_generic: ["Gentile Signore/Signora,", "Ciao,", "Salve,"],
        opening: "Le scrivo in merito a \"{}\".",
        body_medium: "Volevo assicurarmi che Le arrivassero tutte le informazioni utili; resto a disposizione per qualsiasi chiarimento.",
        body_long: "Si prenda pure il tempo necessario per valutare. Se qualcosa non fosse chiaro, non esiti a contattarmi e sarò lieto di approfondire.",
        closing: "La ringrazio per il tempo e l'attenzione.",
        signoff: ["Cordiali saluti,", "A presto,", "Un caro saluto,"],
    },
];

/// Signature placeholder appended below the sign-off.
const SIGNATURE: &str = "[Your Name]";

/// Map a tone tag to a skeleton variant index. Unknown tones read as
/// professional.
fn tone_index(tone: &str) -> usize {
    match tone.trim().to_ascii_lowercase().as_str() {
        "casual" => 1,
        "friendly" => 2,
        _ => 0,
    }
}

fn skeleton_for(language: &str) -> &'static Skeleton {
    SKELETONS
        .iter()
        .find(|s| s.code.eq_ignore_ascii_case(language.trim()))
        .copied()
        .unwrap_or(&ENGLISH)
}

/// Synthesize a complete email offline. Pure and deterministic: identical
/// requests always yield identical text.
pub fn synthesize(request: &NormalizedRequest) -> String {
    let skeleton = skeleton_for(&request.language);
    let tone = tone_index(&request.tone);

    let greeting = match &request.recipient {
        Some(name) => skeleton.greeting_named[tone].replace("{}", name),
        None => skeleton.greeting_generic[tone].to_string(),
    };

    let mut body = skeleton.opening.replace("{}", &request.subject);
    if matches!(request.length, Length::Medium | Length::Long) {
        body.push(' ');
        body.push_str(skeleton.body_medium);
    }

    let mut paragraphs = vec![
        format!("Subject: {}", request.subject),
        greeting,
        body,
    ];

    if request.length == Length::Long {
        paragraphs.push(skeleton.body_long.to_string());
    }

    if let Some(note) = &request.personal_note {
        paragraphs.push(note.clone());
    }

    paragraphs.push(skeleton.closing.to_string());
    paragraphs.push(format!("{}\n{}", skeleton.signoff[tone], SIGNATURE));

    paragraphs.join("\n\n")
}
