use serde::Serialize;
use tracing::info;

use crate::models::candidate::{Candidate, CandidateStatus};

pub const DEFAULT_REJECTION_TEMPLATE: &str = "Bonjour,

Nous vous remercions pour votre candidature et l'intérêt que vous portez à notre entreprise.

Après avoir examiné attentivement votre profil, nous regrettons de vous informer que nous ne pourrons pas donner suite à votre candidature pour ce poste.

Cette décision ne remet nullement en cause vos compétences et qualifications. Nous vous encourageons à postuler pour d'autres opportunités qui pourraient correspondre davantage à votre profil.

Nous vous souhaitons plein succès dans vos recherches.

Cordialement,
L'équipe de recrutement";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NotificationReport {
    pub sent: usize,
    pub recipients: Vec<String>,
}

/// "Sends" the rejection template to every rejected candidate.
///
/// No mail is delivered; each notice is a structured log event.
pub fn send_rejection_notices(candidates: &[Candidate], template: &str) -> NotificationReport {
    let recipients: Vec<String> = candidates
        .iter()
        .filter(|c| c.status == CandidateStatus::Rejected)
        .map(|c| {
            info!(
                candidate_id = %c.id,
                email = %c.email,
                template_chars = template.chars().count(),
                "Rejection email sent"
            );
            c.email.clone()
        })
        .collect();

    info!(sent = recipients.len(), "Rejection notices dispatched");

    NotificationReport {
        sent: recipients.len(),
        recipients,
    }
}
