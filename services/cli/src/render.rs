use covoimmo::workflows::colocation::{
    CompatibilityReport, ListingCatalog, Sender, SessionService, SessionSnapshot, Step,
};
use std::io::{self, Write};

pub(crate) fn render_screen<W, C>(out: &mut W, service: &SessionService<C>) -> io::Result<()>
where
    W: Write,
    C: ListingCatalog + 'static,
{
    let snapshot = service.snapshot();
    writeln!(out, "\n== {} ==", screen_title(snapshot.step))?;

    match snapshot.step {
        Step::Home => {
            writeln!(out, "Habiter autrement, ensemble.")?;
            writeln!(out, "Que cherchez-vous ? -> continue")?;
        }
        Step::Profile => render_profile(out, &snapshot)?,
        Step::Results => {
            for row in service.search_results() {
                writeln!(out, "- [{}] {}", row.listing.id, row.listing.title)?;
                if !row.listing.description.is_empty() {
                    writeln!(out, "  {}", row.listing.description)?;
                }
                writeln!(out, "  Compatibilité : {}%", row.score)?;
            }
        }
        Step::Details => render_details(out, &snapshot)?,
        Step::Chat => {
            if snapshot.messages.is_empty() {
                writeln!(out, "(aucun message)")?;
            }
            for message in &snapshot.messages {
                let author = match message.from {
                    Sender::Me => "moi",
                    Sender::Other => "colocataire",
                };
                writeln!(out, "{author}: {}", message.text)?;
            }
            if !snapshot.new_message_draft.is_empty() {
                writeln!(out, "brouillon: {}", snapshot.new_message_draft)?;
            }
        }
        Step::Contract => writeln!(out, "{}", snapshot.contract_text)?,
    }

    Ok(())
}

fn render_profile<W: Write>(out: &mut W, snapshot: &SessionSnapshot) -> io::Result<()> {
    let profile = &snapshot.profile;
    writeln!(out, "Nom complet : {}", profile.name)?;
    writeln!(out, "Âge : {}", profile.age)?;
    writeln!(out, "Style de vie : {}", profile.lifestyle)?;
    writeln!(out, "J'ai des animaux : {}", yes_no(profile.pets))?;
    writeln!(out, "Je fume : {}", yes_no(profile.smoker))
}

fn render_details<W: Write>(out: &mut W, snapshot: &SessionSnapshot) -> io::Result<()> {
    let Some(listing) = &snapshot.selected_listing else {
        return Ok(());
    };

    writeln!(out, "{}", listing.title)?;
    if !listing.description.is_empty() {
        writeln!(out, "{}", listing.description)?;
    }
    writeln!(out, "Photos : {}", listing.photos.len())?;
    writeln!(out, "Colocataires actuels :")?;
    for tenant in &listing.co_tenants {
        writeln!(out, "- {}, {} ans", tenant.name, tenant.age)?;
    }
    writeln!(out, "Localisation : {}", listing.location)?;
    writeln!(out, "-> contact | generate | back")
}

pub(crate) fn render_report<W: Write>(out: &mut W, report: &CompatibilityReport) -> io::Result<()> {
    if report.raw_score != i16::from(report.score) {
        writeln!(
            out,
            "  Compatibilité : {}% (brut {})",
            report.score, report.raw_score
        )?;
    } else {
        writeln!(out, "  Compatibilité : {}%", report.score)?;
    }

    for component in &report.components {
        writeln!(
            out,
            "    {:+} {}: {}",
            component.points,
            component.factor.label(),
            component.notes
        )?;
    }

    Ok(())
}

fn screen_title(step: Step) -> &'static str {
    match step {
        Step::Home => "CovoImmo",
        Step::Profile => "Mon profil",
        Step::Results => "Résultats",
        Step::Details => "Annonce",
        Step::Chat => "Messagerie",
        Step::Contract => "Contrat de co-location",
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "oui"
    } else {
        "non"
    }
}
