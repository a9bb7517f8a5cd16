use crate::infra::ProfileArgs;
use crate::render::{render_report, render_screen};
use clap::Args;
use covoimmo::workflows::colocation::{
    ListingCatalog, ListingId, SessionService, Transition, Trigger,
};
use std::io::{self, Write};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Listing to open (defaults to the first search result)
    #[arg(long)]
    pub(crate) listing: Option<String>,
    /// Message to send to the co-tenants; repeat for several
    #[arg(long = "message")]
    pub(crate) messages: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Emit the search results as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ContractArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Listing whose location goes into the contract
    #[arg(long)]
    pub(crate) listing: Option<String>,
}

pub(crate) fn run_demo<W, C>(
    out: &mut W,
    mut service: SessionService<C>,
    args: DemoArgs,
) -> io::Result<()>
where
    W: Write,
    C: ListingCatalog + 'static,
{
    let DemoArgs {
        profile,
        listing,
        messages,
    } = args;
    let profile = if profile.is_empty() {
        ProfileArgs::demo_profile()
    } else {
        profile
    };

    writeln!(out, "CovoImmo session demo")?;
    render_screen(out, &service)?;

    step(out, &mut service, Trigger::Continue)?;
    for update in profile.updates() {
        service.set_profile_field(update);
    }
    render_screen(out, &service)?;

    step(out, &mut service, Trigger::Search)?;

    let listing_id = match listing {
        Some(raw) => ListingId::from(raw.as_str()),
        None => match service.catalog().listings().first() {
            Some(first) => first.id.clone(),
            None => {
                writeln!(out, "\nNo listings available; demo stops at the results screen.")?;
                return Ok(());
            }
        },
    };
    if !step(out, &mut service, Trigger::SelectListing { listing_id })? {
        return Ok(());
    }

    if let Some(selected) = service.session().selected_listing().cloned() {
        if let Some(report) = service.compatibility(&selected) {
            writeln!(out, "\nScore breakdown")?;
            render_report(out, &report)?;
        }
    }

    step(out, &mut service, Trigger::Contact)?;
    let messages = if messages.is_empty() {
        vec!["Bonjour ! La chambre est-elle toujours disponible ?".to_string()]
    } else {
        messages
    };
    for message in messages {
        service.send_message(message);
    }
    render_screen(out, &service)?;

    step(out, &mut service, Trigger::Back)?;
    step(out, &mut service, Trigger::GenerateContract)?;
    Ok(())
}

pub(crate) fn run_score<W, C>(
    out: &mut W,
    mut service: SessionService<C>,
    args: ScoreArgs,
) -> io::Result<()>
where
    W: Write,
    C: ListingCatalog + 'static,
{
    for update in args.profile.updates() {
        service.set_profile_field(update);
    }

    let results = service.search_results();
    if args.json {
        let payload = serde_json::to_string_pretty(&results)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        return writeln!(out, "{payload}");
    }

    if results.is_empty() {
        return writeln!(out, "No listings available");
    }

    for row in &results {
        writeln!(out, "[{}] {}", row.listing.id, row.listing.title)?;
        if let Some(report) = service.compatibility(&row.listing.id) {
            render_report(out, &report)?;
        }
    }

    Ok(())
}

pub(crate) fn run_contract<W, C>(
    out: &mut W,
    mut service: SessionService<C>,
    args: ContractArgs,
) -> io::Result<()>
where
    W: Write,
    C: ListingCatalog + 'static,
{
    for update in args.profile.updates() {
        service.set_profile_field(update);
    }

    if let Some(raw) = args.listing {
        service.navigate(Trigger::Continue);
        service.navigate(Trigger::Search);
        let listing_id = ListingId::from(raw.as_str());
        let transition = service.navigate(Trigger::SelectListing {
            listing_id: listing_id.clone(),
        });
        if !transition.is_moved() {
            writeln!(
                out,
                "Listing '{listing_id}' not found; using the location placeholder."
            )?;
        }
    }

    let text = service.generate_contract();
    writeln!(out, "{text}")
}

/// Dispatches a trigger and redraws. Returns whether the session moved.
fn step<W, C>(out: &mut W, service: &mut SessionService<C>, trigger: Trigger) -> io::Result<bool>
where
    W: Write,
    C: ListingCatalog + 'static,
{
    let label = trigger.label();
    match service.navigate(trigger) {
        Transition::Moved { .. } => {
            render_screen(out, service)?;
            Ok(true)
        }
        Transition::Ignored { step, reason } => {
            writeln!(
                out,
                "\n{label} ignored on {} ({})",
                step.label(),
                reason.label()
            )?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covoimmo::workflows::listings::sample_catalog;
    use std::sync::Arc;

    fn service() -> SessionService<covoimmo::workflows::colocation::StaticCatalog> {
        SessionService::new(Arc::new(sample_catalog()))
    }

    fn output_of<F>(run: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        run(&mut buffer).expect("command succeeds");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn demo_walks_to_the_contract() {
        let output = output_of(|out| run_demo(out, service(), DemoArgs::default()));

        assert!(output.contains("== Résultats =="));
        assert!(output.contains("Compatibilité : 100%"));
        assert!(output.contains("moi: Bonjour !"));
        assert!(output.contains("== Contrat de co-location =="));
        assert!(output.contains("- Ana, âgé(e) de 25 ans"));
    }

    #[test]
    fn demo_stops_on_unknown_listing() {
        let args = DemoArgs {
            listing: Some("42".to_string()),
            ..DemoArgs::default()
        };

        let output = output_of(|out| run_demo(out, service(), args));
        assert!(output.contains("select_listing ignored on results (unknown_listing)"));
        assert!(!output.contains("== Contrat de co-location =="));
    }

    #[test]
    fn score_json_lists_every_listing() {
        let args = ScoreArgs {
            json: true,
            ..ScoreArgs::default()
        };

        let output = output_of(|out| run_score(out, service(), args));
        let rows: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(rows[0]["score"], 90);
        assert_eq!(rows[0]["listing"]["localisation"], "Liège centre");
    }

    #[test]
    fn contract_without_listing_keeps_placeholders() {
        let output = output_of(|out| run_contract(out, service(), ContractArgs::default()));
        assert!(output.contains("- [Nom], âgé(e) de [Âge] ans"));
        assert!(output.contains("situé à [Localisation] \n"));
    }

    #[test]
    fn contract_with_listing_fills_location() {
        let args = ContractArgs {
            listing: Some("1".to_string()),
            ..ContractArgs::default()
        };

        let output = output_of(|out| run_contract(out, service(), args));
        assert!(output.contains("situé à Liège centre \n"));
    }
}
