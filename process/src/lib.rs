//! # Directory Processing
//!
//! Pulls the organization sheet, cleans it up and rewrites the local
//! directory file the site publishes.
//!
//! ## Pipeline
//! 1. Read the current `directory.json` so we can report what changed.
//! 2. Fetch the configured range from the sheets values endpoint. Rows are
//!    `name | domain | aliases`, one organization each.
//! 3. Sanitize every row: collapse junk in names, reduce domain cells to a
//!    bare host, normalize the alias list so it is lowercase, deduped and
//!    led by the organization name. Rows without a plausible domain are
//!    dropped.
//! 4. Rebuild the list in sheet order (the sheet is the canonical sort),
//!    first row wins on duplicate domains.
//! 5. Write the file back with a fresh timestamp.

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

pub mod models;
pub mod utils;

use directory::{Directory, Organization, is_plausible_domain, try_get_directory, write_directory};
use models::{SHEETS_ENDPOINT, ValueRange};
use utils::{sanitize_domain, sanitize_name, sanitize_search_terms};

pub async fn load_organizations(sheet_id: &str, range: &str, api_key: &str) {
    let previous = try_get_directory().unwrap_or_else(Directory::empty);

    println!("Loaded Organizations: {}\n", previous.organizations.len());

    let client = Client::new();
    let rows = fetch_rows(&client, sheet_id, range, api_key).await;

    println!("Fetched Rows: {}\n", rows.len());

    let (organizations, new_entries, updated) = rebuild(&previous, &rows);

    if new_entries == 0 && updated == 0 {
        println!("No new or changed organizations found.");
    } else {
        println!("New Organizations: {}", new_entries);
        println!("Updated Organizations: {}", updated);
    }
    println!("Total Organizations: {}", organizations.len());

    write_directory(&Directory {
        fetched_at: Utc::now(),
        organizations,
    });
}

async fn fetch_rows(client: &Client, sheet_id: &str, range: &str, api_key: &str) -> Vec<Vec<String>> {
    let url = format!("{SHEETS_ENDPOINT}/{sheet_id}/values/{range}");
    let res = client
        .get(&url)
        .query(&[("key", api_key)])
        .send()
        .await
        .unwrap();

    #[cfg(feature = "verbose")]
    println!("Status: {}\n", res.status());

    let value_range: ValueRange = res.json().await.unwrap();

    value_range.values
}

fn rebuild(
    previous: &Directory,
    rows: &[Vec<String>],
) -> (Vec<Organization>, usize, usize) {
    let pb = ProgressBar::new(rows.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    let mut organizations: Vec<Organization> = Vec::new();
    let mut new_entries = 0;
    let mut updated = 0;

    for row in rows {
        pb.inc(1);

        let Some(organization) = organization_from_row(row) else {
            continue;
        };

        // first row wins on duplicate domains
        if organizations.iter().any(|o| o.url == organization.url) {
            continue;
        }

        match previous
            .organizations
            .iter()
            .find(|o| o.url == organization.url)
        {
            None => {
                #[cfg(feature = "verbose")]
                println!("New organization! {}", organization.name);

                new_entries += 1;
            }
            Some(old) if *old != organization => updated += 1,
            Some(_) => {}
        }

        organizations.push(organization);
    }

    pb.finish_with_message("Done");

    (organizations, new_entries, updated)
}

pub fn organization_from_row(row: &[String]) -> Option<Organization> {
    let name = sanitize_name(row.first()?);
    let url = sanitize_domain(row.get(1)?);

    if name.is_empty() || !is_plausible_domain(&url) {
        return None;
    }

    let aliases = row.get(2).map(String::as_str).unwrap_or("");

    Some(Organization {
        search_terms: sanitize_search_terms(&name, aliases),
        name,
        url,
    })
}
