use std::{
    io::{BufRead, Write, stdin, stdout},
    sync::Arc,
    time::Duration,
};

use directory::{Loader, get_directory};
use optout::{
    session::{SearchSession, SearchStatus},
    tracking::Tracker,
};
use reqwest::Client;

// Drives the search session from stdin against the local directory file.
#[tokio::main]
async fn main() {
    let directory = get_directory();
    println!("Organizations: {}", directory.organizations.len());

    let loader = Arc::new(Loader::new());
    loader
        .get_or_fetch(|| async { Ok(directory.organizations) })
        .await
        .unwrap();

    let tracker = Tracker::new(Client::new(), None);
    let mut session = SearchSession::new(loader, tracker, Duration::from_millis(100));

    print!("> ");
    stdout().flush().unwrap();

    for line in stdin().lock().lines() {
        session.input(line.unwrap().trim());

        match session.status() {
            SearchStatus::Loading => println!("(still loading)"),
            SearchStatus::Ready([]) => println!("No matches"),
            SearchStatus::Ready(results) => {
                for (i, organization) in results.iter().enumerate() {
                    println!(
                        "{i}: {} ({}) -> {}",
                        organization.name,
                        organization.url,
                        organization.detail_path()
                    );
                }
            }
        }

        print!("> ");
        stdout().flush().unwrap();
    }
}
