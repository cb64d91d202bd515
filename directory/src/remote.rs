use anyhow::Error;
use reqwest::Client;

use crate::Directory;

pub const REMOTE_DIRECTORY_PATH: &str =
    "https://github.com/yourdigitalrights/data/raw/refs/heads/main/directory.json";

pub async fn get_directory_remote(client: &Client, url: &str) -> Result<Directory, Error> {
    let response = client.get(url).send().await?;
    let directory = response.error_for_status()?.json().await?;

    Ok(directory)
}
