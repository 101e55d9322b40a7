// src/bin/drive_tool.rs
// Interactive maintenance tool for the drive folder backing the image fields.
// Orphaned uploads accumulate when rows are deleted from the admin panel;
// this is how they get listed and cleaned up.

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::io::{self, BufRead, Write};

// --- ANSI colors for the terminal ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const DRIVE_BASE_URL: &str = "https://www.googleapis.com/drive/v3";

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
    name: Option<String>,
    #[serde(rename = "mimeType")]
    mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

async fn list_files(client: &Client, api_key: &str, folder: Option<&str>) -> Result<Vec<DriveFile>> {
    let mut params = vec![
        ("key".to_string(), api_key.to_string()),
        ("fields".to_string(), "files(id,name,mimeType)".to_string()),
    ];
    if let Some(folder) = folder {
        params.push(("q".to_string(), format!("'{}' in parents", folder)));
    }

    let response = client
        .get(format!("{}/files", DRIVE_BASE_URL))
        .query(&params)
        .send()
        .await
        .context("drive listing request failed")?;

    if !response.status().is_success() {
        bail!("drive listing failed with status {}", response.status());
    }

    let listing: DriveFileList = response.json().await.context("malformed drive listing")?;
    Ok(listing.files)
}

async fn delete_file(client: &Client, api_key: &str, file_id: &str) -> Result<()> {
    let response = client
        .delete(format!("{}/files/{}", DRIVE_BASE_URL, file_id))
        .query(&[("key", api_key)])
        .send()
        .await
        .context("drive delete request failed")?;

    if !response.status().is_success() {
        bail!("delete of {} failed with status {}", file_id, response.status());
    }
    Ok(())
}

fn print_files(files: &[DriveFile]) {
    if files.is_empty() {
        println!("{}  (no files){}", YELLOW, RESET);
        return;
    }
    for file in files {
        println!(
            "  {}{}{}  {}  {}",
            CYAN,
            file.id,
            RESET,
            file.name.as_deref().unwrap_or("(unnamed)"),
            file.mime_type.as_deref().unwrap_or("")
        );
    }
    println!("{}{} files{}", BOLD, files.len(), RESET);
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let api_key = env::var("DRIVE_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        eprintln!("{}DRIVE_API_KEY is not set{}", RED, RESET);
        std::process::exit(1);
    }

    let client = Client::new();

    println!("{}Available commands: list [folder], delete <id> <id>...{}", BOLD, RESET);
    print!("> ");
    io::stdout().flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let arr: Vec<&str> = line.split_whitespace().collect();

        match arr.first().copied() {
            Some("list") => {
                let files = list_files(&client, &api_key, arr.get(1).copied()).await?;
                print_files(&files);
            }
            Some("delete") if arr.len() > 1 => {
                for item in &arr[1..] {
                    delete_file(&client, &api_key, item).await?;
                    println!("{}deleted {}{}", GREEN, item, RESET);
                }
                // Show what is left after the cleanup
                let files = list_files(&client, &api_key, None).await?;
                print_files(&files);
            }
            Some(other) => {
                eprintln!("{}unknown command: {}{}", RED, other, RESET);
            }
            None => break,
        }

        print!("> ");
        io::stdout().flush()?;
    }

    Ok(())
}
