use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use log::{debug, info};

use feed::{find_image, plain_text, FeedItem, ItemSummary};

use crate::{Error, Result};

#[derive(Debug, Default)]
pub struct ExtractOptions {
    // Input file, when not given standard input is read.
    pub file: Option<PathBuf>,
    // Print summaries as JSON.
    pub json: bool,
}

fn read_input(file: &Option<PathBuf>) -> Result<String> {
    if let Some(ref path) = file {
        debug!("read {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

fn parse_items(content: &str) -> Result<Vec<FeedItem>> {
    if content.trim().is_empty() {
        return Err(Error::new("no feed items in input".to_string()));
    }
    Ok(FeedItem::parse_many(content)?)
}

/// Write one image URL per item, an empty line when an item has no image.
pub fn write_images<W: Write>(content: &str, out: &mut W) -> Result<usize> {
    let items = parse_items(content)?;
    let mut found = 0;
    for item in items.iter() {
        let url = find_image(item);
        if !url.is_empty() {
            found += 1;
        }
        writeln!(out, "{}", url)?;
    }
    info!("found {} image(s) in {} item(s)", found, items.len());
    Ok(items.len())
}

pub fn write_text<W: Write>(content: &str, out: &mut W) -> Result<()> {
    writeln!(out, "{}", plain_text(content))?;
    Ok(())
}

pub fn write_summaries<W: Write>(
    content: &str,
    json: bool,
    out: &mut W,
) -> Result<usize> {
    let items = parse_items(content)?;
    let summaries: Vec<ItemSummary> =
        items.iter().map(ItemSummary::from_item).collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &summaries)?;
        writeln!(out)?;
    } else {
        for (i, summary) in summaries.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", summary)?;
            if let Some(ref image) = summary.image {
                writeln!(out, "[{}]", image)?;
            }
        }
    }
    Ok(summaries.len())
}

pub fn image(opts: ExtractOptions) -> Result<()> {
    let content = read_input(&opts.file)?;
    write_images(&content, &mut io::stdout().lock())?;
    Ok(())
}

pub fn text(opts: ExtractOptions) -> Result<()> {
    let content = read_input(&opts.file)?;
    write_text(&content, &mut io::stdout().lock())
}

pub fn summary(opts: ExtractOptions) -> Result<()> {
    let content = read_input(&opts.file)?;
    write_summaries(&content, opts.json, &mut io::stdout().lock())?;
    Ok(())
}
