// Fetches all-MiniLM-L6-v2 and its tokenizer into the model directory.
// The default directory lives under the platform data dir so the ~90 MB
// download happens once per machine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

const EMBEDDING_HF_URL: &str =
    "https://huggingface.co/sentence-transformers/all-MiniLM-L6-v2/resolve/main";

pub const MODEL_FILE: &str = "model.onnx";
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// A file to fetch: path in the HuggingFace repo, local name, and whether it
/// is big enough to deserve a progress bar.
struct Artifact {
    remote: &'static str,
    local: &'static str,
    large: bool,
}

const ARTIFACTS: [Artifact; 2] = [
    Artifact {
        remote: "tokenizer.json",
        local: TOKENIZER_FILE,
        large: false,
    },
    Artifact {
        remote: "onnx/model.onnx",
        local: MODEL_FILE,
        large: true,
    },
];

/// `~/.local/share/newsprobe/models/` on Linux, `./newsprobe/models` when
/// the platform has no data dir.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("newsprobe")
        .join("models")
}

/// True when every artifact the ONNX embedder needs is on disk.
pub fn model_files_present(dir: &Path) -> bool {
    ARTIFACTS.iter().all(|a| dir.join(a.local).exists())
}

/// Fetch whichever artifacts are missing from `dir`.
pub async fn download_model(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create model directory: {}", dir.display()))?;

    println!("\nSentence embedding model (all-MiniLM-L6-v2):");

    for artifact in &ARTIFACTS {
        let dest = dir.join(artifact.local);
        if dest.exists() {
            info!(file = artifact.local, "Already present, skipping");
            println!("  {} (already exists)", artifact.local);
            continue;
        }
        if artifact.large {
            println!("  Downloading {} (~90 MB)...", artifact.local);
        } else {
            println!("  Downloading {}...", artifact.local);
        }
        let url = format!("{}/{}", EMBEDDING_HF_URL, artifact.remote);
        download_file(&url, &dest, artifact.large).await?;
    }

    Ok(())
}

async fn download_file(url: &str, dest: &Path, show_progress: bool) -> Result<()> {
    let response = reqwest::Client::new()
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let pb = if show_progress {
        Some(progress_bar(response.content_length())?)
    } else {
        None
    };

    let bytes = response
        .bytes()
        .await
        .context("Failed to read response body")?;

    if let Some(ref pb) = pb {
        pb.set_position(bytes.len() as u64);
    }

    // model_files_present() only checks existence, so never leave a
    // truncated file under the final name.
    let partial = dest.with_extension("partial");
    std::fs::write(&partial, &bytes)
        .with_context(|| format!("Failed to write {}", partial.display()))?;
    std::fs::rename(&partial, dest)
        .with_context(|| format!("Failed to move download into {}", dest.display()))?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    info!(bytes = bytes.len(), "Downloaded {} to {}", url, dest.display());
    Ok(())
}

fn progress_bar(total_size: Option<u64>) -> Result<ProgressBar> {
    let pb = match total_size {
        Some(size) => {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")?
                    .progress_chars("=> "),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::default_spinner().template("    {spinner} {bytes}")?);
            pb
        }
    };
    Ok(pb)
}
