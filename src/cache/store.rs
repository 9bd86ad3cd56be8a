use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::cache::source::AssetSource;
use crate::config::{GENERATION_META_FILENAME, STAGING_SUFFIX};

/// Metadata written into a generation directory as the final step of an
/// install. Its presence is the commit marker: a directory without it never
/// finished installing.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GenerationMeta {
    pub name: String,
    pub installed_at_ms: i64,
    pub assets: Vec<String>,
}

/// On-disk store of named asset generations.
///
/// Layout under `root`:
///   `<generation>/`          committed generation (holds generation.json)
///   `<generation>.staging/`  in-flight install, swept on the next pass
///
/// Installs stage into the `.staging` directory and commit with a single
/// rename, so readers only ever see complete generations.
pub struct GenerationStore {
    root: PathBuf,
}

impl GenerationStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn generation_dir(&self, generation: &str) -> PathBuf {
        self.root.join(generation)
    }

    fn staging_dir(&self, generation: &str) -> PathBuf {
        self.root.join(format!("{generation}{STAGING_SUFFIX}"))
    }

    /// A generation counts as installed once its commit marker exists.
    pub async fn is_installed(&self, generation: &str) -> bool {
        let marker = self.generation_dir(generation).join(GENERATION_META_FILENAME);
        tokio::fs::try_exists(&marker).await.unwrap_or(false)
    }

    /// Install `generation` from `source`. All-or-nothing: every manifest
    /// entry is fetched before anything is written, the generation only
    /// becomes visible with the final rename, and a failed attempt removes
    /// its staging directory. Returns true when this call fetched and
    /// committed the generation; an already-installed generation returns
    /// false without touching the source.
    pub async fn install(
        &self,
        source: &dyn AssetSource,
        generation: &str,
        manifest: &[&str],
    ) -> Result<bool> {
        // Manifest paths are joined under the staging directory, so they
        // must not be able to step outside it.
        if let Some(bad) = manifest.iter().find(|p| !is_safe_relative_path(p)) {
            bail!("Manifest path escapes the generation directory: {bad}");
        }
        if self.is_installed(generation).await {
            return Ok(false);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_install_progress {
            log::info!(
                "[cache] installing '{generation}' ({} assets) via {}",
                manifest.len(),
                source.signature()
            );
        }

        // Fetch everything up front; one failure aborts the install with
        // nothing written.
        let fetches = manifest.iter().map(|path| source.fetch(path));
        let all_bytes = futures::future::try_join_all(fetches)
            .await
            .context(format!("Install of '{generation}' aborted"))?;

        let staging = self.staging_dir(generation);
        // A crash can leave a previous staging attempt behind.
        if tokio::fs::try_exists(&staging).await.unwrap_or(false) {
            tokio::fs::remove_dir_all(&staging)
                .await
                .context("Failed to clear stale staging directory")?;
        }

        let committed = self
            .commit_via_staging(&staging, generation, manifest, &all_bytes)
            .await;
        if committed.is_err() {
            // Leave no trace of the failed attempt.
            let _ = tokio::fs::remove_dir_all(&staging).await;
        }
        committed?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_install_progress {
            log::info!("[cache] installed '{generation}'");
        }
        Ok(true)
    }

    async fn commit_via_staging(
        &self,
        staging: &Path,
        generation: &str,
        manifest: &[&str],
        all_bytes: &[Vec<u8>],
    ) -> Result<()> {
        tokio::fs::create_dir_all(staging)
            .await
            .context(format!("Failed to create staging directory {staging:?}"))?;

        for (path, bytes) in manifest.iter().zip(all_bytes) {
            let target = staging.join(path);
            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .context(format!("Failed to create directory {parent:?}"))?;
            }
            tokio::fs::write(&target, bytes)
                .await
                .context(format!("Failed to write staged asset {target:?}"))?;
        }

        let meta = GenerationMeta {
            name: generation.to_string(),
            installed_at_ms: Utc::now().timestamp_millis(),
            assets: manifest.iter().map(|s| s.to_string()).collect(),
        };
        let meta_json =
            serde_json::to_vec_pretty(&meta).context("Failed to serialize generation metadata")?;
        tokio::fs::write(staging.join(GENERATION_META_FILENAME), meta_json)
            .await
            .context("Failed to write generation metadata")?;

        // The rename is the commit point.
        tokio::fs::rename(staging, self.generation_dir(generation))
            .await
            .context(format!("Failed to commit generation '{generation}'"))
    }

    /// Make `current` the only generation on disk: every sibling directory,
    /// committed or staging, is deleted. Returns how many were removed.
    pub async fn activate(&self, current: &str) -> Result<usize> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            // No cache root yet means nothing to prune.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(e).context(format!("Failed to read cache root {:?}", self.root));
            }
        };

        let mut removed = 0usize;
        while let Some(entry) = entries
            .next_entry()
            .await
            .context("Failed to walk cache root")?
        {
            let file_type = entry
                .file_type()
                .await
                .context("Failed to stat cache root entry")?;
            if !file_type.is_dir() {
                continue;
            }
            let name = entry.file_name();
            if name.to_string_lossy() == current {
                continue;
            }
            tokio::fs::remove_dir_all(entry.path())
                .await
                .context(format!("Failed to remove stale generation {name:?}"))?;
            removed += 1;
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_install_progress {
                log::info!("[cache] pruned stale generation {name:?}");
            }
        }
        Ok(removed)
    }

    /// Read one asset from a committed generation. Every kind of miss is
    /// `None`; the caller decides whether to go to the network.
    pub async fn lookup(&self, generation: &str, path: &str) -> Option<Vec<u8>> {
        if !is_safe_relative_path(path) {
            return None;
        }
        let file = self.generation_dir(generation).join(path);
        tokio::fs::read(file).await.ok()
    }

    pub async fn read_meta(&self, generation: &str) -> Result<GenerationMeta> {
        let path = self.generation_dir(generation).join(GENERATION_META_FILENAME);
        let bytes = tokio::fs::read(&path)
            .await
            .context(format!("Failed to read generation metadata {path:?}"))?;
        serde_json::from_slice(&bytes).context("Failed to parse generation metadata")
    }

    /// Delete a committed generation if present. Used by the refresh flag to
    /// force a clean reinstall.
    pub async fn remove(&self, generation: &str) -> Result<()> {
        let dir = self.generation_dir(generation);
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context(format!("Failed to remove generation {dir:?}")),
        }
    }
}

// Lookup paths can come from a fetched catalog, so refuse anything that
// could step outside the generation directory.
fn is_safe_relative_path(path: &str) -> bool {
    use std::path::Component;
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::testing::MockSource;

    const MANIFEST: &[&str] = &["modules.json", "assets/icon.png"];

    fn mock_with_manifest() -> MockSource {
        let source = MockSource::default();
        source.insert("modules.json", b"[]".to_vec());
        source.insert("assets/icon.png", vec![0x89, 0x50, 0x4e, 0x47]);
        source
    }

    #[tokio::test]
    async fn install_commits_all_assets_and_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let store = GenerationStore::new(dir.path());
        let source = mock_with_manifest();

        assert!(store.install(&source, "gen-v1", MANIFEST).await.unwrap());

        assert!(store.is_installed("gen-v1").await);
        assert_eq!(
            store.lookup("gen-v1", "modules.json").await.unwrap(),
            b"[]"
        );
        assert_eq!(
            store.lookup("gen-v1", "assets/icon.png").await.unwrap(),
            vec![0x89, 0x50, 0x4e, 0x47]
        );

        let meta = store.read_meta("gen-v1").await.unwrap();
        assert_eq!(meta.name, "gen-v1");
        assert_eq!(meta.assets, MANIFEST);
        assert!(meta.installed_at_ms > 0);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = GenerationStore::new(dir.path());
        let source = mock_with_manifest();
        source.fail_on("assets/icon.png");

        let result = store.install(&source, "gen-v1", MANIFEST).await;
        assert!(result.is_err());

        assert!(!store.is_installed("gen-v1").await);
        assert_eq!(store.lookup("gen-v1", "modules.json").await, None);
        // No staging directory survives a failed install either.
        assert!(!dir.path().join("gen-v1.staging").exists());
    }

    #[tokio::test]
    async fn install_rejects_manifest_paths_that_escape() {
        let dir = tempfile::tempdir().unwrap();
        let store = GenerationStore::new(dir.path());
        let source = mock_with_manifest();

        let result = store.install(&source, "gen-v1", &["../evil.bin"]).await;
        assert!(result.is_err());
        // Rejected before anything was fetched or written.
        assert_eq!(source.fetch_count(), 0);
        assert!(!store.is_installed("gen-v1").await);
        assert!(!dir.path().join("gen-v1.staging").exists());
    }

    #[tokio::test]
    async fn reinstall_of_committed_generation_skips_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let store = GenerationStore::new(dir.path());
        let source = mock_with_manifest();

        assert!(store.install(&source, "gen-v1", MANIFEST).await.unwrap());
        let fetches_after_first = source.fetch_count();

        // The warm pass reports that it fetched nothing.
        assert!(!store.install(&source, "gen-v1", MANIFEST).await.unwrap());
        assert_eq!(source.fetch_count(), fetches_after_first);
    }

    #[tokio::test]
    async fn activate_prunes_every_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let store = GenerationStore::new(dir.path());
        let source = mock_with_manifest();

        store.install(&source, "gen-v1", MANIFEST).await.unwrap();
        store.install(&source, "gen-v2", MANIFEST).await.unwrap();
        // Simulate a crashed install of some third generation.
        std::fs::create_dir_all(dir.path().join("gen-v3.staging")).unwrap();

        let removed = store.activate("gen-v2").await.unwrap();
        assert_eq!(removed, 2);

        assert!(!store.is_installed("gen-v1").await);
        assert!(store.is_installed("gen-v2").await);
        assert!(!dir.path().join("gen-v3.staging").exists());
    }

    #[tokio::test]
    async fn activate_with_no_cache_root_is_a_clean_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let store = GenerationStore::new(dir.path().join("never_created"));
        assert_eq!(store.activate("gen-v1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn lookup_refuses_paths_that_escape_the_generation() {
        let dir = tempfile::tempdir().unwrap();
        let store = GenerationStore::new(dir.path());
        let source = mock_with_manifest();
        store.install(&source, "gen-v1", MANIFEST).await.unwrap();

        assert_eq!(store.lookup("gen-v1", "../gen-v1/modules.json").await, None);
        assert_eq!(store.lookup("gen-v1", "/etc/hostname").await, None);
        assert_eq!(store.lookup("gen-v1", "").await, None);
    }

    #[tokio::test]
    async fn remove_then_install_refreshes_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = GenerationStore::new(dir.path());

        let source = mock_with_manifest();
        store.install(&source, "gen-v1", MANIFEST).await.unwrap();

        let updated = mock_with_manifest();
        updated.insert("modules.json", b"[{}]".to_vec());

        // Without a remove the committed copy wins.
        store.install(&updated, "gen-v1", MANIFEST).await.unwrap();
        assert_eq!(store.lookup("gen-v1", "modules.json").await.unwrap(), b"[]");

        store.remove("gen-v1").await.unwrap();
        store.install(&updated, "gen-v1", MANIFEST).await.unwrap();
        assert_eq!(
            store.lookup("gen-v1", "modules.json").await.unwrap(),
            b"[{}]"
        );
    }
}
