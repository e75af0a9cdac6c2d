use rayon::prelude::*;

use crate::{
    foundation::error::{PosterError, PosterResult},
    foundation::options::{PosterOptions, ResolvedOptions},
    layout::engine::{Drawing, layout_drawing},
    params::derive::{PosterParams, derive_params},
    render::fingerprint::{DrawingFingerprint, fingerprint_drawing},
    stream::bytes::ByteStream,
    svg::writer::write_document,
};

/// Every intermediate of one generation run.
#[derive(Clone, Debug)]
pub struct Poster {
    pub seed: String,
    pub params: PosterParams,
    pub drawing: Drawing,
    pub fingerprint: DrawingFingerprint,
    /// Serialized SVG text.
    pub document: String,
}

/// Generate the SVG document for `seed` on a `size` x `size` canvas with `cells` per axis.
///
/// Pure: the same arguments give the same text on every call, process and machine.
pub fn generate(seed: &str, size: u32, cells: u32) -> PosterResult<String> {
    let opts = PosterOptions::default().with_size(size).with_cells(cells);
    generate_with(seed, &opts)
}

/// [`generate`] with the full option set.
pub fn generate_with(seed: &str, opts: &PosterOptions) -> PosterResult<String> {
    render_poster(seed, opts).map(|poster| poster.document)
}

/// Run the whole pipeline and keep the intermediates.
///
/// Options are validated before any byte is derived, so an error never comes with
/// partial output.
#[tracing::instrument(skip(seed, opts), fields(seed_len = seed.len()))]
pub fn render_poster(seed: &str, opts: &PosterOptions) -> PosterResult<Poster> {
    let resolved = opts.resolve()?;
    Ok(render_resolved(seed, &resolved))
}

/// Render many seeds on a dedicated thread pool.
///
/// Runs share no state, so the result equals rendering each seed in turn; output order
/// follows `seeds`.
pub fn render_batch<S>(
    seeds: &[S],
    opts: &PosterOptions,
    threads: Option<usize>,
) -> PosterResult<Vec<Poster>>
where
    S: AsRef<str> + Sync,
{
    let resolved = opts.resolve()?;
    let pool = build_thread_pool(threads)?;
    tracing::debug!(seeds = seeds.len(), threads = pool.current_num_threads(), "rendering batch");
    Ok(pool.install(|| {
        seeds
            .par_iter()
            .map(|seed| render_resolved(seed.as_ref(), &resolved))
            .collect()
    }))
}

fn render_resolved(seed: &str, opts: &ResolvedOptions) -> Poster {
    let mut stream = ByteStream::new(seed);
    let params = derive_params(&mut stream, opts);
    let drawing = layout_drawing(&params);
    let fingerprint = fingerprint_drawing(&drawing);
    let document = write_document(&drawing);
    tracing::debug!(%fingerprint, bytes = document.len(), "rendered poster");
    Poster {
        seed: seed.to_string(),
        params,
        drawing,
        fingerprint,
        document,
    }
}

fn build_thread_pool(threads: Option<usize>) -> PosterResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PosterError::validation(
            "batch 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PosterError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
