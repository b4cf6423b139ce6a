//! Asynchronous stroke-font loading.
//!
//! `StrokeFont::load` starts one background thread that parses the font
//! source; the caller never waits at load time. The first query against
//! the font blocks until the parse result lands (serialized through a
//! one-shot `OnceLock` guard), after which every query is a lock-free
//! read of immutable data. A parse failure is reported once through
//! `tracing` and replaced with an empty font; queries never fail.

use crate::format::parse_font;
use crate::resolver::GlyphResolver;
use crate::store::{Font, FontHeader, Polyline, DESIGN_HEIGHT};
use crate::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex, OnceLock};
use std::thread;

/// An opaque font source consumed by the loader.
///
/// File I/O stays outside this crate: implementations hand over either
/// an already-parsed [`Font`], in-memory font text ([`FontData`]), or a
/// deferred computation ([`LazySource`]).
pub trait FontSource: Send + 'static {
    fn load(self) -> Result<Font>;
}

impl FontSource for Font {
    fn load(self) -> Result<Font> {
        Ok(self)
    }
}

/// In-memory FontoBene-style font text.
pub struct FontData(pub String);

impl FontSource for FontData {
    fn load(self) -> Result<Font> {
        parse_font(&self.0)
    }
}

/// A font produced by an arbitrary deferred computation, e.g. a closure
/// reading and parsing a file.
pub struct LazySource<F>(pub F);

impl<F> FontSource for LazySource<F>
where
    F: FnOnce() -> Result<Font> + Send + 'static,
{
    fn load(self) -> Result<Font> {
        (self.0)()
    }
}

/// Callback invoked exactly once when loading resolves, success or
/// failure, e.g. to trigger a repaint once geometry is available.
pub type ReadyCallback = Box<dyn FnOnce() + Send + 'static>;

struct Resolved {
    header: FontHeader,
    resolver: GlyphResolver,
}

struct Shared {
    name: String,
    pending: Mutex<Option<mpsc::Receiver<Result<Font>>>>,
    resolved: OnceLock<Resolved>,
    ready: AtomicBool,
    notify: Mutex<Option<ReadyCallback>>,
}

impl Shared {
    /// Block until the parse result is available and return the
    /// materialized font. First caller wins; everyone else waits on the
    /// one-shot guard. The ready notification fires after the guard is
    /// released so the callback may itself query the font.
    fn resolve(&self) -> &Resolved {
        let resolved = self.resolved.get_or_init(|| self.materialize());
        self.ready.store(true, Ordering::Release);
        let notify = self.notify.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(callback) = notify {
            callback();
        }
        resolved
    }

    fn materialize(&self) -> Resolved {
        let received = self
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
            .map(|rx| rx.recv());
        let font = match received {
            Some(Ok(Ok(font))) => {
                tracing::debug!(
                    font = %self.name,
                    glyphs = font.glyph_count(),
                    "successfully loaded stroke font"
                );
                font
            }
            Some(Ok(Err(error))) => {
                tracing::error!(
                    font = %self.name,
                    %error,
                    "failed to load stroke font, substituting empty font"
                );
                Font::empty()
            }
            Some(Err(_)) | None => {
                tracing::error!(
                    font = %self.name,
                    "stroke font loader produced no result, substituting empty font"
                );
                Font::empty()
            }
        };
        Resolved {
            header: font.header,
            resolver: GlyphResolver::with_default_replacements(font.glyphs),
        }
    }
}

/// A stroke font with background loading and lazy materialization.
///
/// Cloning is cheap and shares the same underlying font state.
#[derive(Clone)]
pub struct StrokeFont {
    shared: Arc<Shared>,
}

impl StrokeFont {
    /// Begin loading `source` in the background and return immediately.
    pub fn load(name: impl Into<String>, source: impl FontSource) -> StrokeFont {
        Self::load_inner(name.into(), source, None)
    }

    /// Like [`StrokeFont::load`], with a one-shot readiness callback.
    pub fn load_with_notify(
        name: impl Into<String>,
        source: impl FontSource,
        notify: impl FnOnce() + Send + 'static,
    ) -> StrokeFont {
        Self::load_inner(name.into(), source, Some(Box::new(notify)))
    }

    fn load_inner(name: String, source: impl FontSource, notify: Option<ReadyCallback>) -> Self {
        tracing::debug!(font = %name, "start loading stroke font");
        let (tx, rx) = mpsc::channel();
        let shared = Arc::new(Shared {
            name,
            pending: Mutex::new(Some(rx)),
            resolved: OnceLock::new(),
            ready: AtomicBool::new(false),
            notify: Mutex::new(notify),
        });
        let worker = Arc::clone(&shared);
        thread::spawn(move || {
            let result = source.load();
            // The receiver only disappears once a result has been
            // consumed, so a send failure is harmless either way.
            let _ = tx.send(result);
            // Drive materialization so the readiness notification does
            // not wait for the first query.
            worker.resolve();
        });
        StrokeFont { shared }
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// Non-blocking probe: has loading resolved (successfully or not)?
    pub fn is_ready(&self) -> bool {
        self.shared.ready.load(Ordering::Acquire)
    }

    /// Font-wide spacing metrics. Blocks on the first call until
    /// loading resolves.
    pub fn header(&self) -> &FontHeader {
        &self.shared.resolve().header
    }

    /// Resolve a code point to its polylines, consulting the
    /// replacement table on a miss. Blocks like [`StrokeFont::header`].
    pub fn glyph(&self, code_point: char) -> Option<&[Polyline]> {
        self.shared.resolve().resolver.resolve(code_point)
    }

    pub fn glyph_count(&self) -> usize {
        self.shared.resolve().resolver.glyph_count()
    }

    /// Inter-letter gap for the given cap height.
    pub fn letter_spacing(&self, height: f64) -> f64 {
        height * self.header().letter_spacing / DESIGN_HEIGHT
    }

    /// Word gap (whitespace advance) for the given cap height.
    pub fn word_spacing(&self, height: f64) -> f64 {
        height * self.header().word_spacing / DESIGN_HEIGHT
    }

    /// Baseline-to-baseline distance for the given cap height and
    /// line-spacing factor.
    pub fn line_spacing(&self, height: f64, factor: f64) -> f64 {
        height * self.header().line_spacing * factor / DESIGN_HEIGHT
    }
}

impl std::fmt::Debug for StrokeFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrokeFont")
            .field("name", &self.shared.name)
            .field("ready", &self.is_ready())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FontVertex, Glyph};
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    fn sample_font() -> Font {
        let mut font = Font::empty();
        font.header.letter_spacing = 1.8;
        font.header.word_spacing = 4.0;
        font.header.line_spacing = 3.0;
        font.glyphs.insert(
            'A',
            Glyph::new(vec![vec![
                FontVertex::new(0.0, 0.0, 0.0),
                FontVertex::new(2.0, 9.0, 0.0),
                FontVertex::new(4.0, 0.0, 0.0),
            ]]),
        );
        font
    }

    #[test]
    fn test_queries_block_until_loaded() {
        let font = StrokeFont::load(
            "slow.bene",
            LazySource(|| {
                thread::sleep(Duration::from_millis(50));
                Ok(sample_font())
            }),
        );
        // Query immediately; must block, then answer from the result.
        assert_eq!(font.glyph_count(), 1);
        assert!(font.glyph('A').is_some());
        assert!(font.is_ready());
    }

    #[test]
    fn test_spacing_metrics_use_design_height_divisor() {
        let font = StrokeFont::load("metrics.bene", sample_font());
        assert_eq!(font.letter_spacing(9.0), 1.8);
        assert_eq!(font.word_spacing(18.0), 8.0);
        assert_eq!(font.line_spacing(9.0, 2.0), 6.0);
    }

    #[test]
    fn test_parse_failure_degrades_to_empty_font() {
        let font = StrokeFont::load("broken.bene", FontData("not a font at all".into()));
        assert_eq!(font.glyph_count(), 0);
        assert_eq!(font.glyph('A'), None);
        assert_eq!(font.letter_spacing(9.0), 0.0);
        assert!(font.is_ready());
    }

    #[test]
    fn test_ready_fires_exactly_once_on_success() {
        let count = Arc::new(AtomicUsize::new(0));
        let observer = Arc::clone(&count);
        let font = StrokeFont::load_with_notify("ok.bene", sample_font(), move || {
            observer.fetch_add(1, Ordering::SeqCst);
        });
        // Wait for the background thread to resolve the font.
        for _ in 0..200 {
            if count.load(Ordering::SeqCst) == 1 {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);
        // Further queries must not re-fire the notification.
        let _ = font.header();
        let _ = font.glyph('A');
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_ready_fires_exactly_once_on_failure() {
        let count = Arc::new(AtomicUsize::new(0));
        let observer = Arc::clone(&count);
        let font = StrokeFont::load_with_notify(
            "broken.bene",
            FontData("garbage".into()),
            move || {
                observer.fetch_add(1, Ordering::SeqCst);
            },
        );
        assert_eq!(font.glyph_count(), 0);
        for _ in 0..200 {
            if count.load(Ordering::SeqCst) == 1 {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_queries_serialize() {
        let font = StrokeFont::load(
            "race.bene",
            LazySource(|| {
                thread::sleep(Duration::from_millis(20));
                Ok(sample_font())
            }),
        );
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let font = font.clone();
                thread::spawn(move || font.glyph_count())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }
}
