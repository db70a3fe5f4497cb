// Layout cache
// Keeps the last built layout and reuses it while the config is unchanged

use super::headers::build_headers;
use super::renderer::{HeaderRenderers, Renderer};
use super::LayoutError;
use crate::models::calendar_day::CalendarDay;
use crate::models::layout::CalendarLayout;
use crate::models::settings::CalendarConfig;

/// Remembers the most recent layout and reuses it while the config is unchanged.
///
/// The cache keys on the config value only. Call [`LayoutCache::clear`] after
/// swapping renderers or translators.
pub struct LayoutCache<DC, TC> {
    entry: Option<(CalendarConfig, CalendarLayout<DC, TC>)>,
    hits: u64,
    misses: u64,
}

impl<DC, TC> Default for LayoutCache<DC, TC> {
    fn default() -> Self {
        Self {
            entry: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<DC, TC> LayoutCache<DC, TC> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout for `config`, rebuilt only when `config` differs from the cached one.
    ///
    /// A failed build leaves the previous entry in place.
    pub fn get_or_build<D, T>(
        &mut self,
        config: &CalendarConfig,
        renderers: &HeaderRenderers<'_, D, T>,
    ) -> Result<&CalendarLayout<DC, TC>, LayoutError>
    where
        D: Renderer<CalendarDay, Output = DC>,
        T: Renderer<i64, Output = TC>,
    {
        let entry = match self.entry.take() {
            Some(entry) if entry.0 == *config => {
                self.hits += 1;
                log::debug!("Layout cache hit ({} hits)", self.hits);
                entry
            }
            previous => {
                self.misses += 1;
                match build_headers(config, renderers) {
                    Ok(layout) => (config.clone(), layout),
                    Err(err) => {
                        self.entry = previous;
                        return Err(err);
                    }
                }
            }
        };

        Ok(&self.entry.insert(entry).1)
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
